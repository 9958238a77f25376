//! Integer identifier newtypes for storage foreign keys.
//!
//! Players and registry names (block/item types, dimensions) are stored as
//! small integer ids in the event tables. Wrapping them prevents a player id
//! from being bound where a registry id belongs. Ids are assigned by the
//! database; there is no app-side constructor beyond [`From<i32>`].

use serde::{Deserialize, Serialize};

/// Internal id of a row in the `players` table.
///
/// A player's stable identity is their UUID; this id is the storage-side
/// foreign key it normalizes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub i32);

impl PlayerId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for PlayerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Internal id of a row in the `registry` table.
///
/// The registry is a shared lookup table for every namespaced name worldlog
/// references: block types, item types, and dimensions alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RegistryId(pub i32);

impl RegistryId {
    /// Return the inner integer value.
    pub const fn into_inner(self) -> i32 {
        self.0
    }
}

impl From<i32> for RegistryId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for RegistryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let player = PlayerId::from(7);
        let registry = RegistryId::from(7);
        // Same inner value, different types -- the compiler enforces no mixing.
        assert_eq!(player.into_inner(), registry.into_inner());
    }

    #[test]
    fn id_display_matches_inner() {
        let id = RegistryId::from(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = PlayerId::from(3);
        let json = serde_json::to_string(&original).ok();
        let restored: Option<PlayerId> =
            json.as_deref().and_then(|j| serde_json::from_str(j).ok());
        assert_eq!(restored, Some(original));
    }
}
