//! Shared name-to-id resolver for registry references.
//!
//! Every namespaced name worldlog stores -- block types, item types,
//! dimensions -- is normalized to a small integer id in the `registry`
//! table. This resolver is the in-process cache of that table: a pure
//! lookup, populated externally (at startup from the table, and as new
//! names are first logged). It never touches storage itself.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock};

use crate::ids::RegistryId;

/// In-memory map from namespaced name to registry id.
///
/// Cheap to share behind an `Arc`; reads vastly outnumber writes.
#[derive(Debug, Default)]
pub struct RegistryResolver {
    names: RwLock<BTreeMap<String, RegistryId>>,
}

impl RegistryResolver {
    /// Create an empty resolver.
    pub const fn new() -> Self {
        Self {
            names: RwLock::new(BTreeMap::new()),
        }
    }

    /// Record a name-to-id mapping. Later inserts for the same name win,
    /// matching the table's uniqueness on `name`.
    pub fn insert(&self, name: impl Into<String>, id: RegistryId) {
        let mut names = self
            .names
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        names.insert(name.into(), id);
    }

    /// Bulk-record mappings, e.g. when warming the cache from the table.
    pub fn extend<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (String, RegistryId)>,
    {
        let mut names = self
            .names
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        names.extend(entries);
    }

    /// Look up the id for a namespaced name.
    pub fn resolve(&self, name: &str) -> Option<RegistryId> {
        let names = self.names.read().unwrap_or_else(PoisonError::into_inner);
        names.get(name).copied()
    }

    /// Number of cached names.
    pub fn len(&self) -> usize {
        let names = self.names.read().unwrap_or_else(PoisonError::into_inner);
        names.len()
    }

    /// Whether the cache holds no names yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_name() {
        let resolver = RegistryResolver::new();
        resolver.insert("minecraft:stone", RegistryId::from(4));
        assert_eq!(resolver.resolve("minecraft:stone"), Some(RegistryId::from(4)));
    }

    #[test]
    fn resolve_unknown_name_is_none() {
        let resolver = RegistryResolver::new();
        assert_eq!(resolver.resolve("minecraft:not_a_thing"), None);
    }

    #[test]
    fn later_insert_wins() {
        let resolver = RegistryResolver::new();
        resolver.insert("minecraft:overworld", RegistryId::from(1));
        resolver.insert("minecraft:overworld", RegistryId::from(9));
        assert_eq!(
            resolver.resolve("minecraft:overworld"),
            Some(RegistryId::from(9))
        );
    }

    #[test]
    fn extend_warms_the_cache() {
        let resolver = RegistryResolver::new();
        resolver.extend([
            ("minecraft:stone".to_owned(), RegistryId::from(1)),
            ("minecraft:dirt".to_owned(), RegistryId::from(2)),
        ]);
        assert_eq!(resolver.len(), 2);
        assert!(!resolver.is_empty());
    }
}
