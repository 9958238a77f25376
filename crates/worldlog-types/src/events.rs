//! Display-ready event records returned by searches.
//!
//! Each record is a fully joined row: foreign keys have already been
//! resolved back to player and registry names by the repository query, so
//! consumers can render results without further lookups. Records are
//! immutable history; nothing in this subsystem updates or deletes them.
//!
//! Timestamps are always UTC. The `id` field is the storage-assigned
//! monotonic id and is the only supported recency ordering.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::pos::BlockPos;

/// A block placed or broken by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    /// Monotonic storage id.
    pub id: i64,
    /// Name of the acting player.
    pub player_name: String,
    /// When the mutation happened (UTC).
    pub at: DateTime<Utc>,
    /// Namespaced block type name.
    pub block: String,
    /// Where the block was placed or broken.
    pub pos: BlockPos,
    /// `true` = placed, `false` = broken.
    pub placed: bool,
    /// Dimension the mutation happened in.
    pub dimension: String,
}

/// An item moved into or out of a container by a player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Monotonic storage id.
    pub id: i64,
    /// Name of the acting player.
    pub player_name: String,
    /// When the transfer happened (UTC).
    pub at: DateTime<Utc>,
    /// Namespaced item type name.
    pub item: String,
    /// Container position.
    pub pos: BlockPos,
    /// Signed item count: positive = added, negative = taken.
    pub delta: i32,
    /// Dimension the container is in.
    pub dimension: String,
}

/// Entity-caused destruction, e.g. an explosion or a burned block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grief {
    /// Monotonic storage id.
    pub id: i64,
    /// Responsible player, if one could be attributed. Environment-caused
    /// grief (lightning, wandering creepers) has no player.
    pub player_name: Option<String>,
    /// When the destruction happened (UTC).
    pub at: DateTime<Utc>,
    /// Where it happened.
    pub pos: BlockPos,
    /// Cause descriptor, e.g. the entity or mechanism responsible.
    pub cause: String,
    /// Dimension it happened in.
    pub dimension: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_roundtrip_serde() {
        let placement = Placement {
            id: 1,
            player_name: "Alice".to_owned(),
            at: Utc::now(),
            block: "minecraft:stone".to_owned(),
            pos: BlockPos::new(1, 64, -3),
            placed: true,
            dimension: "minecraft:overworld".to_owned(),
        };
        let json = serde_json::to_string(&placement).ok();
        let restored: Option<Placement> =
            json.as_deref().and_then(|j| serde_json::from_str(j).ok());
        assert_eq!(restored.as_ref(), Some(&placement));
    }

    #[test]
    fn grief_player_is_optional() {
        let grief = Grief {
            id: 2,
            player_name: None,
            at: Utc::now(),
            pos: BlockPos::new(0, 70, 0),
            cause: "minecraft:creeper".to_owned(),
            dimension: "minecraft:overworld".to_owned(),
        };
        let json = serde_json::to_string(&grief).ok();
        assert!(json.is_some_and(|j| j.contains("null")));
    }
}
