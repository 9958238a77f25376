//! The closed `action:` vocabulary and its category dispatch.
//!
//! A criteria string may name at most one action. The vocabulary is closed:
//! anything outside it is rejected when the criteria are compiled, not when
//! they are parsed, so the parser stays a pure tokenizer for this key.

use serde::{Deserialize, Serialize};

/// One of the three independent event streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Block placements and breaks.
    Placement,
    /// Container item transfers.
    Transaction,
    /// Entity-caused destruction.
    Grief,
}

/// The closed set of `action:` values a criteria string may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Blocks placed by a player.
    Placed,
    /// Blocks broken by a player.
    Broken,
    /// Items added to a container.
    Added,
    /// Items taken from a container.
    Taken,
    /// Entity-caused destruction.
    Grief,
    /// All three event streams.
    Everything,
}

impl Action {
    /// Every action value, in suggestion order.
    pub const ALL: [Self; 6] = [
        Self::Placed,
        Self::Broken,
        Self::Added,
        Self::Taken,
        Self::Grief,
        Self::Everything,
    ];

    /// Parse a criteria value into an action, or `None` if outside the
    /// closed vocabulary. The caller decides how to report the rejection.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "placed" => Some(Self::Placed),
            "broken" => Some(Self::Broken),
            "added" => Some(Self::Added),
            "taken" => Some(Self::Taken),
            "grief" => Some(Self::Grief),
            "everything" => Some(Self::Everything),
            _ => None,
        }
    }

    /// The criteria-string spelling of this action.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Broken => "broken",
            Self::Added => "added",
            Self::Taken => "taken",
            Self::Grief => "grief",
            Self::Everything => "everything",
        }
    }

    /// The categories a search with this action executes against, in
    /// execution order.
    pub const fn dispatch(self) -> &'static [Category] {
        match self {
            Self::Placed | Self::Broken => &[Category::Placement],
            Self::Added | Self::Taken => &[Category::Transaction],
            Self::Grief => &[Category::Grief],
            Self::Everything => &[Category::Grief, Category::Transaction, Category::Placement],
        }
    }
}

/// Categories searched when the criteria carry no `action` key: container
/// transactions and placements, never grief.
pub const DEFAULT_DISPATCH: &[Category] = &[Category::Transaction, Category::Placement];

impl core::fmt::Display for Action {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_closed_vocabulary() {
        for action in Action::ALL {
            assert_eq!(Action::parse(action.as_str()), Some(action));
        }
    }

    #[test]
    fn parse_rejects_everything_else() {
        assert_eq!(Action::parse("flying"), None);
        assert_eq!(Action::parse("PLACED"), None);
        assert_eq!(Action::parse(""), None);
    }

    #[test]
    fn default_dispatch_excludes_grief() {
        assert!(!DEFAULT_DISPATCH.contains(&Category::Grief));
        assert!(DEFAULT_DISPATCH.contains(&Category::Transaction));
        assert!(DEFAULT_DISPATCH.contains(&Category::Placement));
    }

    #[test]
    fn everything_dispatches_all_three() {
        let categories = Action::Everything.dispatch();
        assert_eq!(categories.len(), 3);
        assert!(categories.contains(&Category::Grief));
    }

    #[test]
    fn single_category_actions() {
        assert_eq!(Action::Placed.dispatch(), &[Category::Placement]);
        assert_eq!(Action::Taken.dispatch(), &[Category::Transaction]);
        assert_eq!(Action::Grief.dispatch(), &[Category::Grief]);
    }
}
