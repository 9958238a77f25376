//! Typed criteria parsing and interactive suggestions.
//!
//! [`CriteriaParser::parse`] turns a criteria string into a [`CriteriaSet`]:
//! every field typed and validated exactly once, so nothing downstream ever
//! casts or re-parses. Name resolution happens here, through the injected
//! [`PlayerDirectory`] and [`RegistryResolver`] -- the parser itself never
//! touches storage.
//!
//! The one deliberate exception is `action:`: its value is kept raw and
//! validated by the compiler, which owns the dispatch table.

use std::sync::Arc;

use uuid::Uuid;
use worldlog_types::{Action, RegistryId, RegistryResolver};

use crate::error::CriteriaError;
use crate::token::{tokenize, Key};

/// Resolves a player name or selector to player identities.
///
/// Backed by the host's player list and profile cache; a selector may match
/// several players, a plain name at most one. An empty result means the
/// name is unknown. Implementations must not block.
pub trait PlayerDirectory: Send + Sync {
    /// All identities the selector resolves to. Empty if none.
    fn resolve(&self, selector: &str) -> Vec<Uuid>;
}

/// A parsed, typed, validated criteria set. Immutable once built.
///
/// Every field is optional; absent fields take their documented defaults at
/// compile time (dimension: the invoker's, limit: 10, action: transactions
/// and placements).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaSet {
    /// Resolved target player identities.
    pub targets: Option<Vec<Uuid>>,
    /// Resolved block type.
    pub block: Option<RegistryId>,
    /// Resolved item type.
    pub item: Option<RegistryId>,
    /// Cube radius around the invoker, non-negative.
    pub range: Option<i32>,
    /// Resolved dimension.
    pub dimension: Option<RegistryId>,
    /// Result row cap, positive.
    pub limit: Option<i64>,
    /// Raw `action:` value; validated when the criteria are compiled.
    pub action: Option<String>,
}

/// Parses criteria strings against the live name resolvers.
pub struct CriteriaParser {
    registry: Arc<RegistryResolver>,
    players: Arc<dyn PlayerDirectory>,
}

impl CriteriaParser {
    /// Create a parser over the shared resolvers.
    pub fn new(registry: Arc<RegistryResolver>, players: Arc<dyn PlayerDirectory>) -> Self {
        Self { registry, players }
    }

    /// Parse a criteria string into a typed [`CriteriaSet`].
    ///
    /// A key given more than once keeps its last value.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError::Syntax`] for malformed text or values of the
    /// wrong type, and [`CriteriaError::Resolution`] when a player, type, or
    /// dimension name does not resolve.
    pub fn parse(&self, text: &str) -> Result<CriteriaSet, CriteriaError> {
        let mut criteria = CriteriaSet::default();

        for token in tokenize(text)? {
            match token.key {
                Key::Target => {
                    let targets = self.players.resolve(&token.value);
                    if targets.is_empty() {
                        return Err(CriteriaError::Resolution {
                            kind: "player",
                            name: token.value,
                        });
                    }
                    criteria.targets = Some(targets);
                }
                Key::Block => {
                    criteria.block = Some(self.resolve_registry("block", &token.value)?);
                }
                Key::Item => {
                    criteria.item = Some(self.resolve_registry("item", &token.value)?);
                }
                Key::Range => {
                    let range: i32 = token.value.parse().map_err(|_| {
                        CriteriaError::syntax(
                            format!("range:{}", token.value),
                            "expected a non-negative integer",
                        )
                    })?;
                    if range < 0 {
                        return Err(CriteriaError::syntax(
                            format!("range:{range}"),
                            "expected a non-negative integer",
                        ));
                    }
                    criteria.range = Some(range);
                }
                Key::Dimension => {
                    criteria.dimension = Some(self.resolve_registry("dimension", &token.value)?);
                }
                Key::Limit => {
                    let limit: i64 = token.value.parse().map_err(|_| {
                        CriteriaError::syntax(
                            format!("limit:{}", token.value),
                            "expected a positive integer",
                        )
                    })?;
                    if limit < 1 {
                        return Err(CriteriaError::syntax(
                            format!("limit:{limit}"),
                            "expected a positive integer",
                        ));
                    }
                    criteria.limit = Some(limit);
                }
                // Kept raw; the compiler owns the closed action vocabulary.
                Key::Action => criteria.action = Some(token.value),
            }
        }

        Ok(criteria)
    }

    /// Completion hints for interactive criteria entry.
    ///
    /// Suggests key prefixes, and values for the `action:` key (the only key
    /// with a closed vocabulary). Never fails: malformed input yields an
    /// empty list.
    pub fn suggest(&self, text: &str) -> Vec<String> {
        // A trailing space means the previous token is finished; offer keys.
        let Some(word) = text.split_whitespace().next_back() else {
            return all_keys();
        };
        if text.ends_with(char::is_whitespace) {
            return all_keys();
        }

        match word.split_once(':') {
            None => Key::ALL
                .iter()
                .filter(|key| key.as_str().starts_with(word))
                .map(|key| format!("{}:", key.as_str()))
                .collect(),
            Some(("action", partial)) => Action::ALL
                .iter()
                .filter(|action| action.as_str().starts_with(partial))
                .map(|action| format!("action:{action}"))
                .collect(),
            // Other values are unbounded registry or player content.
            Some(_) => Vec::new(),
        }
    }

    fn resolve_registry(
        &self,
        kind: &'static str,
        name: &str,
    ) -> Result<RegistryId, CriteriaError> {
        self.registry
            .resolve(name)
            .ok_or_else(|| CriteriaError::Resolution {
                kind,
                name: name.to_owned(),
            })
    }
}

fn all_keys() -> Vec<String> {
    Key::ALL
        .iter()
        .map(|key| format!("{}:", key.as_str()))
        .collect()
}
