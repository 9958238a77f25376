//! Error types for criteria parsing and compilation.
//!
//! The three variants match how a moderator can get a criteria string
//! wrong: malformed text, a name that does not resolve, and an action
//! outside the closed vocabulary. All are user-correctable and are
//! surfaced synchronously with the offending token named.

/// Errors produced while parsing or compiling a criteria string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    /// The criteria text is malformed: an unknown key, a missing value,
    /// an unterminated quote, or a value that is not of the expected type.
    #[error("invalid criteria at '{token}': {detail}")]
    Syntax {
        /// The offending token, verbatim.
        token: String,
        /// What was wrong with it.
        detail: String,
    },

    /// A referenced player, type, or dimension does not exist.
    #[error("unknown {kind}: {name}")]
    Resolution {
        /// What kind of name failed to resolve (`player`, `block`, `item`,
        /// `dimension`).
        kind: &'static str,
        /// The name that failed to resolve, verbatim.
        name: String,
    },

    /// The `action:` value is outside the closed vocabulary. Raised at
    /// compile time, after parsing succeeded.
    #[error("invalid action: {0}")]
    InvalidAction(String),
}

impl CriteriaError {
    /// Build a syntax error for a token.
    pub fn syntax(token: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Syntax {
            token: token.into(),
            detail: detail.into(),
        }
    }
}
