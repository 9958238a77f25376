//! Tokenizer for the criteria grammar.
//!
//! A criteria string is whitespace-separated `key:value` tokens. Values may
//! be double-quoted when they contain whitespace. Unknown keys are rejected
//! here, not ignored; typed conversion of values happens in the parser.

use crate::error::CriteriaError;

/// The fixed, closed set of criteria keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Player name or selector.
    Target,
    /// Block type filter.
    Block,
    /// Item type filter.
    Item,
    /// Cube radius around the invoker.
    Range,
    /// Dimension filter.
    Dimension,
    /// Result row cap.
    Limit,
    /// Action kind.
    Action,
}

impl Key {
    /// Every key, in suggestion order.
    pub const ALL: [Self; 7] = [
        Self::Target,
        Self::Block,
        Self::Item,
        Self::Range,
        Self::Dimension,
        Self::Limit,
        Self::Action,
    ];

    /// Parse a key name, or `None` if it is not a recognized key.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "target" => Some(Self::Target),
            "block" => Some(Self::Block),
            "item" => Some(Self::Item),
            "range" => Some(Self::Range),
            "dimension" => Some(Self::Dimension),
            "limit" => Some(Self::Limit),
            "action" => Some(Self::Action),
            _ => None,
        }
    }

    /// The criteria-string spelling of this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Target => "target",
            Self::Block => "block",
            Self::Item => "item",
            Self::Range => "range",
            Self::Dimension => "dimension",
            Self::Limit => "limit",
            Self::Action => "action",
        }
    }
}

/// One `key:value` pair from a criteria string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The recognized key.
    pub key: Key,
    /// The raw value text, quotes removed.
    pub value: String,
}

/// Split a criteria string into recognized `key:value` tokens.
///
/// # Errors
///
/// Returns [`CriteriaError::Syntax`] naming the offending token when a key
/// is unrecognized, a token has no `:`, a value is empty, or a quoted value
/// is unterminated.
pub fn tokenize(text: &str) -> Result<Vec<Token>, CriteriaError> {
    let mut tokens = Vec::new();
    let mut chars = text.chars().peekable();

    loop {
        // Skip inter-token whitespace.
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        // Key part: everything up to the ':'.
        let mut key_text = String::new();
        let mut saw_colon = false;
        while let Some(c) = chars.next_if(|&c| !c.is_whitespace()) {
            if c == ':' {
                saw_colon = true;
                break;
            }
            key_text.push(c);
        }

        if !saw_colon {
            return Err(CriteriaError::syntax(&key_text, "expected key:value"));
        }
        let Some(key) = Key::parse(&key_text) else {
            return Err(CriteriaError::syntax(&key_text, "unrecognized key"));
        };

        // Value part: quoted (may contain whitespace) or bare.
        let value = if chars.next_if_eq(&'"').is_some() {
            let mut value = String::new();
            let mut terminated = false;
            for c in chars.by_ref() {
                if c == '"' {
                    terminated = true;
                    break;
                }
                value.push(c);
            }
            if !terminated {
                return Err(CriteriaError::syntax(
                    format!("{key_text}:\"{value}"),
                    "unterminated quote",
                ));
            }
            value
        } else {
            let mut value = String::new();
            while let Some(c) = chars.next_if(|&c| !c.is_whitespace()) {
                value.push(c);
            }
            value
        };

        if value.is_empty() {
            return Err(CriteriaError::syntax(format!("{key_text}:"), "missing value"));
        }

        tokens.push(Token { key, value });
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_simple_pairs() {
        let tokens = tokenize("target:Alice limit:5").ok();
        let tokens = tokens.unwrap_or_default();
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.first().map(|t| t.key), Some(Key::Target));
        assert_eq!(tokens.first().map(|t| t.value.as_str()), Some("Alice"));
        assert_eq!(tokens.get(1).map(|t| t.key), Some(Key::Limit));
    }

    #[test]
    fn tokenize_quoted_value_keeps_whitespace() {
        let tokens = tokenize("target:\"Ancient King\"").ok().unwrap_or_default();
        assert_eq!(tokens.first().map(|t| t.value.as_str()), Some("Ancient King"));
    }

    #[test]
    fn tokenize_empty_string_is_empty() {
        let tokens = tokenize("   ").ok().unwrap_or_default();
        assert!(tokens.is_empty());
    }

    #[test]
    fn unknown_key_is_rejected_with_token() {
        let err = tokenize("radius:5");
        assert_eq!(
            err,
            Err(CriteriaError::syntax("radius", "unrecognized key"))
        );
    }

    #[test]
    fn bare_word_is_rejected() {
        let err = tokenize("stone");
        assert_eq!(err, Err(CriteriaError::syntax("stone", "expected key:value")));
    }

    #[test]
    fn missing_value_is_rejected() {
        let err = tokenize("block:");
        assert_eq!(err, Err(CriteriaError::syntax("block:", "missing value")));
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        let err = tokenize("target:\"Ancient King");
        assert!(matches!(err, Err(CriteriaError::Syntax { detail, .. }) if detail == "unterminated quote"));
    }

    #[test]
    fn namespaced_values_keep_their_colon() {
        // Only the first ':' separates key from value.
        let tokens = tokenize("block:minecraft:stone").ok().unwrap_or_default();
        assert_eq!(
            tokens.first().map(|t| t.value.as_str()),
            Some("minecraft:stone")
        );
    }

    #[test]
    fn empty_quoted_value_is_rejected() {
        let err = tokenize("target:\"\"");
        assert!(matches!(err, Err(CriteriaError::Syntax { detail, .. }) if detail == "missing value"));
    }
}
