//! Error types for the search entry point.
//!
//! Parse and compile failures pass through with their token-level detail --
//! they are user-correctable and surfaced synchronously. Storage failures
//! surface as a single query-failed message; the full detail goes to the
//! log at the point of failure, never to the user.

use worldlog_criteria::CriteriaError;
use worldlog_store::StoreError;

/// Errors that can reach the caller of a search.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// The criteria string was malformed, named something unknown, or
    /// carried an action outside the closed vocabulary.
    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    /// A storage call failed during query execution. Never reported as an
    /// empty result.
    #[error("query failed: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn criteria_errors_keep_their_token_detail() {
        let err = SearchError::from(CriteriaError::InvalidAction("flying".to_owned()));
        assert_eq!(err.to_string(), "invalid action: flying");
    }
}
