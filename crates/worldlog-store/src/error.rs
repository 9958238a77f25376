//! Error types for the storage layer.
//!
//! The split between [`StoreError::Query`] and [`StoreError::Mapping`]
//! matters: a storage failure and an undecodable row are different
//! problems, and neither may ever be collapsed into an empty result set.

/// Errors that can occur in the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The underlying storage call failed (connection, timeout, SQL).
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A returned row could not be decoded into a fully-populated event
    /// record. Indicates a schema or data integrity problem.
    #[error("row mapping failed: {0}")]
    Mapping(#[source] sqlx::Error),

    /// A schema migration failed.
    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store configuration is invalid.
    #[error("configuration error: {0}")]
    Config(String),
}
