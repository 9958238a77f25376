//! Search entry point and configuration for the Worldlog audit subsystem.
//!
//! This crate ties the layers together for the interactive search path:
//!
//! ```text
//! criteria string + invoker
//!     |
//!     +-- parse    (worldlog-criteria)   synchronous, user-correctable errors
//!     +-- compile  (worldlog-criteria)
//!     +-- dispatch (this crate)          concurrent per-category queries
//!     |     |-- PlacementStore::search
//!     |     |-- TransactionStore::search
//!     |     +-- GriefStore::search
//!     +-- assemble --> SearchOutcome
//! ```
//!
//! The caller runs [`service::SearchService::search`] on a worker runtime;
//! it never belongs on a latency-sensitive loop. Results for one request
//! are fully assembled before they are returned.
//!
//! # Modules
//!
//! - [`service`] -- the search service and its outcome type
//! - [`config`] -- file-based configuration for the whole subsystem
//! - [`error`] -- the user-facing error taxonomy

pub mod config;
pub mod error;
pub mod service;

// Re-export primary types for convenience.
pub use config::{ConfigError, DatabaseSection, QueueSection, WorldlogConfig};
pub use error::SearchError;
pub use service::{page, Invoker, SearchOutcome, SearchService};
