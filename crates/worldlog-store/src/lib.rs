//! `PostgreSQL` repositories and the batched write queue for Worldlog.
//!
//! The three event streams (placements, container transactions, grief) are
//! independent append-only tables. Reads and writes take different paths:
//!
//! ```text
//! moderator search                     game-event hooks
//!     |                                     |
//!     v                                     v  enqueue (never blocks)
//! PlacementStore / TransactionStore    WriteQueue buffer
//!     / GriefStore                          |
//!     |  parameterized SELECT               |  interval or size trigger
//!     v                                     v
//! PostgreSQL  <------ one transaction ---- batch flusher
//!                     per flush cycle      (UNNEST insert per shape)
//! ```
//!
//! Repositories are plain structs holding a pool reference -- constructed
//! and injected by the caller, never global.
//!
//! # Modules
//!
//! - [`postgres`] -- connection pool wrapper and configuration
//! - [`placements`] / [`transactions`] / [`grief`] -- per-category repositories
//! - [`queue`] -- priority-ordered batched write queue
//! - [`error`] -- shared error type

pub mod error;
pub mod grief;
pub mod placements;
pub mod postgres;
pub mod queue;
pub mod transactions;

mod bind;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use grief::GriefStore;
pub use placements::PlacementStore;
pub use postgres::{StoreConfig, StorePool};
pub use queue::{
    FlushFailure, GriefInsert, PlacementInsert, QueueConfig, TransactionInsert, WriteOperation,
    WriteQueue,
};
pub use transactions::TransactionStore;
