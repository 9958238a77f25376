//! Shared type definitions for the Worldlog audit subsystem.
//!
//! Worldlog records world-mutation events (block placements, container
//! transactions, grief) in an append-only store and lets moderators query
//! them through a compact criteria language. This crate holds the types
//! every other layer speaks: identifiers, positions, event records, the
//! closed action vocabulary, and the registry name resolver.
//!
//! # Modules
//!
//! - [`ids`] -- integer identifier newtypes for players and registry names
//! - [`pos`] -- block positions and axis-aligned search cubes
//! - [`events`] -- display-ready event records returned by searches
//! - [`action`] -- the closed `action:` vocabulary and category dispatch
//! - [`registry`] -- shared name-to-id resolver for types and dimensions

pub mod action;
pub mod events;
pub mod ids;
pub mod pos;
pub mod registry;

// Re-export primary types for convenience.
pub use action::{Action, Category, DEFAULT_DISPATCH};
pub use events::{Grief, Placement, Transaction};
pub use ids::{PlayerId, RegistryId};
pub use pos::{BlockPos, Cube};
pub use registry::RegistryResolver;
