//! Criteria parsing and query compilation for the Worldlog audit subsystem.
//!
//! Moderators describe a search as a compact criteria string, e.g.
//!
//! ```text
//! target:Alice block:minecraft:stone range:10 action:broken
//! ```
//!
//! This crate turns that string into parameterized predicate fragments, one
//! per event category, without ever touching the database:
//!
//! ```text
//! criteria string
//!     |
//!     +-- tokenize  --> key:value tokens          (token)
//!     +-- parse     --> typed CriteriaSet         (parser)
//!     +-- compile   --> CompiledQuery             (compile)
//!                       |-- placement fragment
//!                       |-- transaction fragment
//!                       +-- grief fragment
//! ```
//!
//! Every user-controlled value ends up as a bound parameter; clause text is
//! only ever assembled from the [`fragment::Column`] whitelist and fixed
//! string constants.
//!
//! # Modules
//!
//! - [`token`] -- `key:value` tokenizer with quoted-value support
//! - [`parser`] -- typed [`parser::CriteriaSet`] construction and suggestions
//! - [`fragment`] -- parameterized predicate fragments and the column whitelist
//! - [`compile`] -- per-category compilation and action dispatch
//! - [`error`] -- shared error type

pub mod compile;
pub mod error;
pub mod fragment;
pub mod parser;
pub mod token;

// Re-export primary types for convenience.
pub use compile::{compile, CompiledQuery, InvokerContext, DEFAULT_LIMIT};
pub use error::CriteriaError;
pub use fragment::{BindValue, Column, QueryFragment};
pub use parser::{CriteriaParser, CriteriaSet, PlayerDirectory};
pub use token::{tokenize, Key, Token};
