#![forbid(unsafe_code)]
//! Single-abstract-method text predicates.
//!
//! A [`TextPredicate`] has exactly one required operation: test a text value and produce a boolean verdict. This crate
//! provides the command-line entry point that constructs both realizations of the contract, plus re-exports of the
//! pure contracts from `sam_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Every predicate is total and never panics. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod version;

pub use sam_core::registry;
pub use sam_core::{
    AlwaysFalse, Filter, FilterFn, FnPredicate, RealizationId, RealizationStyle, TextFilter, TextPredicate,
    begins_with_a, realizations, starts_with_a,
};
