#![forbid(unsafe_code)]
//! Provide one-method capability contracts and their realizations.
//!
//! This crate is intentionally small and dependency-free. It contains the contracts that the CLI constructs and the
//! tests exercise:
//! - [`TextPredicate`]: "test a text value and produce a boolean verdict".
//! - [`Filter`]: the same shape, generic over the tested value.
//!
//! ## Notes
//!
//! - **No IO** and no global state. Every verdict is a pure, total function of its input.
//! - A contract can be satisfied two ways: by an explicit named type ([`AlwaysFalse`]) or by a function value, either
//!   implicitly (any `Fn(&str) -> bool`) or through an explicit adapter ([`FnPredicate`], [`FilterFn`]).
//!
//! ## Examples
//! ```rust
//! use sam_core::{AlwaysFalse, TextPredicate, starts_with_a};
//!
//! let explicit: Box<dyn TextPredicate> = Box::new(AlwaysFalse);
//! let inline: Box<dyn TextPredicate> = Box::new(starts_with_a());
//!
//! assert!(!explicit.test("Apple"));
//! assert!(inline.test("Apple"));
//! ```

pub mod filter;
pub mod predicate;
pub mod registry;

pub use filter::{Filter, FilterFn, TextFilter};
pub use predicate::{AlwaysFalse, FnPredicate, TextPredicate, begins_with_a, realizations, starts_with_a};
pub use registry::{RealizationId, RealizationInfo, RealizationStyle};
