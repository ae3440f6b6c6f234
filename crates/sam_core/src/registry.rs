//! Define the vocabulary of [`TextPredicate`](crate::TextPredicate) realizations.
//!
//! A stable identifier ([`RealizationId`]) plus a const metadata table ([`REALIZATIONS`]) recording each
//! realization's canonical name and construction style. Callers log and look up realizations by ID instead of by
//! ad-hoc strings.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//!
//! ## Examples
//! ```rust
//! use sam_core::registry::{self, RealizationId};
//!
//! assert_eq!(registry::from_str("starts-with-a"), Some(RealizationId::StartsWithA));
//! assert_eq!(registry::as_str(RealizationId::AlwaysFalse), "always-false");
//! ```

/// Stable identifier for every realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RealizationId {
    AlwaysFalse,
    StartsWithA,
}

/// How a realization satisfies the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealizationStyle {
    /// A named type with a full method body.
    Explicit,
    /// A function value bound to the contract's sole operation.
    Inline,
}

/// Metadata for a realization.
#[derive(Debug, Clone, Copy)]
pub struct RealizationInfo {
    pub id: RealizationId,
    pub canonical: &'static str,
    pub style: RealizationStyle,
    pub summary: &'static str,
}

/// Registry of all realizations, in construction order.
pub const REALIZATIONS: &[RealizationInfo] = &[
    RealizationInfo {
        id: RealizationId::AlwaysFalse,
        canonical: "always-false",
        style: RealizationStyle::Explicit,
        summary: "Ignores its input and always returns false.",
    },
    RealizationInfo {
        id: RealizationId::StartsWithA,
        canonical: "starts-with-a",
        style: RealizationStyle::Inline,
        summary: "Returns true exactly when the text begins with 'A'.",
    },
];

/// Canonical name.
pub fn as_str(id: RealizationId) -> &'static str {
    info_for(id).canonical
}

/// Full metadata for a realization.
pub fn info_for(id: RealizationId) -> &'static RealizationInfo {
    match id {
        RealizationId::AlwaysFalse => &REALIZATIONS[0],
        RealizationId::StartsWithA => &REALIZATIONS[1],
    }
}

/// Lookup by canonical name.
///
/// ## Returns
/// - `Some(RealizationId)` if `s` names a registered realization.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<RealizationId> {
    REALIZATIONS.iter().find(|r| r.canonical == s).map(|r| r.id)
}
