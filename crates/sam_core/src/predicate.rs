//! Define the [`TextPredicate`] contract and its two realizations.
//!
//! ## Notes
//! - The contract has exactly one required method, [`TextPredicate::test`]. Everything else is provided.
//! - **Prefix rule**: Realization B compares the first Unicode scalar against `'A'`. Case-sensitive; empty text never
//!   matches.

use crate::registry::RealizationId;

/// The literal prefix checked by the "starts-with-A" realization.
pub const PREFIX: char = 'A';

/// Test a text value and produce a boolean verdict.
///
/// Implementations must be total: every `&str` (empty, non-ASCII, arbitrarily long) yields a verdict and nothing
/// panics.
///
/// Any `Fn(&str) -> bool` is a `TextPredicate`, so a closure can be passed wherever the contract is expected. When the
/// contract should be named at the construction site, wrap the closure in [`FnPredicate`] instead.
pub trait TextPredicate {
    /// Return the verdict for `text`.
    fn test(&self, text: &str) -> bool;

    /// Return the verdict for text that may be absent.
    ///
    /// ## Returns
    /// - (`bool`): `false` for `None`; otherwise the result of [`TextPredicate::test`].
    fn test_optional(&self, text: Option<&str>) -> bool {
        text.is_some_and(|text| self.test(text))
    }
}

impl<F> TextPredicate for F
where
    F: Fn(&str) -> bool,
{
    fn test(&self, text: &str) -> bool {
        self(text)
    }
}

/// Realization A: an explicit type whose verdict is always `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlwaysFalse;

impl TextPredicate for AlwaysFalse {
    fn test(&self, _text: &str) -> bool {
        false
    }
}

/// Adapt a function value to [`TextPredicate`] explicitly.
///
/// A closure already satisfies the contract on its own; the adapter exists so the construction site spells out which
/// contract it is building.
#[derive(Clone, Copy)]
pub struct FnPredicate<F> {
    func: F,
}

impl<F> FnPredicate<F>
where
    F: Fn(&str) -> bool,
{
    pub fn new(func: F) -> Self {
        Self { func }
    }

    /// Unwrap the adapted function value.
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<F> TextPredicate for FnPredicate<F>
where
    F: Fn(&str) -> bool,
{
    fn test(&self, text: &str) -> bool {
        (self.func)(text)
    }
}

impl<F> std::fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnPredicate").finish_non_exhaustive()
    }
}

/// Check whether `text` begins with [`PREFIX`].
///
/// ## Examples
/// ```rust
/// use sam_core::begins_with_a;
///
/// assert!(begins_with_a("Apple"));
/// assert!(!begins_with_a("apple"));
/// assert!(!begins_with_a(""));
/// ```
#[inline]
pub fn begins_with_a(text: &str) -> bool {
    text.starts_with(PREFIX)
}

/// Realization B: an inline function value bound to the contract's sole operation.
pub fn starts_with_a() -> FnPredicate<fn(&str) -> bool> {
    FnPredicate::new(begins_with_a as fn(&str) -> bool)
}

/// Construct both realizations behind the same contract type.
///
/// ## Returns
/// - (`Vec<(RealizationId, Box<dyn TextPredicate>)>`): one entry per realization, in registry order.
pub fn realizations() -> Vec<(RealizationId, Box<dyn TextPredicate>)> {
    vec![
        (RealizationId::AlwaysFalse, Box::new(AlwaysFalse) as Box<dyn TextPredicate>),
        (RealizationId::StartsWithA, Box::new(starts_with_a()) as Box<dyn TextPredicate>),
    ]
}
