//! Define the generic [`Filter`] contract.
//!
//! `Filter<T>` has the same one-method shape as [`TextPredicate`], generalized over the tested value. Unlike
//! `TextPredicate` there is no blanket impl for closures: a closure only becomes a `Filter` through [`FilterFn`], so
//! the construction site always names which contract it builds. A text predicate is presented as a `Filter<str>`
//! through [`TextFilter`].

use std::fmt;
use std::marker::PhantomData;

use crate::predicate::TextPredicate;

/// Decide whether a value of type `T` is accepted.
pub trait Filter<T: ?Sized> {
    fn accepts(&self, value: &T) -> bool;
}

/// Adapt a closure `Fn(&T) -> bool` to [`Filter<T>`].
///
/// ## Examples
/// ```rust
/// use sam_core::{Filter, FilterFn};
///
/// let filter = FilterFn::<str, _>::new(|s: &str| s.starts_with('A'));
/// assert!(filter.accepts("Apple"));
///
/// let even = FilterFn::new(|n: &i64| n % 2 == 0);
/// assert!(even.accepts(&4));
/// ```
pub struct FilterFn<T: ?Sized, F> {
    func: F,
    _value: PhantomData<fn(&T)>,
}

impl<T: ?Sized, F> FilterFn<T, F>
where
    F: Fn(&T) -> bool,
{
    pub fn new(func: F) -> Self {
        Self {
            func,
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized, F> Filter<T> for FilterFn<T, F>
where
    F: Fn(&T) -> bool,
{
    fn accepts(&self, value: &T) -> bool {
        (self.func)(value)
    }
}

impl<T: ?Sized, F: Clone> Clone for FilterFn<T, F> {
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            _value: PhantomData,
        }
    }
}

impl<T: ?Sized, F> fmt::Debug for FilterFn<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterFn").finish_non_exhaustive()
    }
}

/// Present a [`TextPredicate`] as a [`Filter<str>`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFilter<P>(pub P);

impl<P: TextPredicate> Filter<str> for TextFilter<P> {
    fn accepts(&self, value: &str) -> bool {
        self.0.test(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{AlwaysFalse, starts_with_a};

    fn accepted<T: ?Sized>(filter: &dyn Filter<T>, value: &T) -> bool {
        filter.accepts(value)
    }

    #[test]
    fn test_filter_fn_over_str() {
        let filter = FilterFn::<str, _>::new(|s: &str| s.starts_with('A'));
        assert!(accepted::<str>(&filter, "Apple"));
        assert!(!accepted::<str>(&filter, "apple"));
        assert!(!accepted::<str>(&filter, ""));
    }

    #[test]
    fn test_filter_fn_over_sized_values() {
        let positive = FilterFn::new(|n: &i32| *n > 0);
        assert!(positive.accepts(&1));
        assert!(!positive.accepts(&0));
        assert!(!positive.clone().accepts(&-7));
    }

    #[test]
    fn test_text_filter_bridges_predicates() {
        assert!(TextFilter(starts_with_a()).accepts("Apple"));
        assert!(!TextFilter(AlwaysFalse).accepts("Apple"));

        let owned = String::from("Avocado");
        assert!(TextFilter(starts_with_a()).accepts(owned.as_str()));
    }

    #[test]
    fn test_text_filter_accepts_plain_closure() {
        let filter = TextFilter(|s: &str| s.is_empty());
        assert!(accepted::<str>(&filter, ""));
        assert!(!accepted::<str>(&filter, "A"));
    }
}
