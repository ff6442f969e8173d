//! Ordering decisions delegated to a closure

use super::traits::Compare;
use std::cmp::Ordering;

/// Orders two values by calling the captured closure and returning its
/// answer unmodified. No normalization, no caching.
pub struct DelegatingComparer<F> {
    delegate: F,
}

impl<F> DelegatingComparer<F> {
    pub(crate) fn new(delegate: F) -> Self {
        Self { delegate }
    }
}

impl<T: ?Sized, F> Compare<T> for DelegatingComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.delegate)(a, b)
    }
}
