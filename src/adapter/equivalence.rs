//! Equality and hashing delegated to a closure pair

use super::traits::Equivalence;
use crate::error::{DelegateError, DelegateResult};

/// Boxed equality predicate, as produced by [`EquivalenceBuilder`].
pub type BoxEqualsFn<T> = Box<dyn Fn(&T, &T) -> bool>;

/// Boxed hash delegate, as produced by [`EquivalenceBuilder`].
pub type BoxHashFn<T> = Box<dyn Fn(&T) -> u64>;

/// Answers equality and hashing by forwarding to the two captured closures.
///
/// The closures are independent: this type never checks that values which
/// compare equal also hash equally. Supplying a consistent pair is the
/// caller's obligation.
pub struct DelegatingEqualityComparer<E, H> {
    equals: E,
    hash: H,
}

impl<E, H> DelegatingEqualityComparer<E, H> {
    pub(crate) fn new(equals: E, hash: H) -> Self {
        Self { equals, hash }
    }
}

impl<T: ?Sized, E, H> Equivalence<T> for DelegatingEqualityComparer<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equivalent(&self, a: &T, b: &T) -> bool {
        (self.equals)(a, b)
    }

    fn hash_one(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Assembles a [`DelegatingEqualityComparer`] from delegates supplied at
/// runtime, reporting whichever mandatory delegate is missing by name.
pub struct EquivalenceBuilder<T: ?Sized> {
    equals: Option<BoxEqualsFn<T>>,
    hash: Option<BoxHashFn<T>>,
}

impl<T: ?Sized> EquivalenceBuilder<T> {
    pub fn new() -> Self {
        Self {
            equals: None,
            hash: None,
        }
    }

    /// Supply the equality predicate.
    pub fn equals(mut self, delegate: impl Fn(&T, &T) -> bool + 'static) -> Self {
        self.equals = Some(Box::new(delegate));
        self
    }

    /// Supply the hash delegate.
    pub fn hash(mut self, delegate: impl Fn(&T) -> u64 + 'static) -> Self {
        self.hash = Some(Box::new(delegate));
        self
    }

    /// Build the comparer.
    ///
    /// The two delegates are checked independently, `equals` first, so the
    /// error names the delegate that is actually missing.
    pub fn build(self) -> DelegateResult<DelegatingEqualityComparer<BoxEqualsFn<T>, BoxHashFn<T>>> {
        let equals = self.equals.ok_or(DelegateError::MissingDelegate("equals"))?;
        let hash = self.hash.ok_or(DelegateError::MissingDelegate("hash"))?;
        Ok(DelegatingEqualityComparer::new(equals, hash))
    }
}

impl<T: ?Sized> Default for EquivalenceBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn never_equals(_: &i32, _: &i32) -> bool {
        panic!("equality delegate must not be invoked");
    }

    fn never_hash(_: &i32) -> u64 {
        panic!("hash delegate must not be invoked");
    }

    #[test]
    fn forwards_equals_with_argument_order() {
        let seen = Rc::new(Cell::new((0, 0)));
        let comparer = DelegatingEqualityComparer::new(
            {
                let seen = seen.clone();
                move |a: &i32, b: &i32| {
                    seen.set((*a, *b));
                    false
                }
            },
            never_hash,
        );
        assert!(!comparer.equivalent(&123, &456));
        assert_eq!(seen.get(), (123, 456));
    }

    #[test]
    fn forwards_hash() {
        let comparer = DelegatingEqualityComparer::new(never_equals, |v: &i32| *v as u64 + 1);
        assert_eq!(comparer.hash_one(&41), 42);
    }

    #[test]
    fn inconsistent_delegates_are_not_validated() {
        // Everything is "equal" while hashes still differ; the adapter
        // forwards both answers without objection.
        let comparer = DelegatingEqualityComparer::new(|_: &i32, _: &i32| true, |v: &i32| *v as u64);
        assert!(comparer.equivalent(&1, &2));
        assert_ne!(comparer.hash_one(&1), comparer.hash_one(&2));
    }

    #[test]
    fn builder_assembles_both_delegates() {
        let comparer = EquivalenceBuilder::<str>::new()
            .equals(|a, b| a.eq_ignore_ascii_case(b))
            .hash(|v| v.len() as u64)
            .build()
            .expect("both delegates supplied");
        assert!(comparer.equivalent("Delegate", "delegate"));
        assert_eq!(comparer.hash_one("four"), 4);
    }

    #[test]
    fn builder_reports_missing_equals() {
        let result = EquivalenceBuilder::<i32>::new().hash(|v| *v as u64).build();
        match result {
            Err(DelegateError::MissingDelegate(name)) => assert_eq!(name, "equals"),
            Ok(_) => panic!("build must fail without an equality delegate"),
        }
    }

    #[test]
    fn builder_reports_missing_hash() {
        let result = EquivalenceBuilder::<i32>::new().equals(|a, b| a == b).build();
        match result {
            Err(DelegateError::MissingDelegate(name)) => assert_eq!(name, "hash"),
            Ok(_) => panic!("build must fail without a hash delegate"),
        }
    }
}
