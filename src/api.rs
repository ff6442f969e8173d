//! Factory functions — the single construction entry point
//!
//! One factory per adapter kind. Each takes the closure(s) the adapter will
//! forward to and returns the adapter ready for use; required closures are
//! enforced by the signatures themselves. Where delegates only become known
//! at runtime, use [`EquivalenceBuilder`](crate::EquivalenceBuilder) or
//! [`ObserverBuilder`](crate::ObserverBuilder) instead, which report a
//! missing mandatory delegate by name.

use crate::adapter::traits::Service;
#[cfg(feature = "observable")]
use crate::adapter::traits::BoxObserver;
use crate::adapter::{
    DelegatingComparer, DelegatingDisposable, DelegatingEqualityComparer, DelegatingSequence,
    DelegatingServiceProvider,
};
#[cfg(feature = "observable")]
use crate::adapter::{DelegatingObservable, DelegatingObserver};
#[cfg(feature = "progress")]
use crate::adapter::DelegatingProgress;
use std::any::TypeId;
use std::cmp::Ordering;

/// A disposer that runs `delegate` on first disposal (or on drop, if never
/// disposed), and never again.
pub fn disposable<F: FnOnce()>(delegate: F) -> DelegatingDisposable<F> {
    DelegatingDisposable::new(delegate)
}

/// A comparator that answers [`compare`](crate::Compare::compare) with
/// whatever `delegate` returns.
pub fn comparer<T: ?Sized, F>(delegate: F) -> DelegatingComparer<F>
where
    F: Fn(&T, &T) -> Ordering,
{
    DelegatingComparer::new(delegate)
}

/// An equality comparator that answers equality with `equals` and hashing
/// with `hash`. The pair's mutual consistency is the caller's obligation.
pub fn equality_comparer<T: ?Sized, E, H>(equals: E, hash: H) -> DelegatingEqualityComparer<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    DelegatingEqualityComparer::new(equals, hash)
}

/// A service locator that forwards each requested `TypeId` to `delegate`
/// and returns its answer unmodified.
pub fn service_provider<F>(delegate: F) -> DelegatingServiceProvider<F>
where
    F: Fn(TypeId) -> Option<Service>,
{
    DelegatingServiceProvider::new(delegate)
}

/// A sequence that produces a fresh iteration cursor per call by invoking
/// `delegate` verbatim.
pub fn sequence<F, I>(delegate: F) -> DelegatingSequence<F>
where
    F: Fn() -> I,
    I: Iterator,
{
    DelegatingSequence::new(delegate)
}

/// An observable whose subscription logic is `delegate`: each subscriber is
/// handed to it, and its return value is the subscription handle.
#[cfg(feature = "observable")]
pub fn observable<T, E, D, F>(delegate: F) -> DelegatingObservable<F>
where
    F: Fn(BoxObserver<T, E>) -> D,
{
    DelegatingObservable::new(delegate)
}

/// An observer that forwards values to `on_next` and silently ignores
/// errors and completion. Use [`ObserverBuilder`](crate::ObserverBuilder)
/// to attach those delegates.
#[cfg(feature = "observable")]
pub fn observer<T, E, N>(on_next: N) -> DelegatingObserver<T, E>
where
    N: FnMut(T) + 'static,
{
    DelegatingObserver::new(on_next)
}

/// A progress reporter that forwards every reported value to `delegate`.
#[cfg(feature = "progress")]
pub fn progress<T, F>(delegate: F) -> DelegatingProgress<F>
where
    F: Fn(T),
{
    DelegatingProgress::new(delegate)
}
