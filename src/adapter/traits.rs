//! Capability trait definitions
//!
//! Callers program against these traits; the adapter types in the sibling
//! modules implement them by forwarding to captured closures. Where the
//! standard library already names the capability (`IntoIterator` for cursor
//! production, `Drop` for scope-exit release), no trait is declared here.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::sync::Arc;

/// A resource that can be released explicitly, at most once.
pub trait Dispose {
    /// Release the resource. Calling this again after the first release is
    /// a no-op.
    fn dispose(&mut self);
}

impl<D: Dispose + ?Sized> Dispose for Box<D> {
    fn dispose(&mut self) {
        (**self).dispose();
    }
}

/// An ordering decision between two values.
pub trait Compare<T: ?Sized> {
    /// Order `a` relative to `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

/// Equality and hashing as an explicit pair of operations.
///
/// Implementors are expected to keep the two consistent: values that
/// compare equivalent should hash equally. Nothing in this crate verifies
/// that; it is the implementor's obligation.
pub trait Equivalence<T: ?Sized> {
    /// Whether `a` and `b` are considered equal.
    fn equivalent(&self, a: &T, b: &T) -> bool;

    /// Hash a single value.
    fn hash_one(&self, value: &T) -> u64;
}

/// A shared service instance, type-erased.
pub type Service = Arc<dyn Any + Send + Sync>;

/// Resolution of service instances by type.
pub trait ProvideService {
    /// Look up the instance registered for `ty`. `None` means the type has
    /// no registration.
    fn get_service(&self, ty: TypeId) -> Option<Service>;
}

/// A push-based consumer of a sequence of values.
///
/// A well-behaved producer delivers zero or more `on_next` calls followed by
/// at most one terminal `on_error` or `on_completed`. That discipline is the
/// producer's responsibility; implementors of this trait are not required to
/// enforce it.
#[cfg(feature = "observable")]
pub trait Observer<T, E> {
    /// Deliver the next value.
    fn on_next(&mut self, value: T);

    /// Deliver a terminal error.
    fn on_error(&mut self, error: E);

    /// Signal that no further values will arrive.
    fn on_completed(&mut self);
}

#[cfg(feature = "observable")]
impl<T, E, O: Observer<T, E> + ?Sized> Observer<T, E> for Box<O> {
    fn on_next(&mut self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&mut self, error: E) {
        (**self).on_error(error);
    }

    fn on_completed(&mut self) {
        (**self).on_completed();
    }
}

/// A boxed observer, as handed to subscription delegates.
#[cfg(feature = "observable")]
pub type BoxObserver<T, E> = Box<dyn Observer<T, E>>;

/// A push-based source of values that observers attach to.
#[cfg(feature = "observable")]
pub trait Observable<T, E> {
    /// Whatever a subscription hands back, typically a [`Dispose`] value
    /// that tears the subscription down.
    type Unsubscribe;

    /// Attach `observer` to this source.
    fn subscribe(&self, observer: BoxObserver<T, E>) -> Self::Unsubscribe;
}

/// A sink for progress updates.
#[cfg(feature = "progress")]
pub trait ReportProgress<T> {
    /// Report one progress value.
    fn report(&self, value: T);
}
