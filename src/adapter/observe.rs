//! Observable sources and observers backed by closures

use super::traits::{BoxObserver, Observable, Observer};
use crate::error::{DelegateError, DelegateResult};
use tracing::trace;

/// A source whose entire subscription logic is the captured closure.
///
/// `subscribe` hands the observer to the closure and returns whatever the
/// closure returns, usually a [`Dispose`](super::traits::Dispose) value
/// that tears the subscription down. Exactly one subscription attempt per
/// call; no multicast, no replay.
pub struct DelegatingObservable<F> {
    delegate: F,
}

impl<F> DelegatingObservable<F> {
    pub(crate) fn new(delegate: F) -> Self {
        Self { delegate }
    }
}

impl<T, E, D, F> Observable<T, E> for DelegatingObservable<F>
where
    F: Fn(BoxObserver<T, E>) -> D,
{
    type Unsubscribe = D;

    fn subscribe(&self, observer: BoxObserver<T, E>) -> D {
        trace!("delegating subscription");
        (self.delegate)(observer)
    }
}

/// Forwards `on_next` to the mandatory closure; the error and completion
/// closures are optional and default to doing nothing.
///
/// The adapter imposes no call ordering; it is a pure forwarding shim, and
/// sequencing discipline (`next* (error | completed)?`) stays with the
/// producer.
pub struct DelegatingObserver<T, E> {
    on_next: Box<dyn FnMut(T)>,
    on_error: Option<Box<dyn FnMut(E)>>,
    on_completed: Option<Box<dyn FnMut()>>,
}

impl<T, E> DelegatingObserver<T, E> {
    pub(crate) fn new(on_next: impl FnMut(T) + 'static) -> Self {
        Self {
            on_next: Box::new(on_next),
            on_error: None,
            on_completed: None,
        }
    }
}

impl<T, E> Observer<T, E> for DelegatingObserver<T, E> {
    fn on_next(&mut self, value: T) {
        (self.on_next)(value);
    }

    fn on_error(&mut self, error: E) {
        if let Some(on_error) = self.on_error.as_mut() {
            on_error(error);
        }
    }

    fn on_completed(&mut self) {
        if let Some(on_completed) = self.on_completed.as_mut() {
            on_completed();
        }
    }
}

/// Assembles a [`DelegatingObserver`] from delegates supplied at runtime.
///
/// `on_next` is the one mandatory piece; [`build`](Self::build) reports it
/// by name when it was never supplied. The other two delegates may be
/// omitted freely.
pub struct ObserverBuilder<T, E> {
    on_next: Option<Box<dyn FnMut(T)>>,
    on_error: Option<Box<dyn FnMut(E)>>,
    on_completed: Option<Box<dyn FnMut()>>,
}

impl<T, E> ObserverBuilder<T, E> {
    pub fn new() -> Self {
        Self {
            on_next: None,
            on_error: None,
            on_completed: None,
        }
    }

    /// Supply the value delegate.
    pub fn on_next(mut self, delegate: impl FnMut(T) + 'static) -> Self {
        self.on_next = Some(Box::new(delegate));
        self
    }

    /// Supply the error delegate.
    pub fn on_error(mut self, delegate: impl FnMut(E) + 'static) -> Self {
        self.on_error = Some(Box::new(delegate));
        self
    }

    /// Supply the completion delegate.
    pub fn on_completed(mut self, delegate: impl FnMut() + 'static) -> Self {
        self.on_completed = Some(Box::new(delegate));
        self
    }

    /// Build the observer, failing by name if `on_next` was never supplied.
    pub fn build(self) -> DelegateResult<DelegatingObserver<T, E>> {
        let on_next = self
            .on_next
            .ok_or(DelegateError::MissingDelegate("on_next"))?;
        Ok(DelegatingObserver {
            on_next,
            on_error: self.on_error,
            on_completed: self.on_completed,
        })
    }
}

impl<T, E> Default for ObserverBuilder<T, E> {
    fn default() -> Self {
        Self::new()
    }
}
