//! One-shot disposal backed by a closure

use super::traits::Dispose;
use tracing::trace;

/// Runs the captured closure the first time it is disposed, and never again.
///
/// The delegate also runs on drop if [`dispose`](Dispose::dispose) was never
/// called, so the adapter doubles as a scope guard. A delegate that panics
/// still counts as fired; disposal is not retried.
///
/// At-most-once execution is enforced by the exclusive borrow `dispose`
/// takes, not by any synchronization primitive. To share one instance
/// across threads, wrap it in a `Mutex`.
pub struct DelegatingDisposable<F: FnOnce()> {
    delegate: Option<F>,
}

impl<F: FnOnce()> DelegatingDisposable<F> {
    pub(crate) fn new(delegate: F) -> Self {
        Self {
            delegate: Some(delegate),
        }
    }

    /// True once the delegate has run (or panicked while running).
    pub fn is_disposed(&self) -> bool {
        self.delegate.is_none()
    }
}

impl<F: FnOnce()> Dispose for DelegatingDisposable<F> {
    fn dispose(&mut self) {
        // Taking the delegate before invoking it marks the adapter disposed
        // even when the delegate panics.
        if let Some(delegate) = self.delegate.take() {
            trace!("running disposal delegate");
            delegate();
        }
    }
}

impl<F: FnOnce()> Drop for DelegatingDisposable<F> {
    fn drop(&mut self) {
        self.dispose();
    }
}
