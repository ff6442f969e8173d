//! Delegating: closure-backed adapters for capability traits
//!
//! Trait-based APIs often demand a named implementation where the caller has
//! nothing but a closure. Each factory here takes the closure(s) and returns
//! an adapter that implements the matching capability trait by forwarding
//! every call verbatim. The adapters add no semantics of their own.
//!
//! # Adapters
//!
//! - [`disposable`]: one-shot release, idempotent, also fires on drop
//! - [`comparer`]: ordering decisions via [`Compare`]
//! - [`equality_comparer`]: equality/hash pair via [`Equivalence`]
//! - [`service_provider`]: type-to-instance resolution via [`ProvideService`]
//! - [`sequence`]: lazily produced iteration cursors, iterable by reference
//! - [`observable`] / [`observer`]: push-based source and sink (feature `observable`)
//! - [`progress`]: progress value sink (feature `progress`)
//!
//! # Example
//!
//! ```
//! use delegating::{comparer, disposable, Compare};
//! use std::cmp::Ordering;
//!
//! let mut releases = 0;
//! {
//!     let _guard = disposable(|| releases += 1);
//! }
//! assert_eq!(releases, 1);
//!
//! let reversed = comparer(|a: &u32, b: &u32| b.cmp(a));
//! assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
//! ```

mod adapter;
mod api;
mod error;

pub use adapter::traits::{Compare, Dispose, Equivalence, ProvideService, Service};
#[cfg(feature = "observable")]
pub use adapter::traits::{BoxObserver, Observable, Observer};
#[cfg(feature = "progress")]
pub use adapter::traits::ReportProgress;

pub use adapter::{
    BoxEqualsFn, BoxHashFn, DelegatingComparer, DelegatingDisposable,
    DelegatingEqualityComparer, DelegatingSequence, DelegatingServiceProvider,
    EquivalenceBuilder,
};
#[cfg(feature = "observable")]
pub use adapter::{DelegatingObservable, DelegatingObserver, ObserverBuilder};
#[cfg(feature = "progress")]
pub use adapter::DelegatingProgress;

pub use api::{comparer, disposable, equality_comparer, sequence, service_provider};
#[cfg(feature = "observable")]
pub use api::{observable, observer};
#[cfg(feature = "progress")]
pub use api::progress;

pub use error::{DelegateError, DelegateResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
