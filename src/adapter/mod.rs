//! Adapter types, one per capability trait
//!
//! Each adapter owns the closure(s) supplied at construction and forwards
//! every trait call to them verbatim. Construction goes through the factory
//! functions in the crate root or, where delegates accumulate at runtime,
//! through the builders exported here.

mod compare;
mod dispose;
mod equivalence;
#[cfg(feature = "observable")]
mod observe;
#[cfg(feature = "progress")]
mod progress;
mod provider;
mod sequence;

pub mod traits;

pub use compare::DelegatingComparer;
pub use dispose::DelegatingDisposable;
pub use equivalence::{BoxEqualsFn, BoxHashFn, DelegatingEqualityComparer, EquivalenceBuilder};
#[cfg(feature = "observable")]
pub use observe::{DelegatingObservable, DelegatingObserver, ObserverBuilder};
#[cfg(feature = "progress")]
pub use progress::DelegatingProgress;
pub use provider::DelegatingServiceProvider;
pub use sequence::DelegatingSequence;
