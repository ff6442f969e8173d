//! Service resolution delegated to a closure

use super::traits::{ProvideService, Service};
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::trace;

/// Resolves service lookups by forwarding the requested `TypeId` to the
/// captured closure.
///
/// A `None` from the closure means "not registered" and is returned as-is;
/// the adapter neither caches resolutions nor substitutes defaults.
pub struct DelegatingServiceProvider<F> {
    delegate: F,
}

impl<F> DelegatingServiceProvider<F>
where
    F: Fn(TypeId) -> Option<Service>,
{
    pub(crate) fn new(delegate: F) -> Self {
        Self { delegate }
    }

    /// Typed lookup: resolve `T` and downcast the shared instance.
    ///
    /// Returns `None` when the delegate has no registration for `T`, or
    /// when the instance it returned is not actually a `T`.
    pub fn get<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self.get_service(TypeId::of::<T>()) {
            Some(service) => service.downcast::<T>().ok(),
            None => {
                trace!(service = std::any::type_name::<T>(), "service not resolved");
                None
            }
        }
    }
}

impl<F> ProvideService for DelegatingServiceProvider<F>
where
    F: Fn(TypeId) -> Option<Service>,
{
    fn get_service(&self, ty: TypeId) -> Option<Service> {
        (self.delegate)(ty)
    }
}
