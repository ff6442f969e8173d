//! Error types for adapter construction

use thiserror::Error;

/// Errors that can occur while assembling an adapter.
///
/// Forwarding itself never fails: once built, an adapter surfaces whatever
/// its delegates return (or panic with) untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DelegateError {
    /// A mandatory delegate was never supplied to a builder. Carries the
    /// parameter name so callers can tell which one is missing.
    #[error("missing required delegate: {0}")]
    MissingDelegate(&'static str),
}

/// Result type for adapter construction
pub type DelegateResult<T> = Result<T, DelegateError>;
