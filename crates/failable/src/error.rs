//! Error types for failable operations.

use thiserror::Error;

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Crate error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to hydrate payload: {reason}")]
    HydrateFailed { reason: String },
}

impl Error {
    /// Create a hydrate error.
    pub fn hydrate_failed(reason: impl Into<String>) -> Self {
        Self::HydrateFailed {
            reason: reason.into(),
        }
    }
}

/// Diagnostic raised by the assertion helpers when an expectation is violated.
///
/// The `check_*` functions return this as a value; the `assert_*` functions
/// panic with its display form, which is what aborts the enclosing test.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{check} failed: {detail}")]
pub struct AssertionError {
    /// Name of the violated check, e.g. `assert_success`.
    pub check: &'static str,
    /// Description of what was observed instead of the expectation.
    pub detail: String,
}

impl AssertionError {
    pub(crate) fn new(check: &'static str, detail: impl Into<String>) -> Self {
        Self {
            check,
            detail: detail.into(),
        }
    }
}
