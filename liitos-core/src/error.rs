//! Error types for the core structures.
//!
//! Failures in the composition infrastructure itself are deliberately
//! rare: registries have exactly one recoverable error (a stale id), hook
//! callbacks fail by panicking (programming error, not caught), and
//! over-popping an overlay stack is a clamped no-op rather than an error.

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors from [`Registry`](crate::Registry) operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The id does not belong to this registry.
    #[error("no registered item at index {0}")]
    UnknownId(usize),
}
