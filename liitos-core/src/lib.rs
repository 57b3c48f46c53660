//! # liitos-core
//!
//! Core data structures for the Liitos UI composition engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that contribute content without needing the full `liitos-std`
//! machinery. It contains the three structures everything else is built
//! from:
//!
//! - [`Registry`] — an ordered collection of pluggable items, kept sorted
//!   ascending by `(order, title)` so independently-loaded plugins land
//!   at stable, predictable positions.
//! - [`Hook`] — a named multi-subscriber extension point, invoked in
//!   priority order with results collected positionally.
//! - [`Errors`] — a nested validation-error payload addressable by dotted
//!   field path, built from a failed request via
//!   [`errors_from_response`].
//!
//! Everything here is plain in-memory bookkeeping: ordering, dispatch and
//! lookup over caller-supplied data. No I/O, no rendering, no routing.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod hook;
mod plug;
mod validation;

// Re-exports
pub use error::{BoxError, RegistryError};
pub use hook::Hook;
pub use plug::{Plug, PlugId, Plugger, Registry};
pub use validation::{ErrorResponse, ErrorValue, Errors, errors_from_response};
