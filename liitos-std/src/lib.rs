//! # liitos-std
//!
//! Standard composition machinery for the Liitos UI composition engine,
//! built on the `liitos-core` structures:
//!
//! - **Overlay stack**: [`OverlayHost`], [`OverlayHandles`], [`Layers`]
//! - **Notifications**: [`Notifications`] with idempotent and timed
//!   dismissal (feature `timers`)
//! - **Popup slot**: [`PopupSlot`]
//! - **Submission lifecycle**: [`Submit`] with loading flag, settled
//!   error tree and staleness guard
//! - **Message catalog**: [`Messages`]
//! - **Field schemas**: [`Schema`], [`Renderers`]
//! - **Composition root**: [`Composer`], [`Plugin`]
//! - **Testing utilities**: [`testing`]
//!
//! Everything is generic over the caller-supplied component type; this
//! crate never interprets view markup. With the `tracing` feature,
//! structural mutations emit debug events.
//!
//! [`OverlayHost`]: overlay::OverlayHost
//! [`OverlayHandles`]: overlay::OverlayHandles
//! [`Layers`]: overlay::Layers
//! [`Notifications`]: notify::Notifications
//! [`PopupSlot`]: popup::PopupSlot
//! [`Submit`]: submit::Submit
//! [`Messages`]: messages::Messages
//! [`Schema`]: schema::Schema
//! [`Renderers`]: schema::Renderers
//! [`Composer`]: compose::Composer
//! [`Plugin`]: compose::Plugin

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core structures
pub use liitos_core;

// Modules
pub mod compose;
pub mod messages;
pub mod notify;
pub mod overlay;
pub mod popup;
pub mod schema;
pub mod submit;
pub mod testing;

use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lock a shared handle, recovering from poisoning: everything runs on
/// one logical thread, so a poisoned lock only means a callback panicked
/// mid-mutation and the structure itself is still consistent.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
