//! # liitos — Pluggable UI Composition Engine
//!
//! `liitos` is the extension and composition layer of a plugin-based
//! client UI: the small set of generic structures that let
//! independently-loaded plugins register behavior into shared extension
//! points without knowing about each other, and that let transient UI
//! state be threaded through a view tree safely.
//!
//! The engine is renderer-agnostic: every structure is generic over a
//! caller-supplied component type and hands back exactly what was
//! registered, ordered and stacked per its contracts.
//!
//! ## The four core structures
//!
//! - [`Registry`] — pluggable items sorted ascending by
//!   `(order, title)`, insertion-stable on full ties
//! - [`Hook`] — multi-subscriber extension points invoked in priority
//!   order with positionally collected results
//! - [`OverlayHost`] — a LIFO stack of full-screen view requests with
//!   injected push/pop control handles and clamped bulk pop
//! - [`Errors`] — nested validation payloads addressed by dotted field
//!   path, with scalar/list coercions
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use liitos::prelude::*;
//!
//! let mut composer: Composer<MyComponent> = Composer::new();
//! composer.load(&[&TeamsPlugin, &MembersPlugin, &CategoryPlugin]);
//!
//! for entry in composer.menu.iter() {
//!     sidebar.push(render(&entry.payload));
//! }
//! ```

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use liitos_core::{
    // Errors
    BoxError,
    ErrorResponse,
    ErrorValue,
    Errors,
    // Hook
    Hook,
    // Registry
    Plug,
    PlugId,
    Plugger,
    Registry,
    RegistryError,
    errors_from_response,
};

pub use liitos_std::{
    // Composition root
    compose::{Composer, Plugin},
    // Message catalog
    messages::{Messages, Template},
    // Notifications
    notify::{Notifications, NotifyId},
    // Overlay stack
    overlay::{Layers, Overlay, OverlayHandles, OverlayHost, OverlayView},
    // Popup slot
    popup::PopupSlot,
    // Field schemas
    schema::{
        Entry, Field, FieldKind, Renderers, RowContent, Schema, SchemaError, SchemaRow, blob_slot,
    },
    // Submission lifecycle
    submit::Submit,
};

/// Testing utilities.
pub mod testing {
    pub use liitos_std::testing::{Recorder, StubComponent};
}

/// Common imports.
///
/// # Usage
///
/// ```rust,ignore
/// use liitos::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Composer, ErrorResponse, Errors, Hook, OverlayHost, OverlayView, Plug, Plugin, Registry,
        Submit, errors_from_response,
    };
}
