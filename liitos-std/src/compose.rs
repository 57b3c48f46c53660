//! # Composition Root
//!
//! The shared extension points live on one explicit [`Composer`] owned by
//! the embedding application, not in module-level globals: the menu
//! registry, the full-screen render layers, the notification collection,
//! the popup slot and the message catalog. Plugins receive a mutable
//! borrow of it exactly once, during the load phase, and register
//! whatever they contribute.
//!
//! Several independent composers can coexist (one per UI instance, one
//! per test) with fully deterministic setup and teardown.

use crate::messages::Messages;
use crate::notify::Notifications;
use crate::overlay::Layers;
use crate::popup::PopupSlot;
use liitos_core::Registry;

/// An independently-loaded unit of UI content.
///
/// Plugins do not know about each other or about load order; everything
/// they contribute goes through the composer's registries, whose
/// `(order, title)` invariant makes the final layout deterministic
/// anyway.
pub trait Plugin<C> {
    /// Name for logging and diagnostics.
    fn name(&self) -> &str;

    /// Register this plugin's contributions. Called exactly once.
    fn setup(&self, composer: &mut Composer<C>);
}

/// The shared extension points of one UI instance.
pub struct Composer<C> {
    /// Sidebar/menu entries contributed by plugins.
    pub menu: Registry<C>,
    /// Full-screen render layers (popup host, notification host, …).
    pub layers: Layers<C>,
    /// Active transient notifications.
    pub notifications: Notifications<C>,
    /// The single popup slot.
    pub popup: PopupSlot<C>,
    /// Named user-visible strings.
    pub messages: Messages,
}

impl<C> Default for Composer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Composer<C> {
    /// A composer with every extension point empty.
    pub fn new() -> Self {
        Self {
            menu: Registry::new(),
            layers: Layers::new(),
            notifications: Notifications::new(),
            popup: PopupSlot::new(),
            messages: Messages::new(),
        }
    }

    /// Run every plugin's setup, in the given order. After the last one
    /// returns, the load phase is committed and the registries can be
    /// assumed stable.
    pub fn load(&mut self, plugins: &[&dyn Plugin<C>]) {
        for plugin in plugins {
            #[cfg(feature = "tracing")]
            tracing::info!(plugin = plugin.name(), "loading plugin");
            plugin.setup(self);
        }
    }
}
