//! Single-slot popup: one modal at a time, replaced on set, rendered by a
//! layer registered at composition time.

use crate::lock;
use std::sync::{Arc, Mutex};

/// Holds the currently active popup, if any.
pub struct PopupSlot<C> {
    current: Arc<Mutex<Option<C>>>,
}

impl<C> Clone for PopupSlot<C> {
    fn clone(&self) -> Self {
        Self {
            current: Arc::clone(&self.current),
        }
    }
}

impl<C> Default for PopupSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> PopupSlot<C> {
    /// An empty slot.
    pub fn new() -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Show a popup, replacing any active one.
    pub fn set(&self, component: C) {
        *lock(&self.current) = Some(component);
    }

    /// Clear the slot. Dismissing an empty slot is a no-op.
    pub fn dismiss(&self) {
        *lock(&self.current) = None;
    }

    /// Whether a popup is showing.
    pub fn is_open(&self) -> bool {
        lock(&self.current).is_some()
    }
}

impl<C: Clone> PopupSlot<C> {
    /// The active popup, if any.
    pub fn current(&self) -> Option<C> {
        lock(&self.current).clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubComponent;

    #[test]
    fn set_replaces_the_active_popup() {
        let slot = PopupSlot::new();
        slot.set(StubComponent("confirm-delete"));
        slot.set(StubComponent("confirm-overwrite"));

        assert_eq!(slot.current().map(|c| c.0), Some("confirm-overwrite"));
    }

    #[test]
    fn dismiss_clears_and_is_idempotent() {
        let slot = PopupSlot::new();
        slot.set(StubComponent("confirm-delete"));

        slot.dismiss();
        assert!(!slot.is_open());
        slot.dismiss();
        assert!(slot.current().is_none());
    }
}
