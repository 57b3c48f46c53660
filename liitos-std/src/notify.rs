//! # Notifications
//!
//! Transient banner notifications: pushed by anything that wants to
//! report an outcome, rendered in push order by a layer the composition
//! root registers, and dismissed either manually or by a fire-and-forget
//! timer.
//!
//! Dismissal is idempotent by id. Timed dismissal is not cancellable; a
//! notification dismissed manually before its timer fires simply no-ops
//! on expiry.

use crate::lock;
use std::sync::{Arc, Mutex};

#[cfg(feature = "timers")]
use std::time::Duration;

/// Identity of one pushed notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotifyId(u64);

struct Inner<C> {
    entries: Vec<(NotifyId, C)>,
    next_id: u64,
}

/// Ordered collection of active notifications.
///
/// Cloning yields another handle to the same collection, so push sites
/// and the rendering layer can share it.
pub struct Notifications<C> {
    inner: Arc<Mutex<Inner<C>>>,
}

impl<C> Clone for Notifications<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> Default for Notifications<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Notifications<C> {
    /// No active notifications.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                entries: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Append a notification; it renders after all currently active ones.
    pub fn push(&self, content: C) -> NotifyId {
        let mut inner = lock(&self.inner);
        let id = NotifyId(inner.next_id);
        inner.next_id += 1;
        inner.entries.push((id, content));
        #[cfg(feature = "tracing")]
        tracing::debug!(id = id.0, active = inner.entries.len(), "notification pushed");
        id
    }

    /// Remove a notification. Returns `false` when it was already gone;
    /// removing twice is harmless.
    pub fn dismiss(&self, id: NotifyId) -> bool {
        let mut inner = lock(&self.inner);
        let before = inner.entries.len();
        inner.entries.retain(|(entry_id, _)| *entry_id != id);
        inner.entries.len() != before
    }

    /// Number of active notifications.
    pub fn len(&self) -> usize {
        lock(&self.inner).entries.len()
    }

    /// Whether nothing is active.
    pub fn is_empty(&self) -> bool {
        lock(&self.inner).entries.is_empty()
    }

    /// Dismiss after `delay`. Fire-and-forget: spawn the returned future
    /// on the embedding executor and forget it; if the notification was
    /// dismissed manually in the meantime the expiry no-ops.
    #[cfg(feature = "timers")]
    pub fn dismiss_after(
        &self,
        id: NotifyId,
        delay: Duration,
    ) -> impl Future<Output = bool> + Send + 'static
    where
        C: Send + 'static,
    {
        let notifications = self.clone();
        async move {
            tokio::time::sleep(delay).await;
            notifications.dismiss(id)
        }
    }
}

impl<C: Clone> Notifications<C> {
    /// Active notifications in push order.
    pub fn snapshot(&self) -> Vec<(NotifyId, C)> {
        lock(&self.inner).entries.clone()
    }
}
