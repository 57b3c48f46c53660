//! Testing utilities.
//!
//! - [`StubComponent`]: a named stand-in for the caller-supplied
//!   component type, for asserting what the engine hands back.
//! - [`Recorder`]: records every event a hook callback sees, for
//!   verifying dispatch order and counts.

use std::sync::{Arc, Mutex};

/// A named placeholder component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubComponent(pub &'static str);

/// Records the events passed through a hook callback.
///
/// # Example
///
/// ```rust,ignore
/// let recorder = Recorder::new();
/// hook.subscribe(recorder.callback(()));
/// hook.invoke(&mut event);
/// assert_eq!(recorder.count(), 1);
/// ```
pub struct Recorder<E> {
    events: Arc<Mutex<Vec<E>>>,
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Recorder<E> {
    fn clone(&self) -> Self {
        Self {
            events: Arc::clone(&self.events),
        }
    }
}

impl<E> Recorder<E> {
    /// A recorder with nothing recorded.
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of recorded events.
    pub fn count(&self) -> usize {
        crate::lock(&self.events).len()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        crate::lock(&self.events).clear();
    }
}

impl<E: Clone> Recorder<E> {
    /// The recorded events, in dispatch order.
    pub fn events(&self) -> Vec<E> {
        crate::lock(&self.events).clone()
    }
}

impl<E: Clone + Send + 'static> Recorder<E> {
    /// A hook callback that records each event and returns `result`.
    pub fn callback<R>(&self, result: R) -> impl Fn(&mut E) -> R + Send + Sync + 'static
    where
        R: Clone + Send + Sync + 'static,
    {
        let events = Arc::clone(&self.events);
        move |event: &mut E| {
            crate::lock(&events).push(event.clone());
            result.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use liitos_core::Hook;

    #[test]
    fn recorder_sees_every_invocation() {
        let recorder = Recorder::new();
        let mut hook: Hook<u32, &'static str> = Hook::new();
        hook.subscribe(recorder.callback("seen"));

        assert_eq!(hook.invoke(&mut 1), ["seen"]);
        assert_eq!(hook.invoke(&mut 2), ["seen"]);
        assert_eq!(recorder.events(), [1, 2]);

        recorder.clear();
        assert_eq!(recorder.count(), 0);
    }
}
