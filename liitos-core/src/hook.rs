//! # Hook Dispatcher
//!
//! A hook is a named extension point: owning code creates one, any number
//! of plugins subscribe callbacks to it, and the owner invokes all of
//! them at a well-defined lifecycle point, collecting every result.
//!
//! Callbacks receive a mutable borrow of the event so each subscriber can
//! initialize its own slice of a freshly created entity without the
//! entity's constructor knowing about any of them — one plugin fills in a
//! category default, another attaches an empty member list.
//!
//! # Ordering
//!
//! Callbacks run ascending by `order`; ties run in subscription order
//! (the sort is stable). Unlike the registry there is no secondary sort
//! key.
//!
//! # Failure
//!
//! [`Hook::invoke`] never short-circuits: every callback runs and its
//! result is collected positionally. A panicking callback is a
//! programming error and propagates to the invoker uncaught.

type Callback<E, R> = Box<dyn Fn(&mut E) -> R + Send + Sync>;

struct Entry<E, R> {
    callback: Callback<E, R>,
    order: i32,
}

/// A multi-subscriber extension point typed by event `E` and per-callback
/// result `R`.
///
/// # Example
///
/// ```rust,ignore
/// let mut new_team: Hook<TeamInfo> = Hook::new();
/// new_team.subscribe(|team| team.category = default_category());
/// new_team.subscribe(|team| team.member_ids = Vec::new());
///
/// let mut info = TeamInfo::default();
/// new_team.invoke(&mut info);
/// ```
pub struct Hook<E, R = ()> {
    entries: Vec<Entry<E, R>>,
}

impl<E, R> Default for Hook<E, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, R> Hook<E, R> {
    /// Create a dispatcher with no subscribers.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Subscribe a callback at the default order of 0.
    pub fn subscribe(&mut self, callback: impl Fn(&mut E) -> R + Send + Sync + 'static) {
        self.subscribe_with_order(callback, 0);
    }

    /// Subscribe a callback at an explicit order.
    pub fn subscribe_with_order(
        &mut self,
        callback: impl Fn(&mut E) -> R + Send + Sync + 'static,
        order: i32,
    ) {
        self.entries.push(Entry {
            callback: Box::new(callback),
            order,
        });
        // stable: equal orders keep subscription order
        self.entries.sort_by_key(|entry| entry.order);
    }

    /// Call every subscriber in order with the same event, collecting
    /// each return value positionally.
    pub fn invoke(&self, event: &mut E) -> Vec<R> {
        self.entries
            .iter()
            .map(|entry| (entry.callback)(event))
            .collect()
    }

    /// Number of subscribed callbacks.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no callbacks are subscribed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invokes_in_ascending_order() {
        let mut hook: Hook<Vec<&'static str>> = Hook::new();
        hook.subscribe_with_order(|trace| trace.push("last"), 10);
        hook.subscribe_with_order(|trace| trace.push("first"), -10);
        hook.subscribe(|trace| trace.push("middle"));

        let mut trace = Vec::new();
        hook.invoke(&mut trace);
        assert_eq!(trace, ["first", "middle", "last"]);
    }

    #[test]
    fn ties_run_in_subscription_order() {
        let mut hook: Hook<(), u32> = Hook::new();
        hook.subscribe_with_order(|_| 1, 5);
        hook.subscribe_with_order(|_| 2, 5);
        hook.subscribe_with_order(|_| 0, -5);

        assert_eq!(hook.invoke(&mut ()), [0, 1, 2]);
    }

    #[test]
    fn results_collected_positionally_without_short_circuit() {
        let mut hook: Hook<u32, Option<u32>> = Hook::new();
        hook.subscribe(|n| Some(*n));
        hook.subscribe(|_| None);
        hook.subscribe(|n| Some(*n + 1));

        assert_eq!(hook.invoke(&mut 7), [Some(7), None, Some(8)]);
    }

    #[test]
    fn every_callback_runs_exactly_once() {
        let mut hook: Hook<u32> = Hook::new();
        for _ in 0..5 {
            hook.subscribe(|count| *count += 1);
        }

        assert_eq!(hook.len(), 5);
        let mut count = 0;
        hook.invoke(&mut count);
        assert_eq!(count, 5);
    }

    #[test]
    fn subscribers_initialize_their_own_slice() {
        #[derive(Default)]
        struct TeamInfo {
            category: Option<&'static str>,
            member_ids: Option<Vec<u32>>,
        }

        let mut new_team: Hook<TeamInfo> = Hook::new();
        new_team.subscribe(|team| team.category = Some("open"));
        new_team.subscribe(|team| team.member_ids = Some(Vec::new()));

        let mut info = TeamInfo::default();
        new_team.invoke(&mut info);
        assert_eq!(info.category, Some("open"));
        assert_eq!(info.member_ids, Some(Vec::new()));
    }

    #[test]
    fn empty_hook_yields_no_results() {
        let hook: Hook<(), u32> = Hook::new();
        assert!(hook.invoke(&mut ()).is_empty());
        assert!(hook.is_empty());
    }
}
