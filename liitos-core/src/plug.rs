//! # Ordered Registry (Plug)
//!
//! The registration mechanism that lets independently-loaded plugins
//! contribute items (menu entries, table columns, form sections) to a
//! shared collection without knowing about each other or about load
//! order.
//!
//! # Ordering Invariant
//!
//! After every insertion and every update, iteration order is sorted
//! ascending by `(order, title)`. The sort is stable, so items with a
//! fully equal `(order, title)` pair stay in registration order. Plugin
//! authors rely on this for deterministic visual layout; it is a
//! documented contract, not an implementation detail.
//!
//! # Ownership
//!
//! The registry owns its items. Registration returns a stable [`PlugId`]
//! instead of a mutable reference; later adjustments (e.g. flipping a
//! flag on a previously-registered form field) go through
//! [`Registry::update`], which re-sorts afterwards. There is no removal
//! and no lookup by key — consumers only iterate.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut columns: Registry<Column> = Registry::new();
//! let id = columns.register(Plug::new("Name", name_column).with_order(-100));
//! columns.register(Plug::new("Actions", action_column).with_order(100));
//!
//! for plug in columns.iter() {
//!     render_header(&plug.title);
//! }
//! ```

use crate::error::RegistryError;

/// Stable handle to a registered item.
///
/// Ids are arena indices: they are never invalidated by later
/// registrations and are only meaningful for the registry that issued
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlugId(usize);

/// A pluggable item: a display title, a sort priority and a
/// caller-supplied payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plug<T> {
    /// Display title, also the secondary sort key.
    pub title: String,
    /// Sort priority, ascending. Defaults to 0.
    pub order: i32,
    /// Whatever the consumer wants to attach (a component, a renderer, …).
    pub payload: T,
}

impl<T> Plug<T> {
    /// Create an item with the default order of 0.
    pub fn new(title: impl Into<String>, payload: T) -> Self {
        Self {
            title: title.into(),
            order: 0,
            payload,
        }
    }

    /// Set the sort priority.
    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

/// An append-only collection of pluggable items, always iterated in
/// `(order, title)` order.
#[derive(Debug)]
pub struct Registry<T> {
    arena: Vec<Plug<T>>,
    index: Vec<PlugId>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            arena: Vec::new(),
            index: Vec::new(),
        }
    }

    /// Register an item and return its stable id.
    pub fn register(&mut self, item: Plug<T>) -> PlugId {
        let id = PlugId(self.arena.len());
        self.arena.push(item);
        self.index.push(id);
        self.resort();
        id
    }

    /// Read a registered item by id.
    pub fn get(&self, id: PlugId) -> Option<&Plug<T>> {
        self.arena.get(id.0)
    }

    /// Patch a registered item in place, then restore the ordering
    /// invariant (a patch may change `order` or `title`).
    pub fn update(
        &mut self,
        id: PlugId,
        patch: impl FnOnce(&mut Plug<T>),
    ) -> Result<(), RegistryError> {
        let item = self
            .arena
            .get_mut(id.0)
            .ok_or(RegistryError::UnknownId(id.0))?;
        patch(item);
        self.resort();
        Ok(())
    }

    /// Iterate items in `(order, title)` order.
    pub fn iter(&self) -> impl Iterator<Item = &Plug<T>> {
        self.index.iter().map(|id| &self.arena[id.0])
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// The registration factory handed to plugin authors: the sole write
    /// path into this registry during the load phase.
    pub fn plugger(&mut self) -> Plugger<'_, T> {
        Plugger { registry: self }
    }

    fn resort(&mut self) {
        let arena = &self.arena;
        // sort_by is stable: equal (order, title) pairs keep registration order
        self.index.sort_by(|a, b| {
            let (a, b) = (&arena[a.0], &arena[b.0]);
            a.order.cmp(&b.order).then_with(|| a.title.cmp(&b.title))
        });
    }
}

/// Registration-only view of a [`Registry`], bound to it for the
/// duration of a plugin's load phase.
pub struct Plugger<'a, T> {
    registry: &'a mut Registry<T>,
}

impl<T> Plugger<'_, T> {
    /// Register an item, as [`Registry::register`].
    pub fn plug(&mut self, item: Plug<T>) -> PlugId {
        self.registry.register(item)
    }
}
