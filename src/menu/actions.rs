//! Caller behaviour attached to menu items.
//!
//! The engine never invokes an action while navigating; actions run only
//! after a confirmed selection, once the terminal has been restored.

use std::collections::HashMap;
use std::fmt;

use super::item::ItemId;

/// Something that can run when its item is confirmed.
pub trait Actionable<O> {
    fn invoke(&self) -> anyhow::Result<O>;
}

impl<O, F> Actionable<O> for F
where
    F: Fn() -> anyhow::Result<O>,
{
    fn invoke(&self) -> anyhow::Result<O> {
        self()
    }
}

/// Actions keyed by item id.
pub struct ActionRegistry<O> {
    actions: HashMap<ItemId, Box<dyn Actionable<O>>>,
}

impl<O> Default for ActionRegistry<O> {
    fn default() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }
}

impl<O> ActionRegistry<O> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a closure, replacing any previous action for the same id
    pub fn register<F>(&mut self, id: impl Into<ItemId>, action: F)
    where
        F: Fn() -> anyhow::Result<O> + 'static,
    {
        self.register_action(id, action);
    }

    pub fn register_action(&mut self, id: impl Into<ItemId>, action: impl Actionable<O> + 'static) {
        self.actions.insert(id.into(), Box::new(action));
    }

    /// Builder form of `register`
    pub fn with<F>(mut self, id: impl Into<ItemId>, action: F) -> Self
    where
        F: Fn() -> anyhow::Result<O> + 'static,
    {
        self.register(id, action);
        self
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.actions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run the action for `id`. `None` when nothing is registered.
    pub fn invoke(&self, id: &ItemId) -> Option<anyhow::Result<O>> {
        self.actions.get(id).map(|action| action.invoke())
    }
}

impl<O> fmt::Debug for ActionRegistry<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<_> = self.actions.keys().collect();
        ids.sort();
        f.debug_struct("ActionRegistry").field("ids", &ids).finish()
    }
}
