//! Navigation context stack.
//!
//! The [`NavigationStack`] resource is the ordered set of active focus
//! contexts, most recently activated first. Only the top context receives
//! input. The stack stores entity handles and never owns a context's
//! lifetime: despawned contexts are dropped lazily by [`NavigationStack::prune`]
//! before each tick reads the stack.
//!
//! Every mutation raises a one-tick "changed" flag. The navigation system
//! consumes it with [`NavigationStack::take_changed`] and skips that tick's
//! input, so the input that caused a transition is not applied again to the
//! new top context.
//!
//! The methods here are pure bookkeeping. Activation side effects (marking
//! contexts active, notifications, highlight refresh) live in the observers
//! of [`crate::systems::contextstack`].

use bevy_ecs::prelude::{Entity, Resource};

#[derive(Resource, Debug, Clone, Default)]
pub struct NavigationStack {
    entries: Vec<Entity>,
    changed: bool,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `context` on top. A context already on the stack is promoted
    /// instead of duplicated.
    pub fn push(&mut self, context: Entity) {
        self.entries.retain(|&entry| entry != context);
        self.entries.insert(0, context);
        self.changed = true;
    }

    /// Remove `context`. Returns whether it was on the stack.
    pub fn remove(&mut self, context: Entity) -> bool {
        let before = self.entries.len();
        self.entries.retain(|&entry| entry != context);
        self.changed = true;
        self.entries.len() != before
    }

    /// Remove and return the top context.
    pub fn pop_top(&mut self) -> Option<Entity> {
        if self.entries.is_empty() {
            return None;
        }
        self.changed = true;
        Some(self.entries.remove(0))
    }

    /// Remove every context whose current tag, as reported by `tag_of`, is
    /// `tag`. Returns the removed contexts, top first.
    pub fn remove_by_tag<'a>(
        &mut self,
        tag: &str,
        tag_of: impl Fn(Entity) -> Option<&'a str>,
    ) -> Vec<Entity> {
        let mut removed = Vec::new();
        self.entries.retain(|&context| {
            if tag_of(context) == Some(tag) {
                removed.push(context);
                false
            } else {
                true
            }
        });
        self.changed = true;
        removed
    }

    /// Empty the stack. Returns the removed contexts, top first.
    pub fn clear(&mut self) -> Vec<Entity> {
        self.changed = true;
        self.entries.drain(..).collect()
    }

    pub fn peek_top(&self) -> Option<Entity> {
        self.entries.first().copied()
    }

    pub fn contains(&self, context: Entity) -> bool {
        self.entries.contains(&context)
    }

    /// Position from the top (0 = top).
    pub fn depth_of(&self, context: Entity) -> Option<usize> {
        self.entries.iter().position(|&entry| entry == context)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Contexts from top to bottom.
    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.entries.iter().copied()
    }

    /// Drop contexts for which `alive` returns `false`. Returns how many were
    /// dropped. Pruning does not raise the changed flag.
    pub fn prune(&mut self, alive: impl Fn(Entity) -> bool) -> usize {
        let before = self.entries.len();
        self.entries.retain(|&context| alive(context));
        before - self.entries.len()
    }

    /// Whether the stack changed since the flag was last consumed.
    pub fn changed(&self) -> bool {
        self.changed
    }

    /// Read and reset the changed flag.
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }
}
