//! Focus context component.
//!
//! A [`FocusContext`] is a group of focusable items with one current
//! selection, analogous to a menu panel. Contexts become interactive when
//! they are pushed onto the
//! [`NavigationStack`](crate::resources::navstack::NavigationStack); only the
//! top context receives input.
//!
//! # Item list
//!
//! Items are registered explicitly, in order, with
//! [`FocusContext::register_item`]. The live item list used for navigation is
//! derived from the registration list by [`FocusContext::rebuild_items`],
//! which drops widgets that must never be selectable (the cursor and the
//! highlight) and anything the caller reports as ineligible (despawned or
//! ignored items).
//!
//! The live list and the selection are private so that the invariants hold
//! after every mutation:
//! - the list never contains the same entity twice,
//! - the selection is `None` or a valid index into the list.

use bevy_ecs::prelude::{Component, Entity};

/// Default minimum time between accepted directional moves, in seconds.
pub const DEFAULT_STEP_DELAY: f32 = 0.2;

/// How directional input moves the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum NavigationMode {
    /// Left/right move through the list; up/down are ignored.
    Horizontal,
    /// Up/down move through the list; left/right are ignored.
    #[default]
    Vertical,
    /// All directions, resolved by on-screen adjacency.
    Grid,
}

/// What the back input does while the context is on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum BackPolicy {
    #[default]
    None,
    /// Remove the context from the stack.
    DeactivateContext,
    /// Confirm the designated back-trigger item.
    TriggerItem,
}

#[derive(Component, Debug, Clone)]
pub struct FocusContext {
    pub mode: NavigationMode,
    pub back_policy: BackPolicy,
    /// Cooldown after a directional move, in seconds.
    pub step_delay: f32,
    pub back_trigger: Option<Entity>,
    /// Rebuild the item list from the registration list on activation and
    /// on refresh.
    pub auto_detect: bool,
    /// Only registered entities carrying a
    /// [`FocusableItem`](super::focusable::FocusableItem) become items.
    pub require_item_component: bool,
    /// Push onto the stack as soon as the context is spawned.
    pub activate_on_spawn: bool,
    /// Pointer hover selects the hovered item.
    pub follow_pointer: bool,
    /// Selection applied on every activation.
    pub default_index: Option<usize>,
    /// Owner-assigned tag, read at removal time by
    /// [`NavigationStack::remove_by_tag`](crate::resources::navstack::NavigationStack::remove_by_tag).
    pub tag: Option<String>,
    pub cursor: Option<Entity>,
    pub cursor_always_visible: bool,
    pub highlight: Option<Entity>,
    registered: Vec<Entity>,
    items: Vec<Entity>,
    current: Option<usize>,
    /// Last selection reported to the visual collaborator.
    notified: Option<(usize, Entity)>,
    highlight_requested: bool,
    cursor_alpha: f32,
    active: bool,
}

impl Default for FocusContext {
    fn default() -> Self {
        Self::new(NavigationMode::default())
    }
}

impl FocusContext {
    pub fn new(mode: NavigationMode) -> Self {
        Self {
            mode,
            back_policy: BackPolicy::None,
            step_delay: DEFAULT_STEP_DELAY,
            back_trigger: None,
            auto_detect: true,
            require_item_component: false,
            activate_on_spawn: false,
            follow_pointer: true,
            default_index: None,
            tag: None,
            cursor: None,
            cursor_always_visible: false,
            highlight: None,
            registered: Vec::new(),
            items: Vec::new(),
            current: None,
            notified: None,
            highlight_requested: false,
            cursor_alpha: 0.0,
            active: false,
        }
    }

    pub fn with_back_policy(mut self, policy: BackPolicy) -> Self {
        self.back_policy = policy;
        self
    }

    pub fn with_back_trigger(mut self, item: Entity) -> Self {
        self.back_trigger = Some(item);
        self
    }

    pub fn with_step_delay(mut self, seconds: f32) -> Self {
        self.step_delay = seconds.max(0.0);
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_cursor(mut self, cursor: Entity) -> Self {
        self.cursor = Some(cursor);
        self
    }

    pub fn with_highlight(mut self, highlight: Entity) -> Self {
        self.highlight = Some(highlight);
        self
    }

    pub fn with_default_index(mut self, index: usize) -> Self {
        self.default_index = Some(index);
        self
    }

    pub fn activate_on_spawn(mut self) -> Self {
        self.activate_on_spawn = true;
        self
    }

    /// Register items in order and use them as the live list right away.
    pub fn with_items(mut self, items: impl IntoIterator<Item = Entity>) -> Self {
        for item in items {
            self.register_item(item);
        }
        self.items = self.registered.clone();
        self.clamp_selection();
        self
    }

    /// Append an item to the registration list. Returns `false` if it was
    /// already registered.
    pub fn register_item(&mut self, item: Entity) -> bool {
        if self.registered.contains(&item) {
            return false;
        }
        self.registered.push(item);
        true
    }

    /// Remove an item from both the registration list and the live list.
    pub fn unregister_item(&mut self, item: Entity) -> bool {
        let before = self.registered.len();
        self.registered.retain(|e| *e != item);
        let removed = self.registered.len() != before;
        self.retain_items(|e| e != item);
        removed
    }

    pub fn registered(&self) -> &[Entity] {
        &self.registered
    }

    /// Replace the live list directly, keeping first occurrences only.
    pub fn set_items(&mut self, items: impl IntoIterator<Item = Entity>) {
        self.items.clear();
        for item in items {
            if !self.items.contains(&item) {
                self.items.push(item);
            }
        }
        self.clamp_selection();
    }

    /// Rebuild the live item list.
    ///
    /// With `auto_detect` the list is recomputed from the registration list;
    /// otherwise the current list is only filtered. Cursor and highlight
    /// widgets and entities for which `eligible` returns `false` are
    /// dropped. Returns whether the list changed.
    pub fn rebuild_items(&mut self, eligible: impl Fn(Entity) -> bool) -> bool {
        self.rebuild_from(self.auto_detect, eligible)
    }

    /// Recompute the live list from the registration list regardless of
    /// `auto_detect`.
    pub fn rescan_items(&mut self, eligible: impl Fn(Entity) -> bool) -> bool {
        self.rebuild_from(true, eligible)
    }

    fn rebuild_from(&mut self, registered: bool, eligible: impl Fn(Entity) -> bool) -> bool {
        let source = if registered {
            &self.registered
        } else {
            &self.items
        };
        let mut rebuilt: Vec<Entity> = Vec::with_capacity(source.len());
        for &item in source {
            if Some(item) == self.cursor || Some(item) == self.highlight {
                continue;
            }
            if rebuilt.contains(&item) || !eligible(item) {
                continue;
            }
            rebuilt.push(item);
        }
        let changed = rebuilt != self.items;
        self.items = rebuilt;
        self.clamp_selection();
        changed
    }

    /// Drop items for which `keep` returns `false` and clamp the selection.
    pub fn retain_items(&mut self, keep: impl Fn(Entity) -> bool) {
        self.items.retain(|e| keep(*e));
        self.clamp_selection();
    }

    pub fn items(&self) -> &[Entity] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    pub fn current_item(&self) -> Option<Entity> {
        self.current.and_then(|i| self.items.get(i).copied())
    }

    pub fn index_of(&self, item: Entity) -> Option<usize> {
        self.items.iter().position(|e| *e == item)
    }

    /// Select by index. Out-of-range indices are rejected.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.current = Some(index);
        true
    }

    /// Select by entity. Returns `false` if the entity is not an item.
    pub fn select_item(&mut self, item: Entity) -> bool {
        match self.index_of(item) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn clear_selection(&mut self) {
        self.current = None;
    }

    /// Select the first item when nothing is selected and the list is not
    /// empty.
    pub fn ensure_selection(&mut self) {
        if self.current.is_none() && !self.items.is_empty() {
            self.current = Some(0);
        }
    }

    fn clamp_selection(&mut self) {
        self.current = match (self.current, self.items.len()) {
            (_, 0) => None,
            (Some(i), len) if i >= len => Some(len - 1),
            (current, _) => current,
        };
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Called by the stack observers; applies `default_index` on activation.
    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
        if active {
            if let Some(index) = self.default_index {
                self.current = Some(index);
                self.clamp_selection();
            }
        }
    }

    /// Ask the feedback system to re-announce the current selection.
    pub fn request_highlight(&mut self) {
        self.highlight_requested = true;
    }

    pub(crate) fn clear_highlight_request(&mut self) {
        self.highlight_requested = false;
    }

    /// Current selection as `(index, item)`.
    pub fn selection(&self) -> Option<(usize, Entity)> {
        self.current.zip(self.current_item())
    }

    pub(crate) fn notified(&self) -> Option<(usize, Entity)> {
        self.notified
    }

    pub(crate) fn set_notified(&mut self, selection: Option<(usize, Entity)>) {
        self.notified = selection;
    }

    pub(crate) fn highlight_requested(&self) -> bool {
        self.highlight_requested
    }

    /// Cursor opacity last reported by the feedback system.
    pub fn cursor_alpha(&self) -> f32 {
        self.cursor_alpha
    }

    pub(crate) fn set_cursor_alpha(&mut self, alpha: f32) {
        self.cursor_alpha = alpha;
    }
}
