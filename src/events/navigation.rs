//! Navigation events.
//!
//! Two families of events live here:
//!
//! - **Requests** ([`ActivateContext`], [`DeactivateContext`], [`PopContext`],
//!   [`RemoveTaggedContexts`], [`ClearContexts`], [`RefreshContexts`],
//!   [`PointerEntered`]) are triggered by hosts or by the activation
//!   dispatcher and handled by the observers in
//!   [`crate::systems::contextstack`].
//! - **Notifications** ([`ContextActivated`], [`ContextDeactivated`],
//!   [`SelectionChanged`], [`ItemNavigatedIn`], [`ItemNavigatedOut`],
//!   [`WidgetActivated`], [`CursorChanged`]) are emitted for the visual and
//!   widget collaborators. The crate never renders anything itself.

use bevy_ecs::prelude::*;

/// Push a context onto the navigation stack (promoting it if present).
#[derive(Event, Debug, Clone, Copy)]
pub struct ActivateContext {
    pub context: Entity,
}

/// Remove a context from the navigation stack.
#[derive(Event, Debug, Clone, Copy)]
pub struct DeactivateContext {
    pub context: Entity,
}

/// Remove whatever context is on top.
#[derive(Event, Debug, Clone, Copy)]
pub struct PopContext;

/// Remove every context pushed with `tag`.
#[derive(Event, Debug, Clone)]
pub struct RemoveTaggedContexts {
    pub tag: String,
}

/// Empty the navigation stack.
#[derive(Event, Debug, Clone, Copy)]
pub struct ClearContexts;

/// Rebuild the item lists of stacked contexts. Without `force` only
/// contexts with `auto_detect` are rebuilt.
#[derive(Event, Debug, Clone, Copy)]
pub struct RefreshContexts {
    pub force: bool,
}

/// The pointer moved over an item.
#[derive(Event, Debug, Clone, Copy)]
pub struct PointerEntered {
    pub item: Entity,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ContextActivated {
    pub context: Entity,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ContextDeactivated {
    pub context: Entity,
}

/// The logical selection of a context, for cursor/highlight rendering.
///
/// Also re-emitted with `previous == index` when a context becomes the top of
/// the stack again and must refresh its highlight.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionChanged {
    pub context: Entity,
    pub previous: Option<usize>,
    pub index: Option<usize>,
    pub item: Option<Entity>,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ItemNavigatedIn {
    pub item: Entity,
}

#[derive(Event, Debug, Clone, Copy)]
pub struct ItemNavigatedOut {
    pub item: Entity,
}

/// A confirmed item with [`ItemAction::GenericWidget`](crate::components::focusable::ItemAction::GenericWidget);
/// the host performs the widget's own click/toggle behaviour.
#[derive(Event, Debug, Clone, Copy)]
pub struct WidgetActivated {
    pub context: Option<Entity>,
    pub item: Entity,
}

/// New cursor opacity and target for a context. `target` is `None` when the
/// cursor must be hidden because the context has no items.
#[derive(Event, Debug, Clone, Copy)]
pub struct CursorChanged {
    pub context: Entity,
    pub cursor: Option<Entity>,
    pub alpha: f32,
    pub target: Option<Entity>,
}
