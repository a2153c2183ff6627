//! Navigation stack observers.
//!
//! These observers apply the stack requests from
//! [`crate::events::navigation`] to the
//! [`NavigationStack`] resource and to the affected [`FocusContext`]s:
//!
//! - [`activate_context_observer`] – rebuild, mark active, push/promote
//! - [`deactivate_context_observer`] – mark inactive, remove
//! - [`pop_context_observer`] – remove whatever is on top
//! - [`remove_tagged_contexts_observer`] / [`clear_contexts_observer`]
//! - [`refresh_contexts_observer`] – rebuild stacked contexts
//! - [`pointer_entered_observer`] – pointer hover selection
//!
//! Whenever the top of the stack changes, the new top is asked to re-announce
//! its selection so the cursor lands on it again.
//!
//! [`context_spawn_system`] handles contexts spawned with
//! `activate_on_spawn`.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::focuscontext::FocusContext;
use crate::events::navigation::{
    ActivateContext, ClearContexts, ContextActivated, ContextDeactivated, DeactivateContext,
    ItemNavigatedIn, PointerEntered, PopContext, RefreshContexts, RemoveTaggedContexts,
};
use crate::resources::navstack::NavigationStack;
use crate::systems::itemlookup::{ItemLookup, rebuild_context};

/// Ask the current top context to re-announce its selection.
fn refresh_top(stack: &NavigationStack, contexts: &mut Query<&mut FocusContext>) {
    if let Some(top) = stack.peek_top() {
        if let Ok(mut ctx) = contexts.get_mut(top) {
            ctx.request_highlight();
        }
    }
}

/// Mark removed contexts inactive and notify.
fn deactivate_removed(
    removed: &[Entity],
    contexts: &mut Query<&mut FocusContext>,
    commands: &mut Commands,
) {
    for &context in removed {
        if let Ok(mut ctx) = contexts.get_mut(context) {
            ctx.set_active(false);
        }
        info!("Context {:?} deactivated", context);
        commands.trigger(ContextDeactivated { context });
    }
}

pub fn activate_context_observer(
    trigger: On<ActivateContext>,
    mut stack: ResMut<NavigationStack>,
    mut contexts: Query<&mut FocusContext>,
    lookup: ItemLookup,
    mut commands: Commands,
) {
    let context = trigger.event().context;
    let Ok(mut ctx) = contexts.get_mut(context) else {
        warn!("ActivateContext: {:?} has no FocusContext, ignoring", context);
        return;
    };
    if ctx.auto_detect {
        rebuild_context(&mut ctx, &lookup, false);
    }
    ctx.set_active(true);
    ctx.ensure_selection();
    ctx.request_highlight();
    stack.push(context);
    info!(
        "Context {:?} activated ({} items, stack depth {})",
        context,
        ctx.len(),
        stack.len()
    );
    commands.trigger(ContextActivated { context });
}

pub fn deactivate_context_observer(
    trigger: On<DeactivateContext>,
    mut stack: ResMut<NavigationStack>,
    mut contexts: Query<&mut FocusContext>,
    mut commands: Commands,
) {
    let context = trigger.event().context;
    if let Ok(mut ctx) = contexts.get_mut(context) {
        ctx.set_active(false);
    }
    let removed = stack.remove(context);
    refresh_top(&stack, &mut contexts);
    if removed {
        info!("Context {:?} deactivated", context);
        commands.trigger(ContextDeactivated { context });
    } else {
        debug!("DeactivateContext: {:?} was not on the stack", context);
    }
}

pub fn pop_context_observer(
    _trigger: On<PopContext>,
    mut stack: ResMut<NavigationStack>,
    mut contexts: Query<&mut FocusContext>,
    mut commands: Commands,
) {
    let Some(context) = stack.pop_top() else {
        debug!("PopContext: stack is empty");
        return;
    };
    deactivate_removed(&[context], &mut contexts, &mut commands);
    refresh_top(&stack, &mut contexts);
}

pub fn remove_tagged_contexts_observer(
    trigger: On<RemoveTaggedContexts>,
    mut stack: ResMut<NavigationStack>,
    mut contexts: Query<&mut FocusContext>,
    mut commands: Commands,
) {
    let tag = trigger.event().tag.as_str();
    let removed = stack.remove_by_tag(tag, |context| {
        contexts.get(context).ok().and_then(|ctx| ctx.tag.as_deref())
    });
    debug!("RemoveTaggedContexts '{}': {} removed", tag, removed.len());
    deactivate_removed(&removed, &mut contexts, &mut commands);
    refresh_top(&stack, &mut contexts);
}

pub fn clear_contexts_observer(
    _trigger: On<ClearContexts>,
    mut stack: ResMut<NavigationStack>,
    mut contexts: Query<&mut FocusContext>,
    mut commands: Commands,
) {
    let removed = stack.clear();
    deactivate_removed(&removed, &mut contexts, &mut commands);
}

pub fn refresh_contexts_observer(
    trigger: On<RefreshContexts>,
    stack: Res<NavigationStack>,
    mut contexts: Query<&mut FocusContext>,
    lookup: ItemLookup,
) {
    let force = trigger.event().force;
    for context in stack.iter() {
        let Ok(mut ctx) = contexts.get_mut(context) else {
            continue;
        };
        if force || ctx.auto_detect {
            if rebuild_context(&mut ctx, &lookup, force) {
                debug!("Context {:?} rebuilt: {} items", context, ctx.len());
            }
        }
    }
}

/// Pointer hover: selects the item in every context that follows the
/// pointer and contains it. Items with `notify_when_inactive` only get a
/// navigated-in notification.
pub fn pointer_entered_observer(
    trigger: On<PointerEntered>,
    mut contexts: Query<(Entity, &mut FocusContext)>,
    lookup: ItemLookup,
    mut commands: Commands,
) {
    let item = trigger.event().item;
    if lookup.item(item).is_some_and(|i| i.notify_when_inactive) {
        commands.trigger(ItemNavigatedIn { item });
        return;
    }
    for (context, mut ctx) in contexts.iter_mut() {
        if !ctx.follow_pointer || ctx.index_of(item).is_none() {
            continue;
        }
        if ctx.select_item(item) {
            debug!("Pointer selected {:?} in {:?}", item, context);
        }
    }
}

/// Prepares newly spawned contexts: builds their item list and activates
/// those flagged `activate_on_spawn`.
pub fn context_spawn_system(
    mut query: Query<(Entity, &mut FocusContext), Added<FocusContext>>,
    lookup: ItemLookup,
    mut commands: Commands,
) {
    for (context, mut ctx) in query.iter_mut() {
        if ctx.auto_detect {
            rebuild_context(&mut ctx, &lookup, false);
        }
        if ctx.activate_on_spawn {
            commands.trigger(ActivateContext { context });
        }
    }
}
