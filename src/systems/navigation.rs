//! Menu navigation tick.
//!
//! [`navigation_system`] runs once per tick and processes input for the top
//! context of the [`NavigationStack`] only:
//!
//! 1. prune despawned contexts from the stack, re-highlighting a context
//!    that becomes the top this way (and, with `auto_refresh`, rebuild
//!    auto-detect contexts);
//! 2. if the stack changed since the last tick, consume the flag and skip
//!    input for this tick;
//! 3. prune despawned items of the top context; an empty context ignores
//!    input;
//! 4. confirm, else back, else directional resolution.
//!
//! Directional moves from the mode rule start a cooldown of the context's
//! `step_delay`, measured on unscaled time, so a held direction advances in
//! discrete steps. Whether override jumps start it is configured by
//! [`OverrideCooldown`](crate::resources::navconfig::OverrideCooldown).

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::focuscontext::FocusContext;
use crate::resources::navconfig::NavigationConfig;
use crate::resources::navinput::NavInput;
use crate::resources::navstack::NavigationStack;
use crate::resources::worldtime::WorldTime;
use crate::systems::activation::{back_context, confirm_item};
use crate::systems::itemlookup::{ItemLookup, rebuild_context};
use crate::systems::resolve::{Resolution, resolve_direction};

/// Shared directional cooldown.
#[derive(Debug, Default)]
pub struct StepCooldown {
    /// Unscaled time before which directional input is ignored.
    pub next_step_at: f32,
}

pub fn navigation_system(
    mut stack: ResMut<NavigationStack>,
    mut contexts: Query<&mut FocusContext>,
    lookup: ItemLookup,
    input: Res<NavInput>,
    time: Res<WorldTime>,
    config: Res<NavigationConfig>,
    mut cooldown: Local<StepCooldown>,
    mut commands: Commands,
) {
    let top_before = stack.peek_top();
    let pruned = stack.prune(|context| contexts.contains(context));
    if pruned > 0 {
        debug!("Pruned {} despawned contexts from the stack", pruned);
        if let Some(top) = stack.peek_top().filter(|&top| Some(top) != top_before) {
            if let Ok(mut ctx) = contexts.get_mut(top) {
                ctx.request_highlight();
            }
        }
    }

    if config.auto_refresh {
        for context in stack.iter() {
            if let Ok(mut ctx) = contexts.get_mut(context) {
                if ctx.auto_detect {
                    rebuild_context(&mut ctx, &lookup, false);
                }
            }
        }
    }

    let Some(top) = stack.peek_top() else {
        stack.take_changed();
        return;
    };
    if stack.take_changed() {
        debug!("Navigation stack changed, input skipped this tick");
        return;
    }

    let Ok(mut ctx) = contexts.get_mut(top) else {
        return;
    };
    ctx.retain_items(|item| lookup.exists(item));
    if ctx.is_empty() {
        return;
    }
    ctx.ensure_selection();

    if input.confirm_pressed() {
        if let Some(item) = ctx.current_item() {
            let action = lookup.action(item).unwrap_or_default();
            let dispatch = confirm_item(&mut commands, Some(top), item, action);
            debug!("Context {:?}: confirm {:?} -> {:?}", top, item, dispatch);
        }
        return;
    }
    if input.back_pressed() {
        let dispatch = back_context(&mut commands, top, &ctx, |entity| lookup.action(entity));
        debug!("Context {:?}: back -> {:?}", top, dispatch);
        return;
    }

    let direction = input.direction(config.axis_threshold);
    if direction.is_none() || time.real_elapsed < cooldown.next_step_at {
        return;
    }

    let current = ctx.current_index();
    let current_item = ctx.current_item().and_then(|item| lookup.item(item));
    let resolution = resolve_direction(
        ctx.mode,
        ctx.items(),
        current,
        direction,
        current_item,
        |item| lookup.rect(item),
    );

    let start_cooldown = match resolution {
        Resolution::Unchanged => return,
        Resolution::Moved { .. } => true,
        Resolution::Override { fallback, .. } => config.override_cooldown.applies(fallback),
    };
    if let Some(index) = resolution.index() {
        ctx.select(index);
    }
    if start_cooldown {
        cooldown.next_step_at = time.real_elapsed + ctx.step_delay;
    }
    if let Resolution::Moved { wrapped: true, .. } = resolution {
        debug!("Context {:?}: selection wrapped around", top);
    }
    debug!(
        "Context {:?}: {:?} -> {:?} ({:?})",
        top,
        current,
        ctx.current_index(),
        resolution
    );
}

/// Step delay of the top context, or the configured transition time when
/// the stack is empty.
pub fn current_step_delay(
    stack: &NavigationStack,
    context_of: impl Fn(Entity) -> Option<f32>,
    config: &NavigationConfig,
) -> f32 {
    stack
        .peek_top()
        .and_then(context_of)
        .unwrap_or(config.transition_time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_step_delay_uses_top_context() {
        let mut world = World::new();
        let lower = world.spawn_empty().id();
        let top = world.spawn_empty().id();
        let mut stack = NavigationStack::new();
        stack.push(lower);
        stack.push(top);
        let config = NavigationConfig::new();

        let delay = current_step_delay(
            &stack,
            |context| (context == top).then_some(0.5),
            &config,
        );
        assert_eq!(delay, 0.5);
    }

    #[test]
    fn test_current_step_delay_falls_back_to_transition_time() {
        let mut config = NavigationConfig::new();
        config.transition_time = 0.75;
        let delay = current_step_delay(&NavigationStack::new(), |_| Some(0.1), &config);
        assert_eq!(delay, 0.75);
    }
}
