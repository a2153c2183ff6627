//! Selection and cursor feedback.
//!
//! [`focus_feedback_system`] compares each context's selection with the last
//! one it reported and emits the notifications the visual and widget
//! collaborators listen to:
//!
//! - [`ItemNavigatedOut`] for the previously selected item,
//! - [`ItemNavigatedIn`] for the newly selected item,
//! - [`SelectionChanged`] for cursor/highlight placement,
//! - [`CursorChanged`] when the cursor opacity or target changes.
//!
//! A context that becomes the top of the stack again re-emits its selection
//! even if it did not change, so the cursor moves back to it.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::focuscontext::FocusContext;
use crate::events::navigation::{CursorChanged, ItemNavigatedIn, ItemNavigatedOut, SelectionChanged};
use crate::resources::navconfig::NavigationConfig;
use crate::resources::navstack::NavigationStack;

/// Cursor opacity of `context`.
///
/// `depth` is the context's position on the stack (0 = top), `None` when it
/// is not stacked.
pub fn cursor_alpha(context: &FocusContext, depth: Option<usize>, inactive_alpha: f32) -> f32 {
    if context.is_empty() {
        return 0.0;
    }
    if context.cursor_always_visible {
        return 1.0;
    }
    match (context.is_active(), depth) {
        (true, Some(0)) => 1.0,
        (true, Some(_)) => inactive_alpha,
        _ => 0.0,
    }
}

pub fn focus_feedback_system(
    stack: Res<NavigationStack>,
    mut contexts: Query<(Entity, &mut FocusContext)>,
    config: Res<NavigationConfig>,
    mut commands: Commands,
) {
    for (context, mut ctx) in contexts.iter_mut() {
        let selection = ctx.selection();
        let notified = ctx.notified();
        let selection_changed = selection != notified;
        let highlight = ctx.highlight_requested();

        if selection_changed {
            if let Some((_, old)) = notified {
                commands.trigger(ItemNavigatedOut { item: old });
            }
            if let Some((_, new)) = selection {
                commands.trigger(ItemNavigatedIn { item: new });
            }
            commands.trigger(SelectionChanged {
                context,
                previous: notified.map(|(index, _)| index),
                index: selection.map(|(index, _)| index),
                item: selection.map(|(_, item)| item),
            });
            debug!("Context {:?} selection {:?} -> {:?}", context, notified, selection);
            ctx.set_notified(selection);
        } else if highlight {
            let index = selection.map(|(index, _)| index);
            commands.trigger(SelectionChanged {
                context,
                previous: index,
                index,
                item: selection.map(|(_, item)| item),
            });
        }
        if highlight {
            ctx.clear_highlight_request();
        }

        let alpha = cursor_alpha(&ctx, stack.depth_of(context), config.inactive_alpha);
        let alpha_changed = alpha != ctx.cursor_alpha();
        if alpha_changed {
            ctx.set_cursor_alpha(alpha);
        }
        // A hidden cursor does not follow the selection.
        if alpha_changed || (alpha > 0.0 && (selection_changed || highlight)) {
            commands.trigger(CursorChanged {
                context,
                cursor: ctx.cursor,
                alpha,
                target: selection.map(|(_, item)| item),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::focuscontext::NavigationMode;

    fn context_with_items(world: &mut World, n: usize) -> FocusContext {
        let items: Vec<Entity> = (0..n).map(|_| world.spawn_empty().id()).collect();
        FocusContext::new(NavigationMode::Vertical).with_items(items)
    }

    #[test]
    fn test_cursor_alpha_empty_context_is_hidden() {
        let mut ctx = FocusContext::new(NavigationMode::Vertical);
        ctx.cursor_always_visible = true;
        assert_eq!(cursor_alpha(&ctx, Some(0), 0.6), 0.0);
    }

    #[test]
    fn test_cursor_alpha_by_depth() {
        let mut world = World::new();
        let mut ctx = context_with_items(&mut world, 2);
        assert_eq!(cursor_alpha(&ctx, None, 0.6), 0.0);
        ctx.set_active(true);
        assert_eq!(cursor_alpha(&ctx, Some(0), 0.6), 1.0);
        assert_eq!(cursor_alpha(&ctx, Some(2), 0.6), 0.6);
    }

    #[test]
    fn test_cursor_alpha_always_visible() {
        let mut world = World::new();
        let mut ctx = context_with_items(&mut world, 1);
        ctx.cursor_always_visible = true;
        assert_eq!(cursor_alpha(&ctx, None, 0.6), 1.0);
    }
}
