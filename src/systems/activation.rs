//! Confirm/back dispatch.
//!
//! Turns the confirm and back inputs of the top context into concrete
//! effects. Confirming an item fires exactly one of:
//!
//! - [`ItemAction::SubContext`] – an [`ActivateContext`] request for the
//!   nested context,
//! - [`ItemAction::Callback`] – the registered one-shot system,
//! - [`ItemAction::GenericWidget`] – a [`WidgetActivated`] notification so the
//!   host can click/toggle its widget.
//!
//! Back follows the context's [`BackPolicy`].
//!
//! Effects are queued on [`Commands`]; stack changes therefore land at the
//! next command flush, after the navigation system has finished reading.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::focuscontext::{BackPolicy, FocusContext};
use crate::components::focusable::ItemAction;
use crate::events::navigation::{ActivateContext, DeactivateContext, WidgetActivated};

/// What a confirm or back input did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Nothing happened (no item, policy `None`, missing back trigger).
    Ignored,
    /// A context was pushed or removed; the stack changes at the next flush.
    StackChanged,
    /// A callback ran or a widget was notified.
    Fired,
}

/// Fire the action of `item`.
pub fn confirm_item(
    commands: &mut Commands,
    context: Option<Entity>,
    item: Entity,
    action: ItemAction,
) -> Dispatch {
    match action {
        ItemAction::SubContext(sub) => {
            debug!("confirm {:?}: activating sub-context {:?}", item, sub);
            commands.trigger(ActivateContext { context: sub });
            Dispatch::StackChanged
        }
        ItemAction::Callback(id) => {
            debug!("confirm {:?}: running callback {:?}", item, id);
            commands.run_system(id);
            Dispatch::Fired
        }
        ItemAction::GenericWidget => {
            debug!("confirm {:?}: generic widget activation", item);
            commands.trigger(WidgetActivated { context, item });
            Dispatch::Fired
        }
    }
}

/// Apply the back policy of `context`.
///
/// `action_of` looks up the action of the back-trigger item; it returns
/// `None` when the entity no longer exists.
pub fn back_context(
    commands: &mut Commands,
    context: Entity,
    focus: &FocusContext,
    action_of: impl Fn(Entity) -> Option<ItemAction>,
) -> Dispatch {
    match focus.back_policy {
        BackPolicy::None => Dispatch::Ignored,
        BackPolicy::DeactivateContext => {
            debug!("back on {:?}: deactivating", context);
            commands.trigger(DeactivateContext { context });
            Dispatch::StackChanged
        }
        BackPolicy::TriggerItem => {
            let Some(trigger) = focus.back_trigger else {
                debug!("back on {:?}: no back trigger item", context);
                return Dispatch::Ignored;
            };
            match action_of(trigger) {
                Some(action) => confirm_item(commands, Some(context), trigger, action),
                None => {
                    debug!("back on {:?}: back trigger {:?} is gone", context, trigger);
                    Dispatch::Ignored
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::focuscontext::NavigationMode;
    use bevy_ecs::world::CommandQueue;

    #[test]
    fn test_confirm_item_dispatch_kinds() {
        let mut world = World::new();
        let context = world.spawn_empty().id();
        let item = world.spawn_empty().id();
        let sub = world.spawn_empty().id();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        assert_eq!(
            confirm_item(&mut commands, Some(context), item, ItemAction::SubContext(sub)),
            Dispatch::StackChanged
        );
        assert_eq!(
            confirm_item(&mut commands, Some(context), item, ItemAction::GenericWidget),
            Dispatch::Fired
        );
    }

    #[test]
    fn test_back_context_policies() {
        let mut world = World::new();
        let context = world.spawn_empty().id();
        let trigger = world.spawn_empty().id();
        let mut queue = CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);

        let focus = FocusContext::new(NavigationMode::Vertical);
        assert_eq!(
            back_context(&mut commands, context, &focus, |_| None),
            Dispatch::Ignored
        );

        let focus = FocusContext::new(NavigationMode::Vertical)
            .with_back_policy(BackPolicy::DeactivateContext);
        assert_eq!(
            back_context(&mut commands, context, &focus, |_| None),
            Dispatch::StackChanged
        );

        let focus =
            FocusContext::new(NavigationMode::Vertical).with_back_policy(BackPolicy::TriggerItem);
        assert_eq!(
            back_context(&mut commands, context, &focus, |_| Some(ItemAction::GenericWidget)),
            Dispatch::Ignored
        );

        let focus = focus.with_back_trigger(trigger);
        assert_eq!(
            back_context(&mut commands, context, &focus, |_| None),
            Dispatch::Ignored
        );
        assert_eq!(
            back_context(&mut commands, context, &focus, |_| Some(ItemAction::GenericWidget)),
            Dispatch::Fired
        );
    }
}
