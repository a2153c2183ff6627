//! Focusable item component.
//!
//! A [`FocusableItem`] marks an entity as something a
//! [`FocusContext`](super::focuscontext::FocusContext) can select. It carries
//! the item's explicit navigation overrides and the [`ItemAction`] fired when
//! the item is confirmed.
//!
//! Entities registered in a context without this component still navigate;
//! they behave like a [`ItemAction::GenericWidget`] with no overrides.

use bevy_ecs::prelude::{Component, Entity};
use bevy_ecs::system::SystemId;

use crate::events::input::NavDirection;

/// When an item's overrides are consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OverridePriority {
    /// Overrides win over mode resolution.
    #[default]
    Always,
    /// Overrides apply only when mode resolution found no candidate.
    Fallback,
}

/// Per-direction explicit navigation targets.
///
/// Targets are plain entity handles; they may point anywhere, including back
/// at the item itself. Resolution follows a single link per step, so cycles
/// are harmless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavOverrides {
    pub up: Option<Entity>,
    pub down: Option<Entity>,
    pub left: Option<Entity>,
    pub right: Option<Entity>,
}

impl NavOverrides {
    /// Target for the pressed direction.
    ///
    /// Diagonals check left, right, up, down in that order and return the
    /// first declared link.
    pub fn target(&self, direction: NavDirection) -> Option<Entity> {
        let horizontal = match direction.horizontal {
            -1 => self.left,
            1 => self.right,
            _ => None,
        };
        horizontal.or(match direction.vertical {
            1 => self.up,
            -1 => self.down,
            _ => None,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.up.is_none() && self.down.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// What confirming an item does. Resolved once when the item is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemAction {
    /// Activate a nested context.
    SubContext(Entity),
    /// Run a registered one-shot system.
    Callback(SystemId),
    /// Hand the activation to the host widget (click/toggle).
    #[default]
    GenericWidget,
}

#[derive(Component, Debug, Clone, Default)]
pub struct FocusableItem {
    pub overrides: NavOverrides,
    pub priority: OverridePriority,
    pub action: ItemAction,
    /// Skipped when the owning context rebuilds its item list.
    pub ignore: bool,
    /// Pointer hover emits navigated-in even if the context does not follow
    /// the pointer.
    pub notify_when_inactive: bool,
}

impl FocusableItem {
    pub fn new(action: ItemAction) -> Self {
        Self {
            action,
            ..Default::default()
        }
    }

    pub fn with_up(mut self, target: Entity) -> Self {
        self.overrides.up = Some(target);
        self
    }

    pub fn with_down(mut self, target: Entity) -> Self {
        self.overrides.down = Some(target);
        self
    }

    pub fn with_left(mut self, target: Entity) -> Self {
        self.overrides.left = Some(target);
        self
    }

    pub fn with_right(mut self, target: Entity) -> Self {
        self.overrides.right = Some(target);
        self
    }

    pub fn with_priority(mut self, priority: OverridePriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn ignored(mut self) -> Self {
        self.ignore = true;
        self
    }

    /// Override target for `direction`, if the item's priority is `priority`.
    pub fn override_for(
        &self,
        direction: NavDirection,
        priority: OverridePriority,
    ) -> Option<Entity> {
        if self.priority != priority {
            return None;
        }
        self.overrides.target(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;

    #[test]
    fn test_target_single_directions() {
        let mut world = World::new();
        let (u, d, l, r) = (
            world.spawn_empty().id(),
            world.spawn_empty().id(),
            world.spawn_empty().id(),
            world.spawn_empty().id(),
        );
        let o = NavOverrides {
            up: Some(u),
            down: Some(d),
            left: Some(l),
            right: Some(r),
        };
        assert_eq!(o.target(NavDirection::UP), Some(u));
        assert_eq!(o.target(NavDirection::DOWN), Some(d));
        assert_eq!(o.target(NavDirection::LEFT), Some(l));
        assert_eq!(o.target(NavDirection::RIGHT), Some(r));
        assert_eq!(o.target(NavDirection::NONE), None);
    }

    #[test]
    fn test_target_diagonal_prefers_horizontal() {
        let mut world = World::new();
        let (u, l) = (world.spawn_empty().id(), world.spawn_empty().id());
        let both = NavOverrides {
            up: Some(u),
            left: Some(l),
            ..Default::default()
        };
        assert_eq!(both.target(NavDirection::new(-1, 1)), Some(l));

        let only_up = NavOverrides {
            up: Some(u),
            ..Default::default()
        };
        // right has no link, so the vertical component is used
        assert_eq!(only_up.target(NavDirection::new(1, 1)), Some(u));
    }

    #[test]
    fn test_override_for_respects_priority() {
        let mut world = World::new();
        let c = world.spawn_empty().id();
        let item = FocusableItem::default()
            .with_left(c)
            .with_priority(OverridePriority::Fallback);
        assert_eq!(
            item.override_for(NavDirection::LEFT, OverridePriority::Always),
            None
        );
        assert_eq!(
            item.override_for(NavDirection::LEFT, OverridePriority::Fallback),
            Some(c)
        );
    }

    #[test]
    fn test_default_action_is_generic_widget() {
        let item = FocusableItem::default();
        assert_eq!(item.action, ItemAction::GenericWidget);
        assert!(item.overrides.is_empty());
        assert!(!item.ignore);
    }
}
