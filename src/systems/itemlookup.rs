//! Read-only access to item entities.
//!
//! [`ItemLookup`] bundles the queries the navigation systems and observers
//! need to inspect items: existence, [`FocusableItem`] data and
//! [`ScreenRect`] geometry. It also provides [`rebuild_context`], the single
//! place that decides which registered entities are eligible items.

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemParam;

use crate::components::focuscontext::FocusContext;
use crate::components::focusable::{FocusableItem, ItemAction};
use crate::components::screenrect::ScreenRect;

#[derive(SystemParam)]
pub struct ItemLookup<'w, 's> {
    entities: Query<'w, 's, Entity>,
    items: Query<'w, 's, &'static FocusableItem>,
    rects: Query<'w, 's, &'static ScreenRect>,
}

impl ItemLookup<'_, '_> {
    pub fn exists(&self, entity: Entity) -> bool {
        self.entities.contains(entity)
    }

    pub fn item(&self, entity: Entity) -> Option<&FocusableItem> {
        self.items.get(entity).ok()
    }

    pub fn rect(&self, entity: Entity) -> Option<ScreenRect> {
        self.rects.get(entity).ok().copied()
    }

    /// Confirm action of an existing entity; items without a
    /// [`FocusableItem`] are generic widgets.
    pub fn action(&self, entity: Entity) -> Option<ItemAction> {
        if !self.exists(entity) {
            return None;
        }
        Some(self.item(entity).map(|item| item.action).unwrap_or_default())
    }

    /// Whether `entity` may be part of a context's live item list.
    pub fn is_eligible(&self, entity: Entity, require_item_component: bool) -> bool {
        if !self.exists(entity) {
            return false;
        }
        match self.item(entity) {
            Some(item) => !item.ignore,
            None => !require_item_component,
        }
    }
}

/// Rebuild `context`'s live item list. `force` rescans the registration list
/// even when auto-detect is off. Returns whether the list changed.
pub fn rebuild_context(context: &mut FocusContext, lookup: &ItemLookup, force: bool) -> bool {
    let require = context.require_item_component;
    let eligible = |entity: Entity| lookup.is_eligible(entity, require);
    if force {
        context.rescan_items(eligible)
    } else {
        context.rebuild_items(eligible)
    }
}
