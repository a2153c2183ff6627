//! Menu layout spawning system.
//!
//! The [`menulayout_spawn_system`] processes newly added [`MenuLayout`]
//! components, loads their JSON data, and spawns one entity per context and
//! one per item. Ids in the file are resolved to entities in a second pass,
//! so overrides and sub-context actions may refer to anything in the same
//! file regardless of declaration order.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "contexts": [
//!     {
//!       "id": "main",
//!       "mode": "vertical",
//!       "back": "trigger_item",
//!       "back_trigger": "quit",
//!       "activate": true,
//!       "items": [
//!         { "id": "play", "action": { "type": "callback", "name": "start" } },
//!         { "id": "options", "action": { "type": "submenu", "context": "opts" } },
//!         { "id": "quit", "overrides": { "down": "play" }, "fallback": true }
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! # Related
//!
//! - [`crate::components::menulayout::MenuLayout`] – the trigger component
//! - [`crate::components::menulayout::MenuLayoutData`] – the parsed JSON structure

use bevy_ecs::prelude::*;
use log::{error, info, warn};
use rustc_hash::FxHashMap;

use crate::components::focuscontext::FocusContext;
use crate::components::focusable::{FocusableItem, ItemAction, NavOverrides};
use crate::components::label::NavLabel;
use crate::components::menulayout::{ActionData, MenuLayout, MenuLayoutData, OverridesData};
use crate::components::screenrect::ScreenRect;
use crate::resources::callbackstore::CallbackStore;
use crate::resources::navconfig::NavigationConfig;

/// Entities spawned for a layout, by id.
#[derive(Debug, Default, Clone)]
pub struct SpawnedLayout {
    pub contexts: FxHashMap<String, Entity>,
    pub items: FxHashMap<String, Entity>,
}

/// System that processes MenuLayout components and spawns the menus they
/// describe.
pub fn menulayout_spawn_system(
    mut commands: Commands,
    mut query: Query<&mut MenuLayout, Added<MenuLayout>>,
    callbacks: Option<Res<CallbackStore>>,
    config: Res<NavigationConfig>,
) {
    for mut layout in query.iter_mut() {
        if layout.spawned {
            continue;
        }

        let data = match MenuLayoutData::load_from_file(&layout.path) {
            Ok(data) => data,
            Err(err) => {
                error!("Failed to load menu layout from {}: {}", layout.path, err);
                layout.spawned = true; // Prevent retrying
                continue;
            }
        };

        let spawned = spawn_menu_layout(
            &mut commands,
            &data,
            callbacks.as_deref(),
            config.step_delay,
        );
        layout.spawned = true;

        info!(
            "Spawned menu layout from {}: {} contexts, {} items",
            layout.path,
            spawned.contexts.len(),
            spawned.items.len()
        );
    }
}

fn resolve_overrides(
    data: &OverridesData,
    items: &FxHashMap<String, Entity>,
    owner: &str,
) -> NavOverrides {
    let lookup = |target: &Option<String>| {
        let id = target.as_ref()?;
        let entity = items.get(id).copied();
        if entity.is_none() {
            warn!("Item '{}': override target '{}' not found", owner, id);
        }
        entity
    };
    NavOverrides {
        up: lookup(&data.up),
        down: lookup(&data.down),
        left: lookup(&data.left),
        right: lookup(&data.right),
    }
}

fn resolve_action(
    data: &ActionData,
    contexts: &FxHashMap<String, Entity>,
    callbacks: Option<&CallbackStore>,
    owner: &str,
) -> ItemAction {
    match data {
        ActionData::Widget => ItemAction::GenericWidget,
        ActionData::Submenu { context } => match contexts.get(context) {
            Some(&entity) => ItemAction::SubContext(entity),
            None => {
                warn!("Item '{}': sub-context '{}' not found", owner, context);
                ItemAction::GenericWidget
            }
        },
        ActionData::Callback { name } => match callbacks.and_then(|store| store.get(name)) {
            Some(id) => ItemAction::Callback(id),
            None => {
                warn!("Item '{}': callback '{}' is not registered", owner, name);
                ItemAction::GenericWidget
            }
        },
    }
}

/// Spawn the contexts and items described by `data`.
///
/// Contexts get a [`FocusContext`] and a [`NavLabel`]; items get a
/// [`FocusableItem`], a [`NavLabel`] and, when the file gives one, a
/// [`ScreenRect`]. Unknown ids degrade to no override / generic widget with
/// a warning; repeated context or item ids are skipped, first one wins.
pub fn spawn_menu_layout(
    commands: &mut Commands,
    data: &MenuLayoutData,
    callbacks: Option<&CallbackStore>,
    default_step_delay: f32,
) -> SpawnedLayout {
    let mut spawned = SpawnedLayout::default();
    // Ids are unique per file: an item belongs to exactly one context, so a
    // repeated id is skipped instead of being spawned or shared.
    let mut accepted = vec![false; data.contexts.len()];
    let mut owners: FxHashMap<&str, (usize, usize)> = FxHashMap::default();

    for (ci, ctx) in data.contexts.iter().enumerate() {
        if spawned.contexts.contains_key(&ctx.id) {
            warn!("Duplicate context id '{}', skipped", ctx.id);
            continue;
        }
        let entity = commands.spawn(NavLabel::new(ctx.id.clone())).id();
        spawned.contexts.insert(ctx.id.clone(), entity);
        accepted[ci] = true;
    }
    for (ci, ctx) in data.contexts.iter().enumerate() {
        if !accepted[ci] {
            continue;
        }
        for (ii, item) in ctx.items.iter().enumerate() {
            if owners.contains_key(item.id.as_str()) {
                warn!(
                    "Duplicate item id '{}' in context '{}', skipped",
                    item.id, ctx.id
                );
                continue;
            }
            let mut entity = commands.spawn(NavLabel::new(item.id.clone()));
            if let Some([x, y, width, height]) = item.rect {
                entity.insert(ScreenRect::new(x, y, width, height));
            }
            spawned.items.insert(item.id.clone(), entity.id());
            owners.insert(item.id.as_str(), (ci, ii));
        }
    }

    for (ci, ctx) in data.contexts.iter().enumerate() {
        if !accepted[ci] {
            continue;
        }
        let mut members = Vec::with_capacity(ctx.items.len());
        for (ii, item) in ctx.items.iter().enumerate() {
            if owners.get(item.id.as_str()) != Some(&(ci, ii)) {
                continue;
            }
            let Some(&entity) = spawned.items.get(&item.id) else {
                continue;
            };
            let focusable = FocusableItem {
                overrides: resolve_overrides(&item.overrides, &spawned.items, &item.id),
                priority: item.priority(),
                action: resolve_action(&item.action, &spawned.contexts, callbacks, &item.id),
                ignore: item.ignore,
                notify_when_inactive: false,
            };
            commands.entity(entity).insert(focusable);
            members.push(entity);
        }

        let Some(&context) = spawned.contexts.get(&ctx.id) else {
            continue;
        };
        let mut focus = FocusContext::new(ctx.mode.into())
            .with_back_policy(ctx.back.into())
            .with_step_delay(ctx.step_delay.unwrap_or(default_step_delay));
        for item in members {
            focus.register_item(item);
        }
        if let Some(tag) = &ctx.tag {
            focus = focus.with_tag(tag.clone());
        }
        if let Some(index) = ctx.default_index {
            focus = focus.with_default_index(index);
        }
        if let Some(id) = &ctx.back_trigger {
            match spawned.items.get(id) {
                Some(&item) => focus = focus.with_back_trigger(item),
                None => warn!("Context '{}': back trigger '{}' not found", ctx.id, id),
            }
        }
        focus.follow_pointer = ctx.follow_pointer;
        focus.cursor_always_visible = ctx.cursor_always_visible;
        focus.activate_on_spawn = ctx.activate;
        commands.entity(context).insert(focus);
    }

    spawned
}
