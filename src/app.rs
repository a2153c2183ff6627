//! World setup.
//!
//! [`init_navigation`] inserts the navigation resources and registers the
//! observers; [`navigation_schedule`] builds the per-tick schedule. A host
//! drives the world like this:
//!
//! ```ignore
//! let mut world = World::new();
//! init_navigation(&mut world, NavigationConfig::new());
//! let mut schedule = navigation_schedule();
//! loop {
//!     world.resource_mut::<NavInput>().apply_actions(&actions);
//!     update_world_time(&mut world, dt);
//!     schedule.run(&mut world);
//!     world.resource_mut::<NavInput>().end_tick();
//!     world.clear_trackers();
//! }
//! ```

use bevy_ecs::prelude::*;

use crate::events::switchdebug::switch_debug_observer;
use crate::resources::callbackstore::CallbackStore;
use crate::resources::navconfig::NavigationConfig;
use crate::resources::navinput::NavInput;
use crate::resources::navstack::NavigationStack;
use crate::resources::worldtime::WorldTime;
use crate::systems::contextstack::{
    activate_context_observer, clear_contexts_observer, context_spawn_system,
    deactivate_context_observer, pointer_entered_observer, pop_context_observer,
    refresh_contexts_observer, remove_tagged_contexts_observer,
};
use crate::systems::debugreport::debug_report_system;
use crate::systems::feedback::focus_feedback_system;
use crate::systems::menulayout::menulayout_spawn_system;
use crate::systems::navigation::navigation_system;

/// Insert the navigation resources and spawn the stack observers.
///
/// Resources already present (for example a [`CallbackStore`] filled by the
/// host) are kept.
pub fn init_navigation(world: &mut World, config: NavigationConfig) {
    if !world.contains_resource::<WorldTime>() {
        world.insert_resource(WorldTime::default().with_time_scale(1.0));
    }
    world.insert_resource(NavInput::default());
    world.insert_resource(NavigationStack::new());
    world.insert_resource(config);
    if !world.contains_resource::<CallbackStore>() {
        world.insert_resource(CallbackStore::new());
    }

    world.spawn(Observer::new(activate_context_observer));
    world.spawn(Observer::new(deactivate_context_observer));
    world.spawn(Observer::new(pop_context_observer));
    world.spawn(Observer::new(remove_tagged_contexts_observer));
    world.spawn(Observer::new(clear_contexts_observer));
    world.spawn(Observer::new(refresh_contexts_observer));
    world.spawn(Observer::new(pointer_entered_observer));
    world.spawn(Observer::new(switch_debug_observer));

    world.flush();
}

/// Per-tick schedule: layout spawning, context preparation, input
/// processing, feedback and diagnostics, in that order.
pub fn navigation_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(menulayout_spawn_system);
    update.add_systems(context_spawn_system.after(menulayout_spawn_system));
    update.add_systems(navigation_system.after(context_spawn_system));
    update.add_systems(focus_feedback_system.after(navigation_system));
    update.add_systems(debug_report_system.after(focus_feedback_system));
    update
}
