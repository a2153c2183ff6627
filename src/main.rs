//! Focus navigation demo.
//!
//! Loads a JSON menu layout, replays a scripted input sequence against it and
//! logs every selection, activation and stack change. Useful to try layouts
//! and navigation settings without a renderer.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --layout demos/menu.json --config demos/navigation.ini \
//!     --inputs "down,down,confirm,right,back,up,confirm"
//! ```
//!
//! Ticks in the script are separated by commas; actions pressed in the same
//! tick are joined with `+` (for example `up+right`). `-` is an idle tick.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

use focusnav::app::{init_navigation, navigation_schedule};
use focusnav::components::focuscontext::FocusContext;
use focusnav::components::label::NavLabel;
use focusnav::components::menulayout::{MenuLayout, MenuLayoutData};
use focusnav::events::input::parse_input_script;
use focusnav::events::navigation::{
    ContextActivated, ContextDeactivated, SelectionChanged, WidgetActivated,
};
use focusnav::events::switchdebug::SwitchDebugEvent;
use focusnav::resources::callbackstore::CallbackStore;
use focusnav::resources::navconfig::NavigationConfig;
use focusnav::resources::navinput::NavInput;
use focusnav::resources::navstack::NavigationStack;
use focusnav::systems::debugreport::navigation_report;
use focusnav::systems::time::update_world_time;

/// Focus navigation demo
#[derive(Parser)]
#[command(version, about = "Replays scripted input against a JSON menu layout.")]
struct Cli {
    /// JSON menu layout to load.
    #[arg(long, value_name = "FILE")]
    layout: PathBuf,

    /// INI navigation settings (defaults are used when omitted).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input script, e.g. "down,down+right,confirm,-,back".
    #[arg(long, value_name = "SCRIPT", default_value = "")]
    inputs: String,

    /// Seconds per tick.
    #[arg(long, default_value_t = 0.05)]
    dt: f32,

    /// Log the navigation report whenever it changes.
    #[arg(long)]
    debug: bool,
}

/// Set by the `quit` callback.
#[derive(Resource)]
struct QuitRequested;

fn quit(mut commands: Commands) {
    info!("Quit requested");
    commands.insert_resource(QuitRequested);
}

fn label(labels: &Query<&NavLabel>, entity: Option<Entity>) -> String {
    entity
        .and_then(|e| labels.get(e).ok())
        .map(|l| l.0.clone())
        .unwrap_or_else(|| "-".to_string())
}

fn log_selection(trigger: On<SelectionChanged>, labels: Query<&NavLabel>) {
    let event = trigger.event();
    info!(
        "[{}] selected {}",
        label(&labels, Some(event.context)),
        label(&labels, event.item)
    );
}

fn log_widget(trigger: On<WidgetActivated>, labels: Query<&NavLabel>) {
    let event = trigger.event();
    info!(
        "[{}] activated {}",
        label(&labels, event.context),
        label(&labels, Some(event.item))
    );
}

fn log_activated(trigger: On<ContextActivated>, labels: Query<&NavLabel>) {
    info!("opened {}", label(&labels, Some(trigger.event().context)));
}

fn log_deactivated(trigger: On<ContextDeactivated>, labels: Query<&NavLabel>) {
    info!("closed {}", label(&labels, Some(trigger.event().context)));
}

fn main() {
    let cli = Cli::parse();
    let filter = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let mut config = match &cli.config {
        Some(path) => NavigationConfig::with_path(path),
        None => NavigationConfig::new(),
    };
    if cli.config.is_some() {
        if let Err(e) = config.load_from_file() {
            error!("{e}");
            std::process::exit(1);
        }
    }

    let script = match parse_input_script(&cli.inputs) {
        Ok(script) => script,
        Err(e) => {
            error!("Invalid input script: {e}");
            std::process::exit(1);
        }
    };

    let layout_path = cli.layout.to_string_lossy().into_owned();
    if let Err(e) = MenuLayoutData::load_from_file(&layout_path) {
        error!("Failed to load menu layout from {}: {}", layout_path, e);
        std::process::exit(1);
    }

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let quit_id = world.register_system(quit);
    let mut callbacks = CallbackStore::new();
    callbacks.insert("quit", quit_id);
    world.insert_resource(callbacks);

    init_navigation(&mut world, config);
    world.spawn(Observer::new(log_selection));
    world.spawn(Observer::new(log_widget));
    world.spawn(Observer::new(log_activated));
    world.spawn(Observer::new(log_deactivated));
    if cli.debug {
        world.trigger(SwitchDebugEvent {});
    }
    world.flush();

    world.spawn(MenuLayout::new(layout_path));

    let mut update = navigation_schedule();

    // The tick that spawns and activates the layout ignores input.
    let ticks = std::iter::once(Vec::new()).chain(script);
    for actions in ticks {
        world.resource_mut::<NavInput>().apply_actions(&actions);
        update_world_time(&mut world, cli.dt);
        update.run(&mut world);
        world.resource_mut::<NavInput>().end_tick();
        world.clear_trackers();

        if world.contains_resource::<QuitRequested>() {
            break;
        }
    }

    let report = navigation_report(
        world.resource::<NavigationStack>(),
        |entity| world.get::<FocusContext>(entity),
        |entity| world.get::<NavLabel>(entity).map(|l| l.0.clone()),
        Default::default(),
    );
    println!("{report}");
}
