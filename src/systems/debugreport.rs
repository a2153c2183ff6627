//! Navigation diagnostics.
//!
//! [`navigation_report`] renders the top context (its items, with `->`
//! marking the selection), the whole stack and the current input as plain
//! text. While the [`DebugMode`] resource is present,
//! [`debug_report_system`] logs that report whenever it changes.

use std::fmt::Write;

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::focuscontext::FocusContext;
use crate::components::label::NavLabel;
use crate::events::input::NavDirection;
use crate::resources::debugmode::DebugMode;
use crate::resources::navconfig::NavigationConfig;
use crate::resources::navinput::NavInput;
use crate::resources::navstack::NavigationStack;
use crate::systems::navigation::current_step_delay;

/// Build the text report for `stack`.
///
/// `label_of` names an entity (context or item); `None` items render as
/// `[missing item]`.
pub fn navigation_report<'a>(
    stack: &NavigationStack,
    context_of: impl Fn(Entity) -> Option<&'a FocusContext>,
    label_of: impl Fn(Entity) -> Option<String>,
    direction: NavDirection,
) -> String {
    let Some(top) = stack.peek_top() else {
        return "Navigation not active".to_string();
    };
    let name = |entity: Entity| label_of(entity).unwrap_or_else(|| format!("{:?}", entity));

    let mut report = String::new();
    let _ = writeln!(report, "{}\n", name(top));
    if let Some(ctx) = context_of(top) {
        for (index, &item) in ctx.items().iter().enumerate() {
            let marker = if ctx.current_index() == Some(index) {
                "-> "
            } else {
                "   "
            };
            let item_name = label_of(item).unwrap_or_else(|| "[missing item]".to_string());
            let _ = writeln!(report, "{}{}", marker, item_name);
        }
    }
    let _ = writeln!(report, "\n----------STACK----------");
    for context in stack.iter() {
        let _ = writeln!(report, "{}", name(context));
    }
    let _ = writeln!(report, "\n----------INPUT----------");
    let _ = write!(
        report,
        "({}, {})",
        direction.horizontal, direction.vertical
    );
    report
}

/// Logs the navigation report while [`DebugMode`] is present.
pub fn debug_report_system(
    debug_mode: Option<Res<DebugMode>>,
    stack: Res<NavigationStack>,
    contexts: Query<&FocusContext>,
    labels: Query<&NavLabel>,
    input: Res<NavInput>,
    config: Res<NavigationConfig>,
    mut last: Local<String>,
) {
    if debug_mode.is_none() {
        return;
    }
    let report = navigation_report(
        &stack,
        |entity| contexts.get(entity).ok(),
        |entity| labels.get(entity).ok().map(|label| label.0.clone()),
        input.direction(config.axis_threshold),
    );
    if *last != report {
        let step_delay = current_step_delay(
            &stack,
            |context| contexts.get(context).ok().map(|ctx| ctx.step_delay),
            &config,
        );
        debug!("\n{}\nstep delay: {:.2}s", report, step_delay);
        *last = report;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::focuscontext::NavigationMode;

    #[test]
    fn test_report_when_stack_is_empty() {
        let stack = NavigationStack::new();
        let report = navigation_report(&stack, |_| None, |_| None, NavDirection::NONE);
        assert_eq!(report, "Navigation not active");
    }

    #[test]
    fn test_report_marks_selection_and_lists_stack() {
        let mut world = World::new();
        let a = world.spawn(NavLabel::new("a")).id();
        let b = world.spawn(NavLabel::new("b")).id();
        let under = world.spawn(NavLabel::new("under")).id();
        let top = world.spawn(NavLabel::new("top")).id();
        let mut ctx = FocusContext::new(NavigationMode::Vertical).with_items([a, b]);
        ctx.select(1);

        let mut stack = NavigationStack::new();
        stack.push(under);
        stack.push(top);

        let label = |entity: Entity| world.get::<NavLabel>(entity).map(|l| l.0.clone());
        let report = navigation_report(
            &stack,
            |entity| (entity == top).then_some(&ctx),
            label,
            NavDirection::UP,
        );
        assert!(report.starts_with("top\n"));
        assert!(report.contains("   a\n-> b\n"));
        assert!(report.contains("----------STACK----------\ntop\nunder\n"));
        assert!(report.ends_with("(0, 1)"));
    }
}
