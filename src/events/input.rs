//! Navigation input vocabulary.
//!
//! [`NavAction`] names the logical inputs a menu understands, independent of
//! the physical device. [`NavDirection`] is the per-tick directional intent
//! derived from the two input axes; diagonal presses carry both components.
//!
//! Hosts translate their device state into the
//! [`NavInput`](crate::resources::navinput::NavInput) resource; the demo binary
//! parses scripted [`NavAction`] tokens.

use std::str::FromStr;

/// Enumeration of logical navigation actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavAction {
    Up,
    Down,
    Left,
    Right,
    /// Activate the selected item.
    Confirm,
    /// Back/cancel, handled according to the context's back policy.
    Back,
    /// Idle tick with no input.
    Idle,
}

impl FromStr for NavAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "u" => Ok(NavAction::Up),
            "down" | "d" => Ok(NavAction::Down),
            "left" | "l" => Ok(NavAction::Left),
            "right" | "r" => Ok(NavAction::Right),
            "confirm" | "ok" | "enter" => Ok(NavAction::Confirm),
            "back" | "cancel" | "esc" => Ok(NavAction::Back),
            "idle" | "wait" | "-" => Ok(NavAction::Idle),
            other => Err(format!("unknown navigation action '{}'", other)),
        }
    }
}

/// Parse an input script into ticks.
///
/// Ticks are separated by commas; actions pressed together in one tick are
/// joined with `+` (e.g. `"down,down+right,confirm"`).
pub fn parse_input_script(script: &str) -> Result<Vec<Vec<NavAction>>, String> {
    script
        .split(',')
        .map(str::trim)
        .filter(|tick| !tick.is_empty())
        .map(|tick| tick.split('+').map(NavAction::from_str).collect())
        .collect()
}

/// Directional intent for one tick.
///
/// Each component is -1, 0 or +1. `vertical` follows the input axis
/// convention: +1 is up, -1 is down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct NavDirection {
    pub horizontal: i32,
    pub vertical: i32,
}

impl NavDirection {
    pub const NONE: NavDirection = NavDirection {
        horizontal: 0,
        vertical: 0,
    };
    pub const LEFT: NavDirection = NavDirection {
        horizontal: -1,
        vertical: 0,
    };
    pub const RIGHT: NavDirection = NavDirection {
        horizontal: 1,
        vertical: 0,
    };
    pub const UP: NavDirection = NavDirection {
        horizontal: 0,
        vertical: 1,
    };
    pub const DOWN: NavDirection = NavDirection {
        horizontal: 0,
        vertical: -1,
    };

    /// Build a direction from raw components, clamping each to -1..=1.
    pub fn new(horizontal: i32, vertical: i32) -> Self {
        Self {
            horizontal: horizontal.signum(),
            vertical: vertical.signum(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.horizontal == 0 && self.vertical == 0
    }
}
