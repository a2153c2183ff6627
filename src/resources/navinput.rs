//! Per-tick navigation input resource.
//!
//! Captures the state a menu needs from the input device and exposes it to
//! the navigation system via the [`NavInput`] resource: two continuous axes
//! and two edge-triggered buttons. The host samples its device once per tick
//! and writes the values here; [`NavInput::end_tick`] clears the edges
//! afterwards.

use bevy_ecs::prelude::*;

use crate::events::input::{NavAction, NavDirection};

/// Default dead zone for the axes.
pub const DEFAULT_AXIS_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Boolean button state.
pub struct ButtonState {
    /// Whether the button is currently held.
    pub active: bool,
    /// Whether the button was pressed this tick.
    pub just_pressed: bool,
    /// Whether the button was released this tick.
    pub just_released: bool,
}

impl ButtonState {
    /// Update from the held state, deriving the edges from the previous
    /// value.
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.active;
        self.just_released = !down && self.active;
        self.active = down;
    }

    fn clear_edges(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// Resource capturing the per-tick input relevant to menu navigation.
#[derive(Resource, Debug, Clone, Default)]
pub struct NavInput {
    /// Horizontal axis, -1 (left) to 1 (right).
    pub horizontal: f32,
    /// Vertical axis, -1 (down) to 1 (up).
    pub vertical: f32,
    pub confirm: ButtonState,
    pub back: ButtonState,
}

impl NavInput {
    /// Apply a set of logical actions as this tick's input: directions set
    /// the axes, confirm/back are pressed, everything else is released.
    pub fn apply_actions(&mut self, actions: &[NavAction]) {
        let mut horizontal = 0.0;
        let mut vertical = 0.0;
        let mut confirm = false;
        let mut back = false;
        for action in actions {
            match action {
                NavAction::Left => horizontal -= 1.0,
                NavAction::Right => horizontal += 1.0,
                NavAction::Up => vertical += 1.0,
                NavAction::Down => vertical -= 1.0,
                NavAction::Confirm => confirm = true,
                NavAction::Back => back = true,
                NavAction::Idle => {}
            }
        }
        self.horizontal = f32::clamp(horizontal, -1.0, 1.0);
        self.vertical = f32::clamp(vertical, -1.0, 1.0);
        self.confirm.update(confirm);
        self.back.update(back);
    }

    /// Press a single action on top of the current state.
    pub fn press(&mut self, action: NavAction) {
        match action {
            NavAction::Left => self.horizontal = -1.0,
            NavAction::Right => self.horizontal = 1.0,
            NavAction::Up => self.vertical = 1.0,
            NavAction::Down => self.vertical = -1.0,
            NavAction::Confirm => self.confirm.update(true),
            NavAction::Back => self.back.update(true),
            NavAction::Idle => {}
        }
    }

    pub fn confirm_pressed(&self) -> bool {
        self.confirm.just_pressed
    }

    pub fn back_pressed(&self) -> bool {
        self.back.just_pressed
    }

    /// Directional intent with `threshold` as dead zone.
    pub fn direction(&self, threshold: f32) -> NavDirection {
        let axis = |value: f32| {
            if value > threshold {
                1
            } else if value < -threshold {
                -1
            } else {
                0
            }
        };
        NavDirection::new(axis(self.horizontal), axis(self.vertical))
    }

    /// Clear edge flags once the tick has been processed.
    pub fn end_tick(&mut self) {
        self.confirm.clear_edges();
        self.back.clear_edges();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttonstate_default() {
        let bs = ButtonState::default();
        assert!(!bs.active);
        assert!(!bs.just_pressed);
        assert!(!bs.just_released);
    }

    #[test]
    fn test_buttonstate_edges() {
        let mut bs = ButtonState::default();
        bs.update(true);
        assert!(bs.active && bs.just_pressed && !bs.just_released);
        bs.update(true);
        assert!(bs.active && !bs.just_pressed);
        bs.update(false);
        assert!(!bs.active && bs.just_released);
    }

    #[test]
    fn test_direction_threshold() {
        let mut input = NavInput::default();
        input.horizontal = 0.4;
        input.vertical = -0.8;
        assert_eq!(input.direction(DEFAULT_AXIS_THRESHOLD), NavDirection::DOWN);
        input.horizontal = 0.6;
        assert_eq!(
            input.direction(DEFAULT_AXIS_THRESHOLD),
            NavDirection::new(1, -1)
        );
        assert_eq!(input.direction(0.9), NavDirection::NONE);
    }

    #[test]
    fn test_apply_actions_cancels_opposites() {
        let mut input = NavInput::default();
        input.apply_actions(&[NavAction::Left, NavAction::Right, NavAction::Up]);
        assert_eq!(input.direction(0.5), NavDirection::UP);
        assert!(!input.confirm_pressed());
    }

    #[test]
    fn test_apply_actions_held_confirm_is_single_edge() {
        let mut input = NavInput::default();
        input.apply_actions(&[NavAction::Confirm]);
        assert!(input.confirm_pressed());
        input.apply_actions(&[NavAction::Confirm]);
        assert!(!input.confirm_pressed());
        input.apply_actions(&[]);
        input.apply_actions(&[NavAction::Confirm]);
        assert!(input.confirm_pressed());
    }

    #[test]
    fn test_end_tick_clears_edges_only() {
        let mut input = NavInput::default();
        input.press(NavAction::Back);
        input.press(NavAction::Right);
        input.end_tick();
        assert!(!input.back_pressed());
        assert!(input.back.active);
        assert_eq!(input.horizontal, 1.0);
    }
}
