//! Screen-space rectangle component.
//!
//! The [`ScreenRect`] component stores the on-screen bounds of a focusable
//! item. Grid navigation uses it to find the neighbour in the pressed
//! direction.
//!
//! Coordinates follow the usual screen convention: the origin is the top-left
//! corner and `y` grows downward.

use bevy_ecs::prelude::Component;

/// Axis-aligned rectangle in screen pixels.
#[derive(Component, Clone, Copy, Debug, PartialEq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Create a ScreenRect from its top-left corner and size.
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Centre point of the rectangle.
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Same size, moved by `(dx, dy)`.
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Half-open point containment: the left/top edges are inside, the
    /// right/bottom edges are not. Adjacent cells therefore never both claim
    /// a point on their shared edge.
    ///
    /// Negative sizes are normalized.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        let (min_x, max_x) = min_max(self.x, self.x + self.width);
        let (min_y, max_y) = min_max(self.y, self.y + self.height);
        px >= min_x && px < max_x && py >= min_y && py < max_y
    }
}

fn min_max(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}
