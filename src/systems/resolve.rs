//! Directional focus resolution.
//!
//! [`resolve_direction`] decides which item a directional press selects. It
//! is a pure function over the context's item list so it can be tested
//! without a world; [`navigation_system`](super::navigation::navigation_system)
//! feeds it from the ECS and applies the result.
//!
//! Resolution order:
//!
//! 1. the current item's override for the pressed direction, if its priority
//!    is [`OverridePriority::Always`] and the target is in the list;
//! 2. the mode rule:
//!    - horizontal: `index + horizontal`, wrapping at both ends,
//!    - vertical: `index - vertical` (up decreases the index), wrapping,
//!    - grid: the current rectangle is moved one width/height in the pressed
//!      direction and the first other item, in list order, whose rectangle
//!      contains the moved centre wins; no wrap;
//! 3. the override again, if its priority is [`OverridePriority::Fallback`]
//!    and step 2 left the selection unchanged.

use bevy_ecs::prelude::Entity;

use crate::components::focuscontext::NavigationMode;
use crate::components::focusable::{FocusableItem, OverridePriority};
use crate::components::screenrect::ScreenRect;
use crate::events::input::NavDirection;

/// Outcome of one resolution step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Unchanged,
    /// Mode rule moved the selection.
    Moved { index: usize, wrapped: bool },
    /// An override link was followed.
    Override { index: usize, fallback: bool },
}

impl Resolution {
    pub fn index(&self) -> Option<usize> {
        match *self {
            Resolution::Unchanged => None,
            Resolution::Moved { index, .. } | Resolution::Override { index, .. } => Some(index),
        }
    }
}

/// Resolve `direction` for a context.
///
/// `current_item` carries the overrides of the selected item, if it has a
/// [`FocusableItem`]; `rect_of` returns an item's on-screen rectangle for
/// grid mode.
pub fn resolve_direction(
    mode: NavigationMode,
    items: &[Entity],
    current: Option<usize>,
    direction: NavDirection,
    current_item: Option<&FocusableItem>,
    rect_of: impl Fn(Entity) -> Option<ScreenRect>,
) -> Resolution {
    if items.is_empty() || direction.is_none() {
        return Resolution::Unchanged;
    }

    if let Some(index) = follow_override(items, direction, current_item, OverridePriority::Always)
    {
        return Resolution::Override {
            index,
            fallback: false,
        };
    }

    let moved = match mode {
        NavigationMode::Horizontal => step_linear(items.len(), current, direction.horizontal),
        NavigationMode::Vertical => step_linear(items.len(), current, -direction.vertical),
        NavigationMode::Grid => step_grid(items, current, direction, rect_of),
    };
    if let Resolution::Moved { index, .. } = moved {
        if Some(index) != current {
            return moved;
        }
    }

    match follow_override(items, direction, current_item, OverridePriority::Fallback) {
        Some(index) => Resolution::Override {
            index,
            fallback: true,
        },
        None => Resolution::Unchanged,
    }
}

fn follow_override(
    items: &[Entity],
    direction: NavDirection,
    current_item: Option<&FocusableItem>,
    priority: OverridePriority,
) -> Option<usize> {
    let target = current_item?.override_for(direction, priority)?;
    items.iter().position(|e| *e == target)
}

/// Advance a list index by `delta` (-1, 0, 1) with wrap-around.
fn step_linear(len: usize, current: Option<usize>, delta: i32) -> Resolution {
    if delta == 0 || len == 0 {
        return Resolution::Unchanged;
    }
    let Some(current) = current else {
        return Resolution::Moved {
            index: 0,
            wrapped: false,
        };
    };
    let target = current as i64 + delta as i64;
    let len = len as i64;
    let wrapped = target < 0 || target >= len;
    Resolution::Moved {
        index: target.rem_euclid(len) as usize,
        wrapped,
    }
}

fn step_grid(
    items: &[Entity],
    current: Option<usize>,
    direction: NavDirection,
    rect_of: impl Fn(Entity) -> Option<ScreenRect>,
) -> Resolution {
    let Some(current) = current.filter(|i| *i < items.len()) else {
        return Resolution::Unchanged;
    };
    let Some(own) = rect_of(items[current]) else {
        return Resolution::Unchanged;
    };
    // screen space grows downward, so "up" (+1) moves towards smaller y
    let shifted = own.translated(
        direction.horizontal as f32 * own.width,
        -direction.vertical as f32 * own.height,
    );
    let (px, py) = shifted.center();
    items
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != current)
        .find(|(_, item)| rect_of(**item).is_some_and(|r| r.contains_point(px, py)))
        .map(|(index, _)| Resolution::Moved {
            index,
            wrapped: false,
        })
        .unwrap_or(Resolution::Unchanged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::world::World;
    use rustc_hash::FxHashMap;

    fn items(n: usize) -> Vec<Entity> {
        let mut world = World::new();
        (0..n).map(|_| world.spawn_empty().id()).collect()
    }

    fn no_rects(_: Entity) -> Option<ScreenRect> {
        None
    }

    fn linear(mode: NavigationMode, items: &[Entity], current: usize, dir: NavDirection) -> Option<usize> {
        resolve_direction(mode, items, Some(current), dir, None, no_rects).index()
    }

    #[test]
    fn test_horizontal_right_walks_and_wraps() {
        let e = items(3);
        let mut index = 0;
        let mut seen = vec![];
        for _ in 0..3 {
            index = linear(NavigationMode::Horizontal, &e, index, NavDirection::RIGHT).unwrap();
            seen.push(index);
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn test_horizontal_left_wraps_to_last() {
        let e = items(3);
        let r = resolve_direction(
            NavigationMode::Horizontal,
            &e,
            Some(0),
            NavDirection::LEFT,
            None,
            no_rects,
        );
        assert_eq!(
            r,
            Resolution::Moved {
                index: 2,
                wrapped: true
            }
        );
    }

    #[test]
    fn test_horizontal_ignores_vertical_axis() {
        let e = items(3);
        assert_eq!(linear(NavigationMode::Horizontal, &e, 1, NavDirection::DOWN), None);
    }

    #[test]
    fn test_vertical_down_increases_and_up_decreases() {
        let e = items(4);
        assert_eq!(linear(NavigationMode::Vertical, &e, 1, NavDirection::DOWN), Some(2));
        assert_eq!(linear(NavigationMode::Vertical, &e, 1, NavDirection::UP), Some(0));
        assert_eq!(linear(NavigationMode::Vertical, &e, 0, NavDirection::UP), Some(3));
        assert_eq!(linear(NavigationMode::Vertical, &e, 3, NavDirection::DOWN), Some(0));
        assert_eq!(linear(NavigationMode::Vertical, &e, 1, NavDirection::LEFT), None);
    }

    #[test]
    fn test_wrap_returns_to_start_after_len_steps() {
        for len in 1..6 {
            let e = items(len);
            for mode in [NavigationMode::Horizontal, NavigationMode::Vertical] {
                for dir in [
                    NavDirection::LEFT,
                    NavDirection::RIGHT,
                    NavDirection::UP,
                    NavDirection::DOWN,
                ] {
                    let moves_in_mode = match mode {
                        NavigationMode::Horizontal => dir.horizontal != 0,
                        _ => dir.vertical != 0,
                    };
                    if !moves_in_mode {
                        continue;
                    }
                    for start in 0..len {
                        let mut index = start;
                        for _ in 0..len {
                            index = linear(mode, &e, index, dir).unwrap_or(index);
                        }
                        assert_eq!(index, start, "len={len} mode={mode:?} dir={dir:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_item_does_not_move() {
        let e = items(1);
        assert_eq!(linear(NavigationMode::Vertical, &e, 0, NavDirection::DOWN), None);
    }

    #[test]
    fn test_empty_list_is_unchanged() {
        let r = resolve_direction(
            NavigationMode::Grid,
            &[],
            None,
            NavDirection::RIGHT,
            None,
            no_rects,
        );
        assert_eq!(r, Resolution::Unchanged);
    }

    #[test]
    fn test_always_override_beats_mode() {
        // items [A, B, C], vertical mode, A has an always-override to C for
        // left; a diagonal down+left press follows the override
        let e = items(3);
        let a = FocusableItem::default().with_left(e[2]);
        let r = resolve_direction(
            NavigationMode::Vertical,
            &e,
            Some(0),
            NavDirection::new(-1, -1),
            Some(&a),
            no_rects,
        );
        assert_eq!(
            r,
            Resolution::Override {
                index: 2,
                fallback: false
            }
        );
    }

    #[test]
    fn test_always_override_for_pressed_direction() {
        let e = items(3);
        let a = FocusableItem::default().with_down(e[2]);
        let r = resolve_direction(
            NavigationMode::Vertical,
            &e,
            Some(0),
            NavDirection::DOWN,
            Some(&a),
            no_rects,
        );
        assert_eq!(r.index(), Some(2));
    }

    #[test]
    fn test_override_target_missing_falls_through() {
        // four entities from one world, the last one is not in the list
        let mut e = items(4);
        let stranger = e.pop().unwrap();
        let a = FocusableItem::default().with_down(stranger);
        let r = resolve_direction(
            NavigationMode::Vertical,
            &e,
            Some(0),
            NavDirection::DOWN,
            Some(&a),
            no_rects,
        );
        assert_eq!(
            r,
            Resolution::Moved {
                index: 1,
                wrapped: false
            }
        );
    }

    #[test]
    fn test_fallback_override_only_when_mode_fails() {
        let e = items(3);
        let b = FocusableItem::default()
            .with_right(e[2])
            .with_down(e[0])
            .with_priority(OverridePriority::Fallback);

        // vertical mode cannot move right, so the fallback applies
        let r = resolve_direction(
            NavigationMode::Vertical,
            &e,
            Some(1),
            NavDirection::RIGHT,
            Some(&b),
            no_rects,
        );
        assert_eq!(
            r,
            Resolution::Override {
                index: 2,
                fallback: true
            }
        );

        // vertical mode handles down itself
        let r = resolve_direction(
            NavigationMode::Vertical,
            &e,
            Some(1),
            NavDirection::DOWN,
            Some(&b),
            no_rects,
        );
        assert_eq!(
            r,
            Resolution::Moved {
                index: 2,
                wrapped: false
            }
        );
    }

    #[test]
    fn test_override_cycle_is_single_step() {
        let e = items(2);
        let a = FocusableItem::default().with_right(e[1]);
        let r = resolve_direction(
            NavigationMode::Grid,
            &e,
            Some(0),
            NavDirection::RIGHT,
            Some(&a),
            no_rects,
        );
        assert_eq!(r.index(), Some(1));
    }

    /// 3x2 grid of 10x10 cells:
    /// ```text
    /// 0 1 2
    /// 3 4 5
    /// ```
    fn grid() -> (Vec<Entity>, FxHashMap<Entity, ScreenRect>) {
        let e = items(6);
        let mut rects = FxHashMap::default();
        for (i, item) in e.iter().enumerate() {
            let col = (i % 3) as f32;
            let row = (i / 3) as f32;
            rects.insert(*item, ScreenRect::new(col * 10.0, row * 10.0, 10.0, 10.0));
        }
        (e, rects)
    }

    fn grid_step(current: usize, dir: NavDirection) -> Resolution {
        let (e, rects) = grid();
        resolve_direction(NavigationMode::Grid, &e, Some(current), dir, None, |item| {
            rects.get(&item).copied()
        })
    }

    #[test]
    fn test_grid_moves_to_adjacent_cells() {
        assert_eq!(grid_step(0, NavDirection::RIGHT).index(), Some(1));
        assert_eq!(grid_step(1, NavDirection::DOWN).index(), Some(4));
        assert_eq!(grid_step(4, NavDirection::UP).index(), Some(1));
        assert_eq!(grid_step(5, NavDirection::LEFT).index(), Some(4));
        assert_eq!(grid_step(0, NavDirection::new(1, -1)).index(), Some(4));
    }

    #[test]
    fn test_grid_does_not_wrap() {
        assert_eq!(grid_step(2, NavDirection::RIGHT), Resolution::Unchanged);
        assert_eq!(grid_step(0, NavDirection::UP), Resolution::Unchanged);
        assert_eq!(grid_step(3, NavDirection::LEFT), Resolution::Unchanged);
        assert_eq!(grid_step(5, NavDirection::DOWN), Resolution::Unchanged);
    }

    #[test]
    fn test_grid_overlap_resolves_to_first_in_list_order() {
        let e = items(3);
        let mut rects = FxHashMap::default();
        rects.insert(e[0], ScreenRect::new(0.0, 0.0, 10.0, 10.0));
        rects.insert(e[1], ScreenRect::new(10.0, 0.0, 20.0, 10.0));
        rects.insert(e[2], ScreenRect::new(12.0, 0.0, 10.0, 10.0));
        let r = resolve_direction(
            NavigationMode::Grid,
            &e,
            Some(0),
            NavDirection::RIGHT,
            None,
            |item| rects.get(&item).copied(),
        );
        assert_eq!(r.index(), Some(1));
    }

    #[test]
    fn test_grid_without_current_rect_is_unchanged() {
        let e = items(2);
        let r = resolve_direction(
            NavigationMode::Grid,
            &e,
            Some(0),
            NavDirection::RIGHT,
            None,
            no_rects,
        );
        assert_eq!(r, Resolution::Unchanged);
    }

    #[test]
    fn test_grid_failure_uses_fallback_override() {
        let (e, rects) = grid();
        let edge = FocusableItem::default()
            .with_right(e[3])
            .with_priority(OverridePriority::Fallback);
        let r = resolve_direction(
            NavigationMode::Grid,
            &e,
            Some(2),
            NavDirection::RIGHT,
            Some(&edge),
            |item| rects.get(&item).copied(),
        );
        assert_eq!(
            r,
            Resolution::Override {
                index: 3,
                fallback: true
            }
        );
    }
}
