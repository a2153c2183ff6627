//! Focus navigation library.
//!
//! Menu navigation for controller/keyboard-driven interfaces: a stack of
//! focus contexts where only the top one receives input, and a resolver that
//! turns directional input into the next selected item. Built on `bevy_ecs`:
//! contexts and items are components, the stack is a resource and stack
//! operations are events handled by observers.
//!
//! See [`app`] for wiring the resources, observers and schedule into a world.

pub mod app;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
