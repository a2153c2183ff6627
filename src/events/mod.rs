//! Event types and observers.
//!
//! Submodules overview:
//! - [`input`] – logical navigation actions and directional intent
//! - [`navigation`] – stack requests and selection/cursor notifications
//! - [`switchdebug`] – toggle navigation diagnostics

pub mod input;
pub mod navigation;
pub mod switchdebug;
