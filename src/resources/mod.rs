//! ECS resources.
//!
//! Submodules overview:
//! - [`callbackstore`] – named one-shot systems for item callbacks
//! - [`debugmode`] – marker enabling the diagnostics report
//! - [`navconfig`] – INI-backed navigation settings
//! - [`navinput`] – per-tick navigation input state
//! - [`navstack`] – the stack of active contexts
//! - [`worldtime`] – scaled and unscaled time

pub mod callbackstore;
pub mod debugmode;
pub mod navconfig;
pub mod navinput;
pub mod navstack;
pub mod worldtime;
