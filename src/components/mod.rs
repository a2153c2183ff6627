//! ECS components for contexts and items.
//!
//! Submodules overview:
//! - [`focuscontext`] – a navigable group of items with its mode and selection
//! - [`focusable`] – per-item overrides and confirm action
//! - [`label`] – human-readable name used in logs and diagnostics
//! - [`menulayout`] – JSON-described menus spawned on insertion
//! - [`screenrect`] – screen-space rectangle used by grid navigation

pub mod focusable;
pub mod focuscontext;
pub mod label;
pub mod menulayout;
pub mod screenrect;
