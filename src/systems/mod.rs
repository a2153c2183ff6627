//! Navigation systems.
//!
//! Submodules overview
//! - [`activation`] – confirm/back dispatch to sub-contexts, callbacks and widgets
//! - [`contextstack`] – observers applying stack requests
//! - [`debugreport`] – text report of the stack and top context
//! - [`feedback`] – selection, navigated-in/out and cursor notifications
//! - [`itemlookup`] – item queries and item list rebuilding
//! - [`menulayout`] – spawn contexts and items from JSON layouts
//! - [`navigation`] – per-tick input processing for the top context
//! - [`resolve`] – directional resolution (overrides, linear, grid)
//! - [`time`] – advance [`crate::resources::worldtime::WorldTime`]

pub mod activation;
pub mod contextstack;
pub mod debugreport;
pub mod feedback;
pub mod itemlookup;
pub mod menulayout;
pub mod navigation;
pub mod resolve;
pub mod time;
