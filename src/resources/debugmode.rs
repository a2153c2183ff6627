//! Debug toggle resource.
//!
//! The mere presence of this resource indicates that navigation diagnostics
//! should be produced. Remove it to disable debug behavior.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the debug report system logs the stack and
/// the top context every tick.
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
