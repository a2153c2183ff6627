//! Registry of named item callbacks.
//!
//! Menu layout files refer to callbacks by name. The names are resolved to a
//! [`SystemId`] once, when the layout spawns its items, and stored in the
//! item's [`ItemAction::Callback`](crate::components::focusable::ItemAction::Callback).

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Map of callback names to system IDs.
#[derive(Resource, Default)]
pub struct CallbackStore {
    pub map: FxHashMap<String, SystemId>,
}

impl CallbackStore {
    /// Create an empty store.
    pub fn new() -> Self {
        CallbackStore {
            map: FxHashMap::default(),
        }
    }

    /// Insert a system ID under a human-readable name.
    pub fn insert(&mut self, name: impl Into<String>, id: SystemId) {
        self.map.insert(name.into(), id);
    }

    /// Retrieve a system ID by name, if present.
    pub fn get(&self, name: impl AsRef<str>) -> Option<SystemId> {
        self.map.get(name.as_ref()).copied()
    }
}
