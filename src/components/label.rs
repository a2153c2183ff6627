use bevy_ecs::prelude::Component;

/// Human-readable name of a context or item, used by logs and the debug report.
#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NavLabel(pub String);

impl NavLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
