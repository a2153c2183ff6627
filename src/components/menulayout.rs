//! Menu layout component for data-driven context spawning.
//!
//! The [`MenuLayout`] component references a JSON file describing one or
//! more focus contexts and their items. When the component is added, the
//! [`menulayout_spawn_system`](crate::systems::menulayout::menulayout_spawn_system)
//! reads the file and spawns a context entity per entry plus one entity per
//! item, wiring overrides, sub-contexts and callbacks by id.

use bevy_ecs::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::focuscontext::{BackPolicy, NavigationMode};
use crate::components::focusable::OverridePriority;

/// A layout component that spawns contexts and items once.
#[derive(Component, Debug, Clone)]
pub struct MenuLayout {
    /// Path to the JSON file defining the menus.
    pub path: String,
    /// Whether this layout has been processed (successfully or not).
    pub spawned: bool,
}

impl MenuLayout {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            spawned: false,
        }
    }
}

/// Root of a menu layout file.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct MenuLayoutData {
    pub contexts: Vec<ContextData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ContextData {
    pub id: String,
    #[serde(default)]
    pub tag: Option<String>,
    #[serde(default)]
    pub mode: ModeData,
    #[serde(default)]
    pub back: BackData,
    /// Item id confirmed by the back input when `back` is `trigger_item`.
    #[serde(default)]
    pub back_trigger: Option<String>,
    /// Falls back to the configured default step delay.
    #[serde(default)]
    pub step_delay: Option<f32>,
    #[serde(default)]
    pub activate: bool,
    #[serde(default)]
    pub default_index: Option<usize>,
    #[serde(default = "default_true")]
    pub follow_pointer: bool,
    #[serde(default)]
    pub cursor_always_visible: bool,
    #[serde(default)]
    pub items: Vec<ItemData>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ItemData {
    pub id: String,
    /// `[x, y, width, height]` in screen pixels.
    #[serde(default)]
    pub rect: Option<[f32; 4]>,
    #[serde(default)]
    pub action: ActionData,
    #[serde(default)]
    pub overrides: OverridesData,
    /// Overrides apply only when mode resolution fails.
    #[serde(default)]
    pub fallback: bool,
    #[serde(default)]
    pub ignore: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct OverridesData {
    #[serde(default)]
    pub up: Option<String>,
    #[serde(default)]
    pub down: Option<String>,
    #[serde(default)]
    pub left: Option<String>,
    #[serde(default)]
    pub right: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionData {
    /// Activate another context of the same file, by id.
    Submenu { context: String },
    /// Run a callback registered in the
    /// [`CallbackStore`](crate::resources::callbackstore::CallbackStore).
    Callback { name: String },
    #[default]
    Widget,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModeData {
    Horizontal,
    #[default]
    Vertical,
    Grid,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BackData {
    #[default]
    None,
    DeactivateContext,
    TriggerItem,
}

fn default_true() -> bool {
    true
}

impl From<ModeData> for NavigationMode {
    fn from(mode: ModeData) -> Self {
        match mode {
            ModeData::Horizontal => NavigationMode::Horizontal,
            ModeData::Vertical => NavigationMode::Vertical,
            ModeData::Grid => NavigationMode::Grid,
        }
    }
}

impl From<BackData> for BackPolicy {
    fn from(back: BackData) -> Self {
        match back {
            BackData::None => BackPolicy::None,
            BackData::DeactivateContext => BackPolicy::DeactivateContext,
            BackData::TriggerItem => BackPolicy::TriggerItem,
        }
    }
}

impl ItemData {
    pub fn priority(&self) -> OverridePriority {
        if self.fallback {
            OverridePriority::Fallback
        } else {
            OverridePriority::Always
        }
    }
}

impl MenuLayoutData {
    /// Loads layout data from a JSON file at the specified path.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let file_content = std::fs::read_to_string(path)?;
        Self::from_json(&file_content)
    }

    pub fn from_json(json: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let layout_data: MenuLayoutData = serde_json::from_str(json)?;
        Ok(layout_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LAYOUT: &str = r#"{
        "contexts": [
            {
                "id": "main",
                "tag": "title",
                "mode": "vertical",
                "back": "trigger_item",
                "back_trigger": "quit",
                "activate": true,
                "items": [
                    { "id": "play", "action": { "type": "callback", "name": "start" } },
                    { "id": "options", "action": { "type": "submenu", "context": "opts" } },
                    { "id": "quit", "overrides": { "up": "play" }, "fallback": true }
                ]
            },
            {
                "id": "opts",
                "mode": "grid",
                "back": "deactivate_context",
                "step_delay": 0.1,
                "items": [
                    { "id": "a", "rect": [0, 0, 10, 10] },
                    { "id": "b", "rect": [10, 0, 10, 10], "ignore": true }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse_layout() {
        let data = MenuLayoutData::from_json(LAYOUT).unwrap();
        assert_eq!(data.contexts.len(), 2);

        let main = &data.contexts[0];
        assert_eq!(main.tag.as_deref(), Some("title"));
        assert_eq!(NavigationMode::from(main.mode), NavigationMode::Vertical);
        assert_eq!(BackPolicy::from(main.back), BackPolicy::TriggerItem);
        assert!(main.activate);
        assert!(main.follow_pointer);
        assert_eq!(main.step_delay, None);
        assert_eq!(
            main.items[0].action,
            ActionData::Callback {
                name: "start".into()
            }
        );
        assert_eq!(
            main.items[1].action,
            ActionData::Submenu {
                context: "opts".into()
            }
        );
        assert_eq!(main.items[2].action, ActionData::Widget);
        assert_eq!(main.items[2].priority(), OverridePriority::Fallback);
        assert_eq!(main.items[0].priority(), OverridePriority::Always);

        let opts = &data.contexts[1];
        assert_eq!(NavigationMode::from(opts.mode), NavigationMode::Grid);
        assert_eq!(opts.step_delay, Some(0.1));
        assert_eq!(opts.items[0].rect, Some([0.0, 0.0, 10.0, 10.0]));
        assert!(opts.items[1].ignore);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(MenuLayoutData::from_json("{ \"contexts\": 3 }").is_err());
    }
}
