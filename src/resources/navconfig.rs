//! Navigation configuration resource.
//!
//! Manages navigation settings loaded from an INI configuration file.
//! Provides defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [navigation]
//! step_delay = 0.2
//! axis_threshold = 0.5
//! override_cooldown = never
//! auto_refresh = false
//!
//! [cursor]
//! inactive_alpha = 0.6
//! transition_time = 0.2
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use std::str::FromStr;

use crate::components::focuscontext::DEFAULT_STEP_DELAY;
use crate::resources::navinput::DEFAULT_AXIS_THRESHOLD;

const DEFAULT_AUTO_REFRESH: bool = false;
const DEFAULT_INACTIVE_ALPHA: f32 = 0.6;
const DEFAULT_TRANSITION_TIME: f32 = 0.2;
const DEFAULT_CONFIG_PATH: &str = "./navigation.ini";

/// Which override jumps start the step cooldown.
///
/// Mode moves always start it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OverrideCooldown {
    /// Override jumps never start the cooldown.
    #[default]
    Never,
    /// Only fallback overrides start it.
    FallbackOnly,
    /// Every override jump starts it.
    Always,
}

impl FromStr for OverrideCooldown {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(OverrideCooldown::Never),
            "fallback" | "fallback_only" => Ok(OverrideCooldown::FallbackOnly),
            "always" => Ok(OverrideCooldown::Always),
            other => Err(format!("unknown override_cooldown '{}'", other)),
        }
    }
}

impl OverrideCooldown {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverrideCooldown::Never => "never",
            OverrideCooldown::FallbackOnly => "fallback",
            OverrideCooldown::Always => "always",
        }
    }

    /// Whether an override jump of the given kind starts the cooldown.
    pub fn applies(&self, fallback: bool) -> bool {
        match self {
            OverrideCooldown::Never => false,
            OverrideCooldown::FallbackOnly => fallback,
            OverrideCooldown::Always => true,
        }
    }
}

/// Navigation configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct NavigationConfig {
    /// Step delay for contexts that do not set their own.
    pub step_delay: f32,
    /// Axis dead zone.
    pub axis_threshold: f32,
    pub override_cooldown: OverrideCooldown,
    /// Rebuild every auto-detect context on the stack each tick.
    pub auto_refresh: bool,
    /// Cursor opacity of an active context that is not on top.
    pub inactive_alpha: f32,
    /// Step delay reported when no context is active.
    pub transition_time: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl NavigationConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
            override_cooldown: OverrideCooldown::default(),
            auto_refresh: DEFAULT_AUTO_REFRESH,
            inactive_alpha: DEFAULT_INACTIVE_ALPHA,
            transition_time: DEFAULT_TRANSITION_TIME,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config)
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config)
    }

    fn apply_ini(&mut self, config: &Ini) -> Result<(), String> {
        // [navigation] section
        if let Some(delay) = config.getfloat("navigation", "step_delay").ok().flatten() {
            self.step_delay = (delay as f32).max(0.0);
        }
        if let Some(threshold) = config
            .getfloat("navigation", "axis_threshold")
            .ok()
            .flatten()
        {
            self.axis_threshold = (threshold as f32).clamp(0.0, 1.0);
        }
        if let Some(policy) = config.get("navigation", "override_cooldown") {
            self.override_cooldown = policy.parse()?;
        }
        if let Some(refresh) = config.getbool("navigation", "auto_refresh").ok().flatten() {
            self.auto_refresh = refresh;
        }

        // [cursor] section
        if let Some(alpha) = config.getfloat("cursor", "inactive_alpha").ok().flatten() {
            self.inactive_alpha = (alpha as f32).clamp(0.0, 1.0);
        }
        if let Some(time) = config.getfloat("cursor", "transition_time").ok().flatten() {
            self.transition_time = (time as f32).max(0.0);
        }

        info!(
            "Loaded navigation config: step_delay={}, axis_threshold={}, override_cooldown={}, auto_refresh={}, inactive_alpha={}",
            self.step_delay,
            self.axis_threshold,
            self.override_cooldown.as_str(),
            self.auto_refresh,
            self.inactive_alpha
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [navigation] section
        config.set("navigation", "step_delay", Some(self.step_delay.to_string()));
        config.set(
            "navigation",
            "axis_threshold",
            Some(self.axis_threshold.to_string()),
        );
        config.set(
            "navigation",
            "override_cooldown",
            Some(self.override_cooldown.as_str().to_string()),
        );
        config.set(
            "navigation",
            "auto_refresh",
            Some(self.auto_refresh.to_string()),
        );

        // [cursor] section
        config.set(
            "cursor",
            "inactive_alpha",
            Some(self.inactive_alpha.to_string()),
        );
        config.set(
            "cursor",
            "transition_time",
            Some(self.transition_time.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved navigation config to {:?}", self.config_path);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = NavigationConfig::new();
        assert_eq!(config.step_delay, 0.2);
        assert_eq!(config.axis_threshold, 0.5);
        assert_eq!(config.override_cooldown, OverrideCooldown::Never);
        assert!(!config.auto_refresh);
        assert_eq!(config.inactive_alpha, 0.6);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut config = NavigationConfig::new();
        config
            .load_from_str(
                "[navigation]\nstep_delay = 0.35\noverride_cooldown = fallback\n\n[cursor]\ninactive_alpha = 0.25\n",
            )
            .unwrap();
        assert_eq!(config.step_delay, 0.35);
        assert_eq!(config.override_cooldown, OverrideCooldown::FallbackOnly);
        assert_eq!(config.inactive_alpha, 0.25);
        assert_eq!(config.axis_threshold, 0.5);
        assert!(!config.auto_refresh);
    }

    #[test]
    fn test_bad_policy_is_reported() {
        let mut config = NavigationConfig::new();
        let err = config
            .load_from_str("[navigation]\noverride_cooldown = sometimes\n")
            .unwrap_err();
        assert!(err.contains("sometimes"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let mut config = NavigationConfig::with_path("/nonexistent/focusnav/navigation.ini");
        assert!(config.load_from_file().is_err());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join("focusnav_config_test.ini");
        let mut saved = NavigationConfig::with_path(&path);
        saved.step_delay = 0.5;
        saved.auto_refresh = true;
        saved.override_cooldown = OverrideCooldown::Always;
        saved.save_to_file().unwrap();

        let mut loaded = NavigationConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        assert_eq!(loaded.step_delay, 0.5);
        assert!(loaded.auto_refresh);
        assert_eq!(loaded.override_cooldown, OverrideCooldown::Always);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_override_cooldown_applies() {
        assert!(!OverrideCooldown::Never.applies(true));
        assert!(OverrideCooldown::FallbackOnly.applies(true));
        assert!(!OverrideCooldown::FallbackOnly.applies(false));
        assert!(OverrideCooldown::Always.applies(false));
    }
}
