//! User settings persisted as JSON in the platform config directory.
//!
//! Every field has a default, so a missing or partial `settings.json` still
//! yields a usable configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub window_width: u32,
    pub window_height: u32,
    pub fullscreen: bool,
    /// Scales mouse drag deltas before they reach the camera.
    pub mouse_sensitivity: f32,
    /// Upper bound for the scroll-adjusted fly speed.
    pub max_fly_speed: f32,
    /// Directory searched for texture overrides.
    pub assets_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            fullscreen: false,
            mouse_sensitivity: 1.0,
            max_fly_speed: 5.0,
            assets_dir: PathBuf::from("assets"),
        }
    }
}

/// Path of the settings file, if the platform exposes a config directory.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("orbitscene3d").join("settings.json"))
}

impl Settings {
    /// Loads the settings file, falling back to defaults when it is missing
    /// or malformed.
    pub fn load() -> Self {
        let Some(path) = settings_path() else {
            log::warn!("No config directory on this platform, using default settings");
            return Self::default();
        };
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(_) => {
                log::info!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
        };
        match Self::parse(&contents) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    fn parse(contents: &str) -> Result<Self, String> {
        serde_json::from_str(contents).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_json() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        assert_eq!(Settings::parse(&json).unwrap(), settings);
    }

    #[test]
    fn partial_files_fill_in_defaults() {
        let settings = Settings::parse(r#"{"window_width": 1280}"#).unwrap();
        assert_eq!(settings.window_width, 1280);
        assert_eq!(settings.window_height, 600);
        assert_eq!(settings.max_fly_speed, 5.0);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let settings = Settings::parse(r#"{"fullscreen": true, "vsync": false}"#).unwrap();
        assert!(settings.fullscreen);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(Settings::parse("{").is_err());
        assert!(Settings::parse(r#"{"window_width": "wide"}"#).is_err());
    }
}
