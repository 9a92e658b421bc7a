use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration persisted to disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorConfigData {
    /// Orbit speed in radians per pixel of pointer motion
    #[serde(default = "default_orbit_sensitivity")]
    pub orbit_sensitivity: f32,

    /// Pan speed in world units per pixel at distance 1
    #[serde(default = "default_pan_sensitivity")]
    pub pan_sensitivity: f32,

    /// Zoom speed as a fraction of current distance per scroll line
    #[serde(default = "default_zoom_sensitivity")]
    pub zoom_sensitivity: f32,

    /// Closest the orbit camera may get to its target
    #[serde(default = "default_min_distance")]
    pub min_distance: f32,

    /// Farthest the orbit camera may get from its target
    #[serde(default = "default_max_distance")]
    pub max_distance: f32,
}

fn default_orbit_sensitivity() -> f32 {
    0.005
}

fn default_pan_sensitivity() -> f32 {
    0.0015
}

fn default_zoom_sensitivity() -> f32 {
    0.1
}

fn default_min_distance() -> f32 {
    1.0
}

fn default_max_distance() -> f32 {
    50.0
}

impl Default for EditorConfigData {
    fn default() -> Self {
        Self {
            orbit_sensitivity: default_orbit_sensitivity(),
            pan_sensitivity: default_pan_sensitivity(),
            zoom_sensitivity: default_zoom_sensitivity(),
            min_distance: default_min_distance(),
            max_distance: default_max_distance(),
        }
    }
}

/// Runtime configuration resource
#[derive(Resource)]
pub struct EditorConfig {
    /// The persisted configuration data
    pub data: EditorConfigData,
    /// Path to the config file
    pub config_path: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            data: EditorConfigData::default(),
            config_path: crate::paths::config_file(),
        }
    }
}

/// Load configuration from disk, falling back to defaults on any error.
/// A broken config file is not fatal; the reason is logged and defaults win.
fn load_config() -> EditorConfig {
    let config_path = crate::paths::config_file();

    let data = if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(data) => {
                    info!("Loaded config from {:?}", config_path);
                    data
                }
                Err(e) => {
                    warn!("Failed to parse config file, using defaults: {}", e);
                    EditorConfigData::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file, using defaults: {}", e);
                EditorConfigData::default()
            }
        }
    } else {
        info!("No config file found, using defaults");
        EditorConfigData::default()
    };

    EditorConfig { data, config_path }
}

/// Save configuration to disk
fn save_config(config: &EditorConfig) {
    match serde_json::to_string_pretty(&config.data) {
        Ok(json) => {
            if let Err(e) = std::fs::write(&config.config_path, json) {
                error!("Failed to save config: {}", e);
            } else {
                info!("Config saved to {:?}", config.config_path);
            }
        }
        Err(e) => {
            error!("Failed to serialize config: {}", e);
        }
    }
}

/// Startup system to load config from disk into the existing resource
fn load_config_system(mut config: ResMut<EditorConfig>) {
    *config = load_config();
}

/// Persist the config once on shutdown
fn save_config_on_exit(mut exit_events: MessageReader<AppExit>, config: Res<EditorConfig>) {
    if exit_events.read().next().is_some() {
        save_config(&config);
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EditorConfig>()
            .add_systems(Startup, load_config_system)
            .add_systems(Update, save_config_on_exit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_sane() {
        let data = EditorConfigData::default();
        assert!(data.orbit_sensitivity > 0.0);
        assert!(data.min_distance < data.max_distance);
    }

    #[test]
    fn test_roundtrip_through_json() {
        let data = EditorConfigData {
            orbit_sensitivity: 0.01,
            pan_sensitivity: 0.002,
            zoom_sensitivity: 0.2,
            min_distance: 2.0,
            max_distance: 80.0,
        };
        let json = serde_json::to_string(&data).unwrap();
        let back: EditorConfigData = serde_json::from_str(&json).unwrap();
        assert_eq!(back.orbit_sensitivity, 0.01);
        assert_eq!(back.max_distance, 80.0);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        // Older config files may be missing newer fields
        let back: EditorConfigData = serde_json::from_str(r#"{"orbit_sensitivity": 0.02}"#).unwrap();
        assert_eq!(back.orbit_sensitivity, 0.02);
        assert_eq!(back.max_distance, default_max_distance());
    }
}
