use directories::ProjectDirs;
use log::{error, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Application configuration persisted as TOML.
#[derive(Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct AppConfig {
    /// Directory the preset dialogs start in.
    pub last_preset_dir: Option<PathBuf>,
    /// Ask before resetting all adjustments.
    pub confirm_reset: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            last_preset_dir: None,
            confirm_reset: true,
        }
    }
}

fn get_config_path() -> Option<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("io", "gradenode", "grade_node") {
        let config_dir = proj_dirs.config_dir();
        if let Err(e) = fs::create_dir_all(config_dir) {
            warn!("Failed to create config directory: {}", e);
            return None;
        }
        return Some(config_dir.join("app.toml"));
    }
    None
}

pub fn save_config(config: &AppConfig) {
    if let Some(path) = get_config_path() {
        match toml::to_string_pretty(config) {
            Ok(toml_str) => {
                if let Err(e) = fs::write(&path, toml_str) {
                    error!("Failed to write config file: {}", e);
                }
            }
            Err(e) => error!("Failed to serialize config: {}", e),
        }
    }
}

pub fn load_config() -> AppConfig {
    if let Some(path) = get_config_path() {
        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(toml_str) => match toml::from_str(&toml_str) {
                    Ok(config) => return config,
                    Err(e) => {
                        warn!("Failed to parse config file, using defaults: {}", e);
                    }
                },
                Err(e) => {
                    warn!("Failed to read config file, using defaults: {}", e);
                }
            }
        }
    }
    // Return default if file doesn't exist or on any error
    AppConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Domain: TOML round trip ──

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig {
            last_preset_dir: Some(PathBuf::from("/tmp/presets")),
            confirm_reset: false,
        };
        let text = toml::to_string_pretty(&config).unwrap();
        let loaded: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(loaded.last_preset_dir, config.last_preset_dir);
        assert_eq!(loaded.confirm_reset, false);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let loaded: AppConfig = toml::from_str("").unwrap();
        assert!(loaded.confirm_reset);
        assert!(loaded.last_preset_dir.is_none());
    }
}
