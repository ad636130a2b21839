//! Application settings persistence
//!
//! Handles saving and loading user preferences. Only the theme flag and the
//! quote service address survive a restart; everything else in the UI is
//! ephemeral by design.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Network settings
    #[serde(default)]
    pub network: NetworkSettings,
}

/// Display-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Dark theme when true, light otherwise
    #[serde(default = "default_true")]
    pub dark_mode: bool,
}

/// Network-related settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSettings {
    /// Base address of the quote service
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_true() -> bool {
    true
}

fn default_api_base() -> String {
    "http://localhost:5000/api".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            display: DisplaySettings::default(),
            network: NetworkSettings::default(),
        }
    }
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "moodscape", "MoodScape")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| Self::load_from_file(&path).ok())
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("moodscape-settings-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn defaults_are_dark_with_local_api() {
        let settings = Settings::default();
        assert!(settings.display.dark_mode);
        assert_eq!(settings.network.api_base, "http://localhost:5000/api");
    }

    #[test]
    fn round_trips_through_disk() {
        let path = temp_path("roundtrip");
        let mut settings = Settings::default();
        settings.display.dark_mode = false;
        settings.network.api_base = "http://quotes.example:9000/api".to_string();
        settings.save_to_file(&path).expect("save settings");

        let loaded = Settings::load_from_file(&path).expect("load settings");
        assert!(!loaded.display.dark_mode);
        assert_eq!(loaded.network.api_base, "http://quotes.example:9000/api");
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = temp_path("malformed");
        std::fs::write(&path, "not json at all").expect("write file");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Parse(_))
        ));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_sections_fill_in_defaults() {
        let settings: Settings = serde_json::from_str("{}").expect("empty object parses");
        assert!(settings.display.dark_mode);
        assert_eq!(settings.network.api_base, "http://localhost:5000/api");
    }
}
