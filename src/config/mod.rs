//! Configuration management for the storefront

mod keys;

pub use keys::{Action, KeyBindings, key_to_string};

use crate::confirm::Labels;
use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Confirm button label used when a request does not set one
    #[serde(default = "default_confirm_text")]
    pub confirm_text: String,

    /// Cancel button label used when a request does not set one
    #[serde(default = "default_cancel_text")]
    pub cancel_text: String,

    /// Poll interval in milliseconds for the event loop
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Keybindings configuration
    #[serde(default)]
    pub keys: KeyBindings,
}

fn default_confirm_text() -> String {
    Labels::default().confirm_text
}

fn default_cancel_text() -> String {
    Labels::default().cancel_text
}

const fn default_poll_interval() -> u64 {
    100
}

impl Default for Config {
    fn default() -> Self {
        Self {
            confirm_text: default_confirm_text(),
            cancel_text: default_cancel_text(),
            poll_interval_ms: default_poll_interval(),
            keys: KeyBindings::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default keybindings are available
        config.keys.merge_defaults();
        debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        fs::write(path, self.to_json()?)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Serialize as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("storefront")
            .join("config.json")
    }

    /// Default labels for the confirmation coordinator
    #[must_use]
    pub fn labels(&self) -> Labels {
        Labels {
            confirm_text: self.confirm_text.clone(),
            cancel_text: self.cancel_text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.confirm_text, "OK");
        assert_eq!(config.cancel_text, "Cancel");
        assert_eq!(config.poll_interval_ms, 100);
        assert_eq!(config.keys, KeyBindings::default());
    }

    #[test]
    fn test_save_and_load() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");

        let config = Config {
            confirm_text: "Yes".to_string(),
            cancel_text: "No".to_string(),
            poll_interval_ms: 250,
            keys: KeyBindings::default(),
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_invalid_json_reports_path() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, "{ not json")?;

        let err = Config::load_from(&config_path)
            .err()
            .map(|e| e.to_string())
            .unwrap_or_default();
        assert!(err.contains("Failed to parse config"));
        Ok(())
    }

    #[test]
    fn test_serde_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"confirm_text": "Sure"}"#;
        let config: Config = serde_json::from_str(json)?;

        assert_eq!(config.confirm_text, "Sure");
        assert_eq!(config.cancel_text, "Cancel");
        assert_eq!(config.poll_interval_ms, 100);
        Ok(())
    }

    #[test]
    fn test_load_merges_default_keys() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(&config_path, r#"{"keys": {"bindings": {"x": "quit"}}}"#)?;

        let config = Config::load_from(&config_path)?;

        assert_eq!(config.keys.format_keys(Action::Quit), "x/q");
        assert_eq!(config.keys.primary_key(Action::Confirm), Some("y".to_string()));
        Ok(())
    }

    #[test]
    fn test_labels_follow_config() {
        let config = Config {
            confirm_text: "Go".to_string(),
            ..Config::default()
        };
        let labels = config.labels();
        assert_eq!(labels.confirm_text, "Go");
        assert_eq!(labels.cancel_text, "Cancel");
    }

    #[test]
    fn test_save_creates_parent_dirs() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let nested_path = temp_dir.path().join("deep/nested/dir/config.json");

        Config::default().save_to(&nested_path)?;

        assert!(nested_path.exists());
        Ok(())
    }

    #[test]
    fn test_default_path() {
        let config_path = Config::default_path();
        assert!(config_path.ends_with("storefront/config.json"));
    }
}
