//! Top-level application configuration.
//!
//! Configuration is stored in `config.yaml` inside the state directory and
//! includes:
//! - List controller timing and paging
//! - Scroll effect thresholds and throttle windows
//! - Reveal animation stagger
//!
//! Every field has a default, so an empty or missing file is valid.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ListViewError, Result};
use crate::types::{THEME_KEY, VIEW_MODE_KEY};

/// Name of the configuration file inside a state directory
pub const CONFIG_FILE: &str = "config.yaml";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// List controller configuration
    #[serde(default)]
    pub list: ListConfig,

    /// Scroll effects configuration
    #[serde(default)]
    pub scroll: ScrollConfig,

    /// Reveal animation configuration
    #[serde(default)]
    pub reveal: RevealConfig,
}

/// List controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListConfig {
    /// Quiet window for search input in milliseconds (default: 300)
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,

    /// Items per page, 0 disables paging (default: 10)
    #[serde(default = "default_per_page")]
    pub per_page: usize,

    /// Storage key for the view mode
    #[serde(default = "default_view_mode_key")]
    pub view_mode_key: String,

    /// Storage key for the theme
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

fn default_search_debounce_ms() -> u64 {
    300
}

fn default_per_page() -> usize {
    10
}

fn default_view_mode_key() -> String {
    VIEW_MODE_KEY.to_string()
}

fn default_theme_key() -> String {
    THEME_KEY.to_string()
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            search_debounce_ms: default_search_debounce_ms(),
            per_page: default_per_page(),
            view_mode_key: default_view_mode_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl ListConfig {
    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Scroll effects configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Pixels scrolled before the header switches style (default: 50)
    #[serde(default = "default_header_threshold_px")]
    pub header_threshold_px: f64,

    /// Throttle window for the header effect in milliseconds (default: 100)
    #[serde(default = "default_header_throttle_ms")]
    pub header_throttle_ms: u64,

    /// Throttle window for the back-to-top button in milliseconds (default: 200)
    #[serde(default = "default_back_to_top_throttle_ms")]
    pub back_to_top_throttle_ms: u64,
}

fn default_header_threshold_px() -> f64 {
    50.0
}

fn default_header_throttle_ms() -> u64 {
    100
}

fn default_back_to_top_throttle_ms() -> u64 {
    200
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold_px: default_header_threshold_px(),
            header_throttle_ms: default_header_throttle_ms(),
            back_to_top_throttle_ms: default_back_to_top_throttle_ms(),
        }
    }
}

impl ScrollConfig {
    pub fn header_throttle(&self) -> Duration {
        Duration::from_millis(self.header_throttle_ms)
    }

    pub fn back_to_top_throttle(&self) -> Duration {
        Duration::from_millis(self.back_to_top_throttle_ms)
    }
}

/// Reveal animation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Delay between consecutive reveals in one batch, milliseconds (default: 50)
    #[serde(default = "default_animation_delay_ms")]
    pub animation_delay_ms: u64,
}

fn default_animation_delay_ms() -> u64 {
    50
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            animation_delay_ms: default_animation_delay_ms(),
        }
    }
}

impl RevealConfig {
    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }
}

impl Config {
    /// Get the path to the config file in a state directory
    pub fn config_path(state_dir: &Path) -> PathBuf {
        state_dir.join(CONFIG_FILE)
    }

    /// Load configuration from file, or return default if not found
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            ListViewError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config at {}: {}", path.display(), e),
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml_ng::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| {
                ListViewError::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create directory for config at {}: {}",
                        parent.display(),
                        e
                    ),
                ))
            })?;
        }

        let content = serde_yaml_ng::to_string(self)?;
        fs::write(path, content).map_err(|e| {
            ListViewError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to write config at {}: {}", path.display(), e),
            ))
        })?;

        Ok(())
    }

    /// Reject values that deserialize but make no sense
    pub fn validate(&self) -> Result<()> {
        if self.list.view_mode_key.trim().is_empty() {
            return Err(ListViewError::Config(
                "list.view_mode_key must not be empty".to_string(),
            ));
        }
        if self.list.theme_key.trim().is_empty() {
            return Err(ListViewError::Config(
                "list.theme_key must not be empty".to_string(),
            ));
        }
        if !self.scroll.header_threshold_px.is_finite() || self.scroll.header_threshold_px < 0.0 {
            return Err(ListViewError::Config(format!(
                "scroll.header_threshold_px must be a non-negative number, got {}",
                self.scroll.header_threshold_px
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.list.search_debounce(), Duration::from_millis(300));
        assert_eq!(config.list.per_page, 10);
        assert_eq!(config.list.view_mode_key, "view-mode");
        assert_eq!(config.scroll.header_threshold_px, 50.0);
        assert_eq!(config.scroll.header_throttle(), Duration::from_millis(100));
        assert_eq!(
            config.scroll.back_to_top_throttle(),
            Duration::from_millis(200)
        );
        assert_eq!(config.reveal.animation_delay(), Duration::from_millis(50));
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&Config::config_path(dir.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = Config::config_path(dir.path());
        fs::write(&path, "list:\n  per_page: 25\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.list.per_page, 25);
        assert_eq!(config.list.search_debounce_ms, 300);
        assert_eq!(config.scroll, ScrollConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);
        let mut config = Config::default();
        config.list.search_debounce_ms = 150;
        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = Config::config_path(dir.path());
        fs::write(&path, "list: [unclosed").unwrap();
        assert!(matches!(
            Config::load(&path),
            Err(ListViewError::YamlParse(_))
        ));
    }

    #[test]
    fn test_validation_rejects_empty_keys() {
        let dir = TempDir::new().unwrap();
        let path = Config::config_path(dir.path());
        fs::write(&path, "list:\n  view_mode_key: ''\n").unwrap();
        assert!(matches!(Config::load(&path), Err(ListViewError::Config(_))));
    }
}
