//! Configuration loader plus strongly typed settings structures.
//!
//! Deserializes the TOML config we ship, resolves the data directory
//! (overridable via `--data-dir` or the `VITRINE_DIR` environment variable),
//! and falls back to the embedded defaults when user files are missing or
//! unusable.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embedded default configuration, compiled in at build time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable naming the data directory.
pub const DATA_DIR_ENV: &str = "VITRINE_DIR";

/// Top-level configuration object.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Seconds between theme re-evaluations.
    #[serde(default = "default_theme_check_secs")]
    pub theme_check_secs: u64,

    /// Scroll offset (rows) past which the header compacts.
    #[serde(default = "default_header_scroll_threshold")]
    pub header_scroll_threshold: u16,

    /// Rows moved per scroll key press / wheel notch.
    #[serde(default = "default_scroll_step")]
    pub scroll_step: u16,
}

fn default_theme_check_secs() -> u64 {
    60
}

fn default_header_scroll_threshold() -> u16 {
    crate::scrollspy::DEFAULT_SCROLL_THRESHOLD
}

fn default_scroll_step() -> u16 {
    3
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_check_secs: default_theme_check_secs(),
            header_scroll_threshold: default_header_scroll_threshold(),
            scroll_step: default_scroll_step(),
        }
    }
}

impl Config {
    /// Resolve the data directory: `$VITRINE_DIR` if set, else `~/.vitrine`.
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".vitrine"))
    }

    /// Path of the user config file inside the data directory.
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Path of the user catalog file inside the data directory.
    pub fn catalog_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("catalog.toml"))
    }

    /// Path of the user content file inside the data directory.
    pub fn content_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("content.toml"))
    }

    pub fn parse(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse config TOML")
    }

    /// The compiled-in default configuration.
    pub fn embedded() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG).context("Embedded default config is invalid")
    }

    /// Load configuration.
    ///
    /// An explicit `--config` path must parse; errors there are surfaced.
    /// Otherwise the user config is tried and any problem degrades to the
    /// embedded default with a logged warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file {:?}", path))?;
            return Self::parse(&text)
                .with_context(|| format!("Failed to parse config file {:?}", path));
        }

        let user_path = Self::config_path()?;
        if user_path.exists() {
            match fs::read_to_string(&user_path)
                .map_err(anyhow::Error::from)
                .and_then(|text| Self::parse(&text))
            {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!(
                        path = ?user_path,
                        error = %e,
                        "User config unusable, falling back to embedded default"
                    );
                }
            }
        }

        Self::embedded()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = Config::embedded().unwrap();
        assert_eq!(config.ui.theme_check_secs, 60);
        assert_eq!(config.ui.header_scroll_threshold, 20);
        assert_eq!(config.ui.scroll_step, 3);
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.ui.theme_check_secs, 60);
        assert_eq!(config.ui.header_scroll_threshold, 20);
    }

    #[test]
    fn test_partial_ui_section() {
        let config = Config::parse("[ui]\ntheme_check_secs = 5\n").unwrap();
        assert_eq!(config.ui.theme_check_secs, 5);
        assert_eq!(config.ui.scroll_step, 3);
    }
}
