// SPDX-License-Identifier: MPL-2.0
//! This module loads the application's configuration from a `settings.toml`
//! file. The file is read once at startup and never written by the application.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[resize]` - Initial target size and encoder quality
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `IMAGE_RESIZER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use image_resizer::app::config;
//! use std::path::Path;
//!
//! let (config, _warning) = config::load();
//! println!("initial size: {}", config.resize.effective_size());
//!
//! let portable = config::load_from_path(Path::new("settings.toml")).expect("Failed to load config");
//! println!("portable quality: {}", portable.resize.effective_quality());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Resize and encoding settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ResizeConfig {
    /// Initial width & height of the resize target.
    #[serde(default = "default_size")]
    pub default_size: Option<u32>,

    /// Quality factor handed to lossy encoders.
    #[serde(default = "default_quality")]
    pub quality: Option<u8>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            default_size: default_size(),
            quality: default_quality(),
        }
    }
}

impl ResizeConfig {
    /// Initial target size, clamped into the supported range.
    #[must_use]
    pub fn effective_size(&self) -> u32 {
        self.default_size
            .unwrap_or(DEFAULT_RESIZE_SIZE)
            .clamp(MIN_RESIZE_SIZE, MAX_RESIZE_SIZE)
    }

    /// Encoder quality, clamped into the supported range.
    #[must_use]
    pub fn effective_quality(&self) -> u8 {
        self.quality
            .unwrap_or(DEFAULT_QUALITY)
            .clamp(MIN_QUALITY, MAX_QUALITY)
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub resize: ResizeConfig,
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_size() -> Option<u32> {
    Some(DEFAULT_RESIZE_SIZE)
}

fn default_quality() -> Option<u8> {
    Some(DEFAULT_QUALITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), "failed to load config: {err}");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}
