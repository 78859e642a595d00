// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[gallery]` - Asset directory and grid column cap
//! - `[effects]` - Cursor dot and glow
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()` with explicit path
//! 2. Pass `--config-dir` or set `SEQUESTERED_ATELIER_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use sequestered_atelier::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//!
//! let columns = config.gallery.max_columns();
//! assert!((1..=3).contains(&columns));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Gallery grid settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GalleryConfig {
    /// Directory that web-root style image references resolve against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<PathBuf>,

    /// Upper bound on grid columns for wide windows.
    #[serde(
        default = "default_max_columns",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_columns: Option<u8>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            max_columns: default_max_columns(),
        }
    }
}

impl GalleryConfig {
    /// Column cap clamped to the supported range.
    #[must_use]
    pub fn max_columns(&self) -> u8 {
        self.max_columns
            .unwrap_or(DEFAULT_MAX_COLUMNS)
            .clamp(MIN_COLUMNS, MAX_COLUMNS)
    }
}

/// Cursor-following decorative effects.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EffectsConfig {
    /// Draw the cursor dot and glow.
    #[serde(default = "default_enabled", skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Cursor dot radius in logical pixels.
    #[serde(
        default = "default_cursor_dot_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub cursor_dot_radius: Option<f32>,

    /// Glow radius in logical pixels.
    #[serde(
        default = "default_glow_radius",
        skip_serializing_if = "Option::is_none"
    )]
    pub glow_radius: Option<f32>,
}

impl Default for EffectsConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            cursor_dot_radius: default_cursor_dot_radius(),
            glow_radius: default_glow_radius(),
        }
    }
}

impl EffectsConfig {
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.enabled.unwrap_or(DEFAULT_EFFECTS_ENABLED)
    }

    /// Dot radius clamped to the supported range. Non-finite values fall
    /// back to the default.
    #[must_use]
    pub fn cursor_dot_radius(&self) -> f32 {
        self.cursor_dot_radius
            .filter(|radius| radius.is_finite())
            .unwrap_or(DEFAULT_CURSOR_DOT_RADIUS)
            .clamp(MIN_CURSOR_DOT_RADIUS, MAX_CURSOR_DOT_RADIUS)
    }

    /// Glow radius clamped to the supported range.
    #[must_use]
    pub fn glow_radius(&self) -> f32 {
        self.glow_radius
            .filter(|radius| radius.is_finite())
            .unwrap_or(DEFAULT_GLOW_RADIUS)
            .clamp(MIN_GLOW_RADIUS, MAX_GLOW_RADIUS)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub effects: EffectsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_max_columns() -> Option<u8> {
    Some(DEFAULT_MAX_COLUMNS)
}

fn default_enabled() -> Option<bool> {
    Some(DEFAULT_EFFECTS_ENABLED)
}

fn default_cursor_dot_radius() -> Option<f32> {
    Some(DEFAULT_CURSOR_DOT_RADIUS)
}

fn default_glow_radius() -> Option<f32> {
    Some(DEFAULT_GLOW_RADIUS)
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

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some("warning-config-load-error".to_string()),
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

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
