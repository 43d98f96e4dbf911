// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language
//! - `[preferences]` - Display, accessibility and pipeline preferences ([`Settings`])
//! - `[search]` - Ranking service endpoint and timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `PHOTON_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use photon::config::{self, SettingsPatch};
//!
//! let (mut config, _warning) = config::load();
//! config.preferences.apply(&SettingsPatch {
//!     high_visibility_mode: Some(true),
//!     ..SettingsPatch::default()
//! });
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::ui::DynamicTypeScale;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Color space used when exporting edited photos.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ExportColorSpace {
    #[serde(rename = "sRGB")]
    Srgb,
    #[default]
    P3,
    #[serde(rename = "AdobeRGB")]
    AdobeRgb,
}

// =============================================================================
// Settings
// =============================================================================

/// Display, accessibility and pipeline preferences.
///
/// The fields are independent of each other and of photo data; any subset
/// can be replaced at once with [`Settings::apply`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Larger grid cells and high-contrast chrome.
    #[serde(default)]
    pub high_visibility_mode: bool,

    /// Bit-perfect pipeline: no automatic enhancement on any photo.
    #[serde(default)]
    pub pro_mode: bool,

    /// Accessibility text scale (1–5).
    #[serde(
        default,
        serialize_with = "serialize_type_scale",
        deserialize_with = "deserialize_type_scale"
    )]
    pub dynamic_type_scale: DynamicTypeScale,

    /// Apply automatic enhancement to ProRAW captures.
    #[serde(default)]
    pub auto_enhance_pro_raw: bool,

    #[serde(default)]
    pub export_color_space: ExportColorSpace,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_visibility_mode: false,
            pro_mode: false,
            dynamic_type_scale: DynamicTypeScale::default(),
            auto_enhance_pro_raw: false,
            export_color_space: ExportColorSpace::default(),
        }
    }
}

/// Partial update for [`Settings`]; `None` fields are left untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub high_visibility_mode: Option<bool>,
    pub pro_mode: Option<bool>,
    pub dynamic_type_scale: Option<u8>,
    pub auto_enhance_pro_raw: Option<bool>,
    pub export_color_space: Option<ExportColorSpace>,
}

impl SettingsPatch {
    /// Returns `true` if the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Settings {
    /// Merges a patch into these settings.
    pub fn apply(&mut self, patch: &SettingsPatch) {
        if let Some(value) = patch.high_visibility_mode {
            self.high_visibility_mode = value;
        }
        if let Some(value) = patch.pro_mode {
            self.pro_mode = value;
        }
        if let Some(value) = patch.dynamic_type_scale {
            self.dynamic_type_scale = DynamicTypeScale::new(value);
        }
        if let Some(value) = patch.auto_enhance_pro_raw {
            self.auto_enhance_pro_raw = value;
        }
        if let Some(value) = patch.export_color_space {
            self.export_color_space = value;
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Delegated ranking service settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchConfig {
    /// Ranking service URL. Without one, searches always use the local index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Time budget for one delegated call, in seconds.
    #[serde(
        default = "default_search_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub timeout_secs: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_search_timeout_secs(),
        }
    }
}

impl SearchConfig {
    /// Returns the delegate timeout, clamped to the supported range.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        let secs = self
            .timeout_secs
            .unwrap_or(DEFAULT_SEARCH_TIMEOUT_SECS)
            .clamp(MIN_SEARCH_TIMEOUT_SECS, MAX_SEARCH_TIMEOUT_SECS);
        Duration::from_secs(secs)
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
    pub preferences: Settings,

    #[serde(default)]
    pub search: SearchConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

// Option-returning to match the `skip_serializing_if` field type.
#[allow(clippy::unnecessary_wraps)]
fn default_search_timeout_secs() -> Option<u64> {
    Some(DEFAULT_SEARCH_TIMEOUT_SECS)
}

fn serialize_type_scale<S>(
    scale: &DynamicTypeScale,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_u8(scale.value())
}

fn deserialize_type_scale<'de, D>(deserializer: D) -> std::result::Result<DynamicTypeScale, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = u8::deserialize(deserializer)?;
    Ok(DynamicTypeScale::new(raw))
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
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
/// default config with a warning key explaining what went wrong.
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
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created, the config
/// cannot be serialized, or the file cannot be written.
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
