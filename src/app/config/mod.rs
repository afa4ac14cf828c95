// SPDX-License-Identifier: MPL-2.0
//! Demo preferences read from a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode
//! - `[zoom]` - Initial magnifier settings (magnification, lens, preview, size)
//!
//! Every field is optional. Numeric values are clamped to the settings panel
//! ranges defined in [`defaults`].
//!
//! # Examples
//!
//! ```no_run
//! use iced_loupe::app::config;
//!
//! let (config, warning) = config::load();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//! println!("magnification: {}", config.zoom.magnification());
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use crate::ui::zoomable::DisplayLength;
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
    /// Application theme mode (light, dark, or system).
    #[serde(default, deserialize_with = "deserialize_theme_mode")]
    pub theme_mode: ThemeMode,
}

/// Initial magnifier settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ZoomConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnification: Option<f32>,

    /// Lens size in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lens_size: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_lens: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transition_duration_secs: Option<f32>,

    /// Gap between thumbnail and preview in logical pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_offset: Option<f32>,

    /// Thumbnail width, as pixels (`400`) or a length string (`"50%"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<DisplayLength>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<DisplayLength>,
}

impl ZoomConfig {
    #[must_use]
    pub fn magnification(&self) -> f32 {
        clamp_or(
            self.magnification,
            DEFAULT_MAGNIFICATION,
            MIN_MAGNIFICATION,
            MAX_MAGNIFICATION,
        )
    }

    #[must_use]
    pub fn lens_size(&self) -> f32 {
        clamp_or(self.lens_size, DEFAULT_LENS_SIZE, MIN_LENS_SIZE, MAX_LENS_SIZE)
    }

    #[must_use]
    pub fn show_lens(&self) -> bool {
        self.show_lens.unwrap_or(DEFAULT_SHOW_LENS)
    }

    #[must_use]
    pub fn transition_secs(&self) -> f32 {
        clamp_or(
            self.transition_duration_secs,
            DEFAULT_TRANSITION_SECS,
            MIN_TRANSITION_SECS,
            MAX_TRANSITION_SECS,
        )
    }

    #[must_use]
    pub fn preview_offset(&self) -> f32 {
        clamp_or(
            self.preview_offset,
            DEFAULT_PREVIEW_OFFSET,
            MIN_PREVIEW_OFFSET,
            MAX_PREVIEW_OFFSET,
        )
    }

    #[must_use]
    pub fn width(&self) -> DisplayLength {
        self.width
            .clone()
            .unwrap_or(DisplayLength::Pixels(DEFAULT_DISPLAY_SIZE))
    }

    #[must_use]
    pub fn height(&self) -> DisplayLength {
        self.height
            .clone()
            .unwrap_or(DisplayLength::Pixels(DEFAULT_DISPLAY_SIZE))
    }
}

/// Clamps a configured value to `[min, max]`, using `default` when unset or
/// not a number.
#[must_use]
pub fn clamp_or(value: Option<f32>, default: f32, min: f32, max: f32) -> f32 {
    match value {
        Some(value) if value.is_finite() => value.clamp(min, max),
        _ => default,
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub zoom: ZoomConfig,
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    ThemeMode::parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid theme_mode: {raw}")))
}

// =============================================================================
// Load Functions
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    let Some(path) = config_path_with_override(base_dir) else {
        return (Config::default(), None);
    };
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return (Config::default(), None);
    }

    match load_from_path(&path) {
        Ok(config) => {
            log::info!("loaded config from {}", path.display());
            (config, None)
        }
        Err(err) => {
            let warning = format!("Ignoring {}: {err}", path.display());
            log::warn!("{warning}");
            (Config::default(), Some(warning))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Tests
// =============================================================================
