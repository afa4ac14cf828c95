// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo.

use crate::error::Error;
use crate::media::ImageData;
use crate::ui::settings;
use crate::ui::zoomable;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Zoom(zoomable::Message),
    Settings(settings::Message),
    ImageLoaded(Result<ImageData, Error>),
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional image path; the built-in sample is shown otherwise.
    pub image_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_LOUPE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional magnification taking precedence over the config file.
    pub magnification: Option<f32>,
}
