// SPDX-License-Identifier: MPL-2.0
//! Caller-supplied configuration for a magnifier instance.

use super::length::DisplayLength;
use super::style::StyleOverrides;
use crate::media::ImageData;
use std::time::Duration;

/// Default preview scale factor.
pub const DEFAULT_MAGNIFICATION: f32 = 2.0;

/// Default lens size in logical pixels.
pub const DEFAULT_LENS_SIZE: f32 = 100.0;

/// Default gap between thumbnail and preview pane in logical pixels.
pub const DEFAULT_PREVIEW_OFFSET: f32 = 20.0;

/// Default duration of the scale transition.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(200);

/// Immutable input for one render of the magnifier.
///
/// The widget never mutates its options; the embedding application rebuilds
/// them when settings change.
#[derive(Debug, Clone)]
pub struct ZoomOptions {
    pub source: ImageData,
    pub alt_text: String,
    pub width: DisplayLength,
    pub height: DisplayLength,
    /// Scale factor of the preview. Values below 1 are not rejected.
    pub magnification: f32,
    pub lens_size: f32,
    pub show_lens: bool,
    pub transition_duration: Duration,
    pub preview_offset: f32,
    pub container_style: StyleOverrides,
    pub lens_style: StyleOverrides,
    pub preview_style: StyleOverrides,
}

impl ZoomOptions {
    #[must_use]
    pub fn new(source: ImageData, alt_text: impl Into<String>) -> Self {
        Self {
            source,
            alt_text: alt_text.into(),
            width: DisplayLength::full(),
            height: DisplayLength::full(),
            magnification: DEFAULT_MAGNIFICATION,
            lens_size: DEFAULT_LENS_SIZE,
            show_lens: true,
            transition_duration: DEFAULT_TRANSITION,
            preview_offset: DEFAULT_PREVIEW_OFFSET,
            container_style: StyleOverrides::default(),
            lens_style: StyleOverrides::default(),
            preview_style: StyleOverrides::default(),
        }
    }

    #[must_use]
    pub fn width(mut self, width: impl Into<DisplayLength>) -> Self {
        self.width = width.into();
        self
    }

    #[must_use]
    pub fn height(mut self, height: impl Into<DisplayLength>) -> Self {
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn magnification(mut self, magnification: f32) -> Self {
        self.magnification = magnification;
        self
    }

    #[must_use]
    pub fn lens_size(mut self, size: f32) -> Self {
        self.lens_size = size;
        self
    }

    #[must_use]
    pub fn show_lens(mut self, show: bool) -> Self {
        self.show_lens = show;
        self
    }

    /// Sets the transition duration in seconds. Negative or non-finite values
    /// disable the transition.
    #[must_use]
    pub fn transition_secs(mut self, seconds: f32) -> Self {
        self.transition_duration = Duration::try_from_secs_f32(seconds).unwrap_or(Duration::ZERO);
        self
    }

    #[must_use]
    pub fn preview_offset(mut self, offset: f32) -> Self {
        self.preview_offset = offset;
        self
    }

    #[must_use]
    pub fn container_style(mut self, overrides: StyleOverrides) -> Self {
        self.container_style = overrides;
        self
    }

    #[must_use]
    pub fn lens_style(mut self, overrides: StyleOverrides) -> Self {
        self.lens_style = overrides;
        self
    }

    #[must_use]
    pub fn preview_style(mut self, overrides: StyleOverrides) -> Self {
        self.preview_style = overrides;
        self
    }

    /// Label of the magnified copy.
    #[must_use]
    pub fn zoomed_alt_text(&self) -> String {
        format!("Zoomed {}", self.alt_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> ImageData {
        ImageData::from_rgba(1, 1, vec![255, 255, 255, 255])
    }

    #[test]
    fn defaults_follow_widget_contract() {
        let options = ZoomOptions::new(source(), "Product image");
        assert_eq!(options.width, DisplayLength::full());
        assert_eq!(options.height, DisplayLength::full());
        assert_eq!(options.magnification, DEFAULT_MAGNIFICATION);
        assert_eq!(options.lens_size, DEFAULT_LENS_SIZE);
        assert_eq!(options.preview_offset, DEFAULT_PREVIEW_OFFSET);
        assert_eq!(options.transition_duration, Duration::from_millis(200));
        assert!(options.show_lens);
        assert!(options.lens_style.is_empty());
    }

    #[test]
    fn zoomed_alt_text_is_derived() {
        let options = ZoomOptions::new(source(), "Product image");
        assert_eq!(options.zoomed_alt_text(), "Zoomed Product image");
    }

    #[test]
    fn invalid_transition_disables_it() {
        let options = ZoomOptions::new(source(), "x").transition_secs(-1.0);
        assert_eq!(options.transition_duration, Duration::ZERO);

        let options = ZoomOptions::new(source(), "x").transition_secs(0.5);
        assert_eq!(options.transition_duration, Duration::from_millis(500));
    }
}
