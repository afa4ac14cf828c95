// SPDX-License-Identifier: MPL-2.0
//! Visual styling for the thumbnail frame, lens and preview pane.

use iced::widget::container;
use iced::{Background, Border, Color, Shadow};

/// Resolved style of one magnifier surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayStyle {
    pub border_color: Color,
    pub border_width: f32,
    pub border_radius: f32,
    pub background: Option<Color>,
    pub shadow: Shadow,
}

impl OverlayStyle {
    /// Converts to a container style for surfaces rendered as widgets.
    #[must_use]
    pub fn container(&self) -> container::Style {
        container::Style {
            background: self.background.map(Background::Color),
            border: Border {
                color: self.border_color,
                width: self.border_width,
                radius: self.border_radius.into(),
            },
            shadow: self.shadow,
            ..Default::default()
        }
    }
}

/// Caller-supplied overrides. Unset fields keep the default.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StyleOverrides {
    pub border_color: Option<Color>,
    pub border_width: Option<f32>,
    pub border_radius: Option<f32>,
    pub background: Option<Color>,
    pub shadow: Option<Shadow>,
}

impl StyleOverrides {
    #[must_use]
    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    #[must_use]
    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    #[must_use]
    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    #[must_use]
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    #[must_use]
    pub fn shadow(mut self, shadow: Shadow) -> Self {
        self.shadow = Some(shadow);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Applies `overrides` on top of `defaults`. Overrides win field by field.
#[must_use]
pub fn merge(defaults: OverlayStyle, overrides: &StyleOverrides) -> OverlayStyle {
    OverlayStyle {
        border_color: overrides.border_color.unwrap_or(defaults.border_color),
        border_width: overrides.border_width.unwrap_or(defaults.border_width),
        border_radius: overrides.border_radius.unwrap_or(defaults.border_radius),
        background: overrides.background.or(defaults.background),
        shadow: overrides.shadow.unwrap_or(defaults.shadow),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styles::zoom;

    #[test]
    fn empty_overrides_keep_defaults() {
        let defaults = zoom::preview();
        assert_eq!(merge(defaults, &StyleOverrides::default()), defaults);
        assert!(StyleOverrides::default().is_empty());
    }

    #[test]
    fn override_wins_per_field() {
        let defaults = zoom::lens();
        let overrides = StyleOverrides::default()
            .border_color(Color::from_rgb(1.0, 0.0, 0.0))
            .border_radius(0.0);

        let merged = merge(defaults, &overrides);

        assert_eq!(merged.border_color, Color::from_rgb(1.0, 0.0, 0.0));
        assert_eq!(merged.border_radius, 0.0);
        assert_eq!(merged.border_width, defaults.border_width);
        assert_eq!(merged.shadow, defaults.shadow);
    }

    #[test]
    fn container_style_carries_border_and_shadow() {
        let style = zoom::preview();
        let converted = style.container();
        assert_eq!(converted.border.width, style.border_width);
        assert_eq!(converted.border.color, style.border_color);
        assert_eq!(converted.shadow, style.shadow);
    }
}
