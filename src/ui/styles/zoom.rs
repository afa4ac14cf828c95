// SPDX-License-Identifier: MPL-2.0
//! Default styles for the magnifier surfaces.
//!
//! Callers adjust these through [`StyleOverrides`](crate::ui::zoomable::StyleOverrides).

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use crate::ui::zoomable::OverlayStyle;
use iced::Color;

/// Rounded, thinly bordered frame around the thumbnail.
#[must_use]
pub fn thumbnail() -> OverlayStyle {
    OverlayStyle {
        border_color: palette::GRAY_200,
        border_width: border::WIDTH_SM,
        border_radius: radius::MD,
        background: None,
        shadow: shadow::NONE,
    }
}

/// White-bordered square that follows the pointer over the thumbnail.
#[must_use]
pub fn lens() -> OverlayStyle {
    OverlayStyle {
        border_color: palette::WHITE,
        border_width: border::WIDTH_MD,
        border_radius: radius::MD,
        background: Some(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::WHITE
        }),
        shadow: shadow::LG,
    }
}

/// Pane beside the thumbnail showing the magnified image.
#[must_use]
pub fn preview() -> OverlayStyle {
    OverlayStyle {
        border_color: palette::WHITE,
        border_width: border::WIDTH_MD,
        border_radius: radius::MD,
        background: Some(palette::GRAY_900),
        shadow: shadow::LG,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlays_are_emphasised_over_thumbnail() {
        assert!(lens().border_width > thumbnail().border_width);
        assert!(preview().shadow.blur_radius > thumbnail().shadow.blur_radius);
    }
}
