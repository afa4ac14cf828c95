// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the magnifier styles and the demo layout.
//!
//! Tokens come in small scales (palette, opacity, spacing, sizing,
//! typography, border, radius, shadow). Styles reference tokens rather than
//! literal values so the surfaces stay consistent with one another.
//!
//! ```
//! use iced_loupe::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let tint = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::WHITE
//! };
//! assert_eq!(spacing::MD, 16.0);
//! assert!(tint.a < 1.0);
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    /// Semi-transparent panels.
    pub const SURFACE: f32 = 0.95;
}

/// 8px baseline grid.
pub mod spacing {
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    pub const SETTINGS_PANEL_WIDTH: f32 = 320.0;
    /// Width of the unmagnified comparison image.
    pub const REGULAR_IMAGE_WIDTH: f32 = 224.0;
    pub const SLIDER_LABEL_WIDTH: f32 = 140.0;
    pub const SLIDER_VALUE_WIDTH: f32 = 56.0;
}

pub mod typography {
    pub const TITLE_LG: f32 = 24.0;
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY: f32 = 14.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE > 0.0 && opacity::OVERLAY_SUBTLE < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    assert!(
        sizing::SETTINGS_PANEL_WIDTH > sizing::SLIDER_LABEL_WIDTH + sizing::SLIDER_VALUE_WIDTH
    );

    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_scale_is_consistent() {
        assert_eq!(spacing::MD, spacing::XS * 2.0);
        assert_eq!(spacing::LG, spacing::MD * 1.5);
    }
}
