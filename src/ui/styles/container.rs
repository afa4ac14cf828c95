// SPDX-License-Identifier: MPL-2.0
//! Container styles for the demo layout.

use crate::ui::design_tokens::{opacity, radius};
use crate::ui::zoomable::OverlayStyle;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Settings panel surface.
///
/// Derived from the active theme background so it reads well in both light
/// and dark modes.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Frame around the unmagnified comparison image, matching the magnifier's
/// thumbnail frame.
pub fn figure(style: OverlayStyle) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| style.container()
}
