// SPDX-License-Identifier: MPL-2.0
//! Maps widget state to the overlays that should be drawn.

use super::geometry::{LensGeometry, PreviewGeometry};
use super::options::ZoomOptions;
use super::state::{Phase, ZoomState};
use super::style::{merge, OverlayStyle};
use crate::ui::styles::zoom;

/// Everything needed to draw the lens and the preview for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlays {
    /// `None` when the lens is disabled.
    pub lens: Option<LensGeometry>,
    pub lens_style: OverlayStyle,
    pub preview: PreviewGeometry,
    pub preview_style: OverlayStyle,
    pub preview_alt_text: String,
}

/// Returns the overlays for the current state, or `None` unless `Active`.
#[must_use]
pub fn compose(state: &ZoomState, options: &ZoomOptions) -> Option<Overlays> {
    if state.phase() != Phase::Active {
        return None;
    }

    let position = state.position();
    let lens = options
        .show_lens
        .then(|| LensGeometry::new(position, options.lens_size));

    Some(Overlays {
        lens,
        lens_style: merge(zoom::lens(), &options.lens_style),
        preview: PreviewGeometry::new(position, options),
        preview_style: merge(zoom::preview(), &options.preview_style),
        preview_alt_text: options.zoomed_alt_text(),
    })
}

/// Style of the thumbnail frame, which is drawn in every phase.
#[must_use]
pub fn thumbnail_style(options: &ZoomOptions) -> OverlayStyle {
    merge(zoom::thumbnail(), &options.container_style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::solid_image;
    use crate::ui::zoomable::{PointerPosition, StyleOverrides};
    use iced::Color;
    use std::time::Instant;

    fn options() -> ZoomOptions {
        ZoomOptions::new(solid_image(4, 4), "sample")
    }

    fn active_at(position: PointerPosition) -> ZoomState {
        let mut state = ZoomState::new();
        state.image_loaded(Instant::now());
        state.pointer_entered(position, Instant::now());
        state
    }

    #[test]
    fn nothing_is_drawn_when_not_hovered() {
        let mut state = ZoomState::new();
        assert!(compose(&state, &options()).is_none());

        state.image_loaded(Instant::now());
        assert!(compose(&state, &options()).is_none());
    }

    #[test]
    fn nothing_is_drawn_before_load() {
        let mut state = ZoomState::new();
        state.pointer_entered(PointerPosition::CENTER, Instant::now());
        assert!(compose(&state, &options()).is_none());

        state.image_failed(Instant::now());
        assert!(compose(&state, &options()).is_none());
    }

    #[test]
    fn active_state_draws_both_overlays() {
        let state = active_at(PointerPosition::CENTER);
        let overlays = compose(&state, &options()).expect("active state has overlays");

        let lens = overlays.lens.expect("lens enabled by default");
        assert_eq!(lens.center, PointerPosition::CENTER);
        assert_eq!(overlays.preview.image.alignment_point(), PointerPosition::CENTER);
        assert_eq!(overlays.preview_alt_text, "Zoomed sample");
    }

    #[test]
    fn disabled_lens_keeps_preview() {
        let state = active_at(PointerPosition::CENTER);
        let overlays = compose(&state, &options().show_lens(false)).unwrap();
        assert!(overlays.lens.is_none());
        assert_eq!(overlays.preview.left.to_string(), "calc(100% + 20px)");
    }

    #[test]
    fn caller_styles_are_merged() {
        let red = Color::from_rgb(1.0, 0.0, 0.0);
        let options = options()
            .preview_style(StyleOverrides::default().border_color(red))
            .container_style(StyleOverrides::default().border_width(4.0));

        let overlays = compose(&active_at(PointerPosition::CENTER), &options).unwrap();
        assert_eq!(overlays.preview_style.border_color, red);
        assert_eq!(overlays.lens_style, zoom::lens());
        assert_eq!(thumbnail_style(&options).border_width, 4.0);
    }

    #[test]
    fn identical_state_composes_identically() {
        let mut state = active_at(PointerPosition::new(20.0, 40.0));
        let first = compose(&state, &options());
        state.pointer_moved(PointerPosition::new(20.0, 40.0));
        assert_eq!(compose(&state, &options()), first);
    }
}
