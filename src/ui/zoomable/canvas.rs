// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the magnifier and reports pointer activity.

use super::geometry::{cover_rect, layout_basis, thumbnail_bounds};
use super::render::{self, Overlays};
use super::{Message, OverlayStyle, PointerPosition, ZoomOptions, ZoomState};
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Fraction of the shadow color kept when approximating a blurred shadow.
const SHADOW_ALPHA: f32 = 0.3;

/// Canvas program for one magnifier instance.
///
/// Coordinates are local to the canvas: the thumbnail sits at the origin and
/// the preview pane to its right.
pub struct ZoomCanvas<'a> {
    pub options: &'a ZoomOptions,
    pub state: &'a ZoomState,
    pub overlays: Option<Overlays>,
    /// Current preview scale, which trails the magnification while the
    /// transition runs.
    pub scale: f32,
}

/// Rectangles drawn for one frame, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameLayout {
    pub thumbnail: Rectangle,
    /// Cover-fitted source, clipped to `thumbnail` when drawn.
    pub thumbnail_image: Rectangle,
    pub lens: Option<Rectangle>,
    pub preview: Option<PreviewLayout>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreviewLayout {
    pub pane: Rectangle,
    /// Magnified source, clipped to `pane` when drawn.
    pub image: Rectangle,
}

impl ZoomCanvas<'_> {
    /// Lays out the thumbnail and overlays for a canvas of `size`.
    #[must_use]
    pub fn layout(&self, size: Size) -> FrameLayout {
        let container = Rectangle::with_size(size);
        let thumbnail = thumbnail_bounds(self.options, container);
        let aspect_ratio = self.options.source.aspect_ratio();

        let lens = self
            .overlays
            .as_ref()
            .and_then(|overlays| overlays.lens.as_ref())
            .map(|lens| lens.resolve(thumbnail));
        let preview = self.overlays.as_ref().map(|overlays| {
            let pane = overlays
                .preview
                .resolve(layout_basis(self.options, container));
            PreviewLayout {
                pane,
                image: overlays
                    .preview
                    .image
                    .scaled_bounds(pane, self.scale, aspect_ratio),
            }
        });

        FrameLayout {
            thumbnail,
            thumbnail_image: cover_rect(thumbnail, aspect_ratio, PointerPosition::CENTER),
            lens,
            preview,
        }
    }
}

/// Translates a cursor sample into a pointer message.
///
/// Returns `None` for samples that would not change the state, so identical
/// moves are not even published.
#[must_use]
pub fn pointer_message(
    state: &ZoomState,
    cursor: Option<Point>,
    thumbnail: Rectangle,
) -> Option<Message> {
    let inside = cursor.filter(|point| thumbnail.contains(*point));

    match inside {
        Some(point) => {
            let position = PointerPosition::from_cursor(point, thumbnail);
            if !state.is_hovered() {
                Some(Message::PointerEntered(position))
            } else if state.position() != position {
                Some(Message::PointerMoved(position))
            } else {
                None
            }
        }
        None if state.is_hovered() => Some(Message::PointerLeft),
        None => None,
    }
}

impl canvas::Program<Message> for ZoomCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        match event {
            iced::Event::Mouse(
                mouse::Event::CursorMoved { .. }
                | mouse::Event::CursorEntered
                | mouse::Event::CursorLeft,
            ) => {
                let thumbnail = thumbnail_bounds(self.options, Rectangle::with_size(bounds.size()));
                pointer_message(self.state, cursor.position_in(bounds), thumbnail)
                    .map(Action::publish)
            }
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let layout = self.layout(bounds.size());
        let handle = &self.options.source.handle;

        // Clip coordinates are local to the clip region.
        frame.with_clip(layout.thumbnail, |frame| {
            let to_local = |rect| local_to(rect, layout.thumbnail);
            frame.draw_image(
                to_local(layout.thumbnail_image),
                canvas::Image::new(handle.clone()),
            );

            if let (Some(lens), Some(overlays)) = (layout.lens, &self.overlays) {
                draw_surface(frame, to_local(lens), &overlays.lens_style);
            }
        });
        stroke_border(
            &mut frame,
            layout.thumbnail,
            &render::thumbnail_style(self.options),
        );

        if let (Some(preview), Some(overlays)) = (layout.preview, &self.overlays) {
            let pane = preview.pane;
            let style = &overlays.preview_style;

            draw_shadow(&mut frame, pane, style);
            frame.with_clip(pane, |frame| {
                if let Some(background) = style.background {
                    frame.fill_rectangle(Point::ORIGIN, pane.size(), background);
                }
                frame.draw_image(
                    local_to(preview.image, pane),
                    canvas::Image::new(handle.clone()),
                );
            });
            stroke_border(&mut frame, pane, style);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let thumbnail = thumbnail_bounds(self.options, Rectangle::with_size(bounds.size()));
        match cursor.position_in(bounds) {
            Some(point) if thumbnail.contains(point) => mouse::Interaction::Crosshair,
            _ => mouse::Interaction::default(),
        }
    }
}

fn local_to(rect: Rectangle, clip: Rectangle) -> Rectangle {
    rect - Vector::new(clip.x, clip.y)
}

fn rounded(rect: Rectangle, style: &OverlayStyle) -> Path {
    Path::rounded_rectangle(rect.position(), rect.size(), style.border_radius.into())
}

fn draw_surface(frame: &mut Frame, rect: Rectangle, style: &OverlayStyle) {
    draw_shadow(frame, rect, style);
    let path = rounded(rect, style);
    if let Some(background) = style.background {
        frame.fill(&path, background);
    }
    stroke_path(frame, &path, style);
}

fn stroke_border(frame: &mut Frame, rect: Rectangle, style: &OverlayStyle) {
    stroke_path(frame, &rounded(rect, style), style);
}

fn stroke_path(frame: &mut Frame, path: &Path, style: &OverlayStyle) {
    if style.border_width > 0.0 {
        frame.stroke(
            path,
            Stroke::default()
                .with_width(style.border_width)
                .with_color(style.border_color),
        );
    }
}

fn draw_shadow(frame: &mut Frame, rect: Rectangle, style: &OverlayStyle) {
    let shadow = style.shadow;
    if shadow.blur_radius <= 0.0 {
        return;
    }

    let spread = shadow.blur_radius / 2.0;
    let shadow_rect = Rectangle {
        x: rect.x + shadow.offset.x - spread,
        y: rect.y + shadow.offset.y - spread,
        width: rect.width + spread * 2.0,
        height: rect.height + spread * 2.0,
    };
    let color = Color {
        a: shadow.color.a * SHADOW_ALPHA,
        ..shadow.color
    };
    frame.fill(
        &Path::rounded_rectangle(
            shadow_rect.position(),
            shadow_rect.size(),
            (style.border_radius + spread).into(),
        ),
        color,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, solid_image};
    use std::time::Instant;

    fn active_state(position: PointerPosition) -> ZoomState {
        let mut state = ZoomState::new();
        state.update(Message::ImageLoaded);
        state.update(Message::PointerEntered(position));
        state
    }

    fn layout(options: &ZoomOptions, state: &ZoomState, size: Size) -> FrameLayout {
        ZoomCanvas {
            options,
            state,
            overlays: render::compose(state, options),
            scale: options.magnification,
        }
        .layout(size)
    }

    fn assert_within(inner: Rectangle, outer: Rectangle) {
        let epsilon = 1e-3;
        assert!(inner.x >= outer.x - epsilon, "{inner:?} in {outer:?}");
        assert!(inner.y >= outer.y - epsilon, "{inner:?} in {outer:?}");
        assert!(
            inner.x + inner.width <= outer.x + outer.width + epsilon,
            "{inner:?} in {outer:?}"
        );
        assert!(
            inner.y + inner.height <= outer.y + outer.height + epsilon,
            "{inner:?} in {outer:?}"
        );
    }

    fn thumbnail() -> Rectangle {
        Rectangle::new(Point::ORIGIN, Size::new(400.0, 400.0))
    }

    #[test]
    fn entering_publishes_entered_with_position() {
        let state = ZoomState::new();
        let message = pointer_message(&state, Some(Point::new(200.0, 100.0)), thumbnail());
        assert!(matches!(
            message,
            Some(Message::PointerEntered(position)) if position == PointerPosition::new(50.0, 25.0)
        ));
    }

    #[test]
    fn moving_inside_publishes_moves_only_on_change() {
        let mut state = ZoomState::new();
        state.pointer_entered(PointerPosition::new(50.0, 25.0), Instant::now());

        assert!(pointer_message(&state, Some(Point::new(200.0, 100.0)), thumbnail()).is_none());
        assert!(matches!(
            pointer_message(&state, Some(Point::new(100.0, 100.0)), thumbnail()),
            Some(Message::PointerMoved(_))
        ));
    }

    #[test]
    fn leaving_publishes_left_once() {
        let mut state = ZoomState::new();
        state.pointer_entered(PointerPosition::CENTER, Instant::now());

        assert!(matches!(
            pointer_message(&state, Some(Point::new(500.0, 10.0)), thumbnail()),
            Some(Message::PointerLeft)
        ));
        assert!(matches!(
            pointer_message(&state, None, thumbnail()),
            Some(Message::PointerLeft)
        ));

        state.pointer_left(Instant::now());
        assert!(pointer_message(&state, None, thumbnail()).is_none());
    }

    #[test]
    fn default_options_keep_preview_on_canvas() {
        let options = ZoomOptions::new(solid_image(4, 4), "sample");
        let canvas = Rectangle::with_size(Size::new(800.0, 600.0));
        let layout = layout(&options, &active_state(PointerPosition::CENTER), canvas.size());

        let preview = layout.preview.expect("active widget has a preview");
        assert_within(layout.thumbnail, canvas);
        assert_within(preview.pane, canvas);
        assert_abs_diff_eq!(preview.pane.x, 410.0);
        assert_abs_diff_eq!(preview.pane.width, 390.0);
        assert!(layout.thumbnail.x + layout.thumbnail.width <= preview.pane.x);
    }

    #[test]
    fn pixel_options_fit_their_reserved_canvas() {
        let options = ZoomOptions::new(solid_image(4, 4), "sample")
            .width(400.0)
            .height(300.0)
            .preview_offset(20.0);
        let canvas = Rectangle::with_size(Size::new(820.0, 300.0));
        let layout = layout(&options, &active_state(PointerPosition::CENTER), canvas.size());

        let preview = layout.preview.expect("active widget has a preview");
        assert_within(preview.pane, canvas);
        assert_abs_diff_eq!(preview.pane.x, 420.0);
        assert_within(layout.lens.expect("lens enabled by default"), layout.thumbnail);
    }

    #[test]
    fn relative_options_keep_lens_and_preview_on_canvas() {
        let options = ZoomOptions::new(solid_image(4, 4), "sample")
            .width("50%")
            .height("100%")
            .lens_size(40.0);
        let canvas = Rectangle::with_size(Size::new(1000.0, 500.0));
        let layout = layout(&options, &active_state(PointerPosition::new(25.0, 75.0)), canvas.size());

        let lens = layout.lens.expect("lens enabled by default");
        assert_within(lens, layout.thumbnail);
        assert_within(preview_pane(&layout), canvas);
    }

    fn preview_pane(layout: &FrameLayout) -> Rectangle {
        layout.preview.expect("active widget has a preview").pane
    }

    #[test]
    fn non_square_source_is_cover_fitted() {
        let options = ZoomOptions::new(solid_image(8, 4), "wide")
            .width(200.0)
            .height(200.0);
        let layout = layout(
            &options,
            &active_state(PointerPosition::CENTER),
            Size::new(420.0, 200.0),
        );

        assert_abs_diff_eq!(layout.thumbnail_image.width, 400.0);
        assert_abs_diff_eq!(layout.thumbnail_image.height, 200.0);
        assert_abs_diff_eq!(layout.thumbnail_image.x, -100.0);

        let preview = layout.preview.expect("active widget has a preview");
        assert_abs_diff_eq!(
            preview.image.width / preview.image.height,
            2.0,
            epsilon = 1e-4
        );
        let center = preview.image.center();
        assert_abs_diff_eq!(center.x, preview.pane.center_x(), epsilon = 1e-3);
        assert_abs_diff_eq!(center.y, preview.pane.center_y(), epsilon = 1e-3);
    }

    #[test]
    fn idle_widget_draws_no_overlays() {
        let options = ZoomOptions::new(solid_image(4, 4), "sample");
        let layout = layout(&options, &ZoomState::new(), Size::new(800.0, 600.0));
        assert!(layout.lens.is_none());
        assert!(layout.preview.is_none());
    }
}
