// SPDX-License-Identifier: MPL-2.0
//! Overlay geometry derived from the pointer position and options.
//!
//! Positions are kept as [`LengthExpr`]s so percentage-sized thumbnails stay
//! symbolic until layout. The `resolve` methods turn them into rectangles
//! once the container size is known.

use super::length::{DisplayLength, LengthExpr};
use super::options::ZoomOptions;
use super::pointer::PointerPosition;
use iced::{Point, Rectangle, Size};
use std::time::Duration;

/// Box that the thumbnail's and preview's relative lengths resolve against.
///
/// The thumbnail, the gap and the preview sit side by side in `container`.
/// A relative width therefore shares what is left after the gap with the
/// preview, so `100%` makes thumbnail and preview together fill the row.
/// Absolute widths resolve against `container` unchanged.
#[must_use]
pub fn layout_basis(options: &ZoomOptions, container: Rectangle) -> Rectangle {
    if options.width.to_expr().is_absolute() {
        return container;
    }
    let shared = container.width - options.preview_offset.max(0.0);
    Rectangle {
        width: (shared / 2.0).max(0.0),
        ..container
    }
}

/// Returns the thumbnail box inside `container`.
///
/// Unresolvable lengths fill the [`layout_basis`] on that axis.
#[must_use]
pub fn thumbnail_bounds(options: &ZoomOptions, container: Rectangle) -> Rectangle {
    let basis = layout_basis(options, container);
    Rectangle {
        x: basis.x,
        y: basis.y,
        width: options.width.resolve_or_fill(basis.width).max(0.0),
        height: options.height.resolve_or_fill(basis.height).max(0.0),
    }
}

/// Rectangle covered by an image of `aspect_ratio` fitted into `bounds` the
/// way CSS `object-fit: cover` does, anchored at `position`.
///
/// The result keeps the image's aspect ratio and spans `bounds` on both axes.
/// Degenerate ratios or boxes return `bounds` unchanged.
#[must_use]
pub fn cover_rect(bounds: Rectangle, aspect_ratio: f32, position: PointerPosition) -> Rectangle {
    if !aspect_ratio.is_finite()
        || aspect_ratio <= 0.0
        || bounds.width <= 0.0
        || bounds.height <= 0.0
    {
        return bounds;
    }

    let size = if aspect_ratio > bounds.width / bounds.height {
        Size::new(bounds.height * aspect_ratio, bounds.height)
    } else {
        Size::new(bounds.width, bounds.width / aspect_ratio)
    };
    let (fx, fy) = position.as_fraction();

    Rectangle::new(
        Point::new(
            bounds.x + (bounds.width - size.width) * fx,
            bounds.y + (bounds.height - size.height) * fy,
        ),
        size,
    )
}

/// Lens square centered on the pointer.
#[derive(Debug, Clone, PartialEq)]
pub struct LensGeometry {
    pub center: PointerPosition,
    pub size: f32,
    /// `calc(x% - size/2)`, relative to the thumbnail's left edge.
    pub left: LengthExpr,
    /// `calc(y% - size/2)`, relative to the thumbnail's top edge.
    pub top: LengthExpr,
}

impl LensGeometry {
    #[must_use]
    pub fn new(center: PointerPosition, size: f32) -> Self {
        let half = LengthExpr::Px(size / 2.0);
        Self {
            center,
            size,
            left: LengthExpr::Difference(
                Box::new(LengthExpr::Percent(center.x())),
                Box::new(half.clone()),
            ),
            top: LengthExpr::Difference(
                Box::new(LengthExpr::Percent(center.y())),
                Box::new(half),
            ),
        }
    }

    /// Absolute lens rectangle over `thumbnail`. May extend past its edges.
    #[must_use]
    pub fn resolve(&self, thumbnail: Rectangle) -> Rectangle {
        let left = self.left.resolve(thumbnail.width).unwrap_or_default();
        let top = self.top.resolve(thumbnail.height).unwrap_or_default();
        Rectangle::new(
            Point::new(thumbnail.x + left, thumbnail.y + top),
            Size::new(self.size, self.size),
        )
    }
}

/// Magnified copy of the source drawn inside the preview pane.
///
/// Mirrors a CSS `transform: scale(m)` with `transform-origin` and
/// `object-position` both at the pointer percentages: the image point under
/// the pointer stays fixed while everything else grows away from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnifiedImage {
    pub origin: PointerPosition,
    pub object_position: PointerPosition,
    pub scale: f32,
    pub transition: Duration,
}

impl MagnifiedImage {
    /// Point of the scaled image aligned with the same point of the pane.
    #[must_use]
    pub fn alignment_point(&self) -> PointerPosition {
        self.origin
    }

    #[must_use]
    pub fn transform_css(&self) -> String {
        format!("scale({})", super::length::format_number(self.scale))
    }

    #[must_use]
    pub fn origin_css(&self) -> String {
        percent_pair(self.origin)
    }

    /// Rectangle the whole image occupies inside `pane` once cover-fitted at
    /// `object_position` and scaled by `scale` about `origin`. Only its
    /// intersection with `pane` is visible.
    #[must_use]
    pub fn scaled_bounds(&self, pane: Rectangle, scale: f32, aspect_ratio: f32) -> Rectangle {
        let fitted = cover_rect(pane, aspect_ratio, self.object_position);
        let origin = self.origin.point_in(pane);
        Rectangle {
            x: origin.x + (fitted.x - origin.x) * scale,
            y: origin.y + (fitted.y - origin.y) * scale,
            width: fitted.width * scale,
            height: fitted.height * scale,
        }
    }
}

/// Pane beside the thumbnail holding the magnified image.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewGeometry {
    pub width: DisplayLength,
    pub height: DisplayLength,
    /// Thumbnail width plus the configured offset.
    pub left: LengthExpr,
    pub offset: f32,
    pub top: LengthExpr,
    pub image: MagnifiedImage,
}

impl PreviewGeometry {
    #[must_use]
    pub fn new(position: PointerPosition, options: &ZoomOptions) -> Self {
        Self {
            width: options.width.clone(),
            height: options.height.clone(),
            left: options.width.offset_by(options.preview_offset),
            offset: options.preview_offset,
            top: LengthExpr::Px(0.0),
            image: MagnifiedImage {
                origin: position,
                object_position: position,
                scale: options.magnification,
                transition: options.transition_duration,
            },
        }
    }

    /// Absolute pane rectangle, with relative lengths resolved against
    /// `basis` (see [`layout_basis`]).
    #[must_use]
    pub fn resolve(&self, basis: Rectangle) -> Rectangle {
        let width = self.width.resolve_or_fill(basis.width).max(0.0);
        let height = self.height.resolve_or_fill(basis.height).max(0.0);
        let left = self.left.resolve(basis.width).unwrap_or(width + self.offset);
        let top = self.top.resolve(basis.height).unwrap_or_default();

        Rectangle::new(
            Point::new(basis.x + left, basis.y + top),
            Size::new(width, height),
        )
    }
}

fn percent_pair(position: PointerPosition) -> String {
    format!(
        "{} {}",
        LengthExpr::Percent(position.x()),
        LengthExpr::Percent(position.y())
    )
}
