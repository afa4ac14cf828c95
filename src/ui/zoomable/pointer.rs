// SPDX-License-Identifier: MPL-2.0
//! Pointer position normalized to the thumbnail box.

use iced::{Point, Rectangle};

/// Lower bound of a normalized coordinate.
pub const MIN_PERCENT: f32 = 0.0;

/// Upper bound of a normalized coordinate.
pub const MAX_PERCENT: f32 = 100.0;

/// Pointer location as a percentage of the thumbnail's width and height.
///
/// Both coordinates are guaranteed to lie within `0..=100`, even when the
/// cursor sits outside the thumbnail (which happens transiently when events
/// are delivered late).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    x: f32,
    y: f32,
}

impl PointerPosition {
    /// Center of the thumbnail.
    pub const CENTER: Self = Self { x: 50.0, y: 50.0 };

    /// Creates a position from percentages, clamping each axis.
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x: clamp_percent(x),
            y: clamp_percent(y),
        }
    }

    /// Maps a cursor position to percentages of `bounds`.
    ///
    /// `cursor` and `bounds` must share a coordinate space.
    #[must_use]
    pub fn from_cursor(cursor: Point, bounds: Rectangle) -> Self {
        Self::new(
            (cursor.x - bounds.x) / bounds.width * 100.0,
            (cursor.y - bounds.y) / bounds.height * 100.0,
        )
    }

    #[must_use]
    pub fn x(self) -> f32 {
        self.x
    }

    #[must_use]
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns the position as fractions in `0..=1`.
    #[must_use]
    pub fn as_fraction(self) -> (f32, f32) {
        (self.x / 100.0, self.y / 100.0)
    }

    /// Returns the absolute point inside `bounds` that this position refers to.
    #[must_use]
    pub fn point_in(self, bounds: Rectangle) -> Point {
        let (fx, fy) = self.as_fraction();
        Point::new(bounds.x + fx * bounds.width, bounds.y + fy * bounds.height)
    }
}

/// Non-finite ratios (zero-sized boxes) collapse to the origin.
fn clamp_percent(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_PERCENT, MAX_PERCENT)
    } else {
        MIN_PERCENT
    }
}
