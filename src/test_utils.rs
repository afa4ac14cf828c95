// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests.
//!
//! Re-exports the `approx` assertion macro so float comparisons don't fall
//! back to `assert_eq!`.

pub use approx::assert_abs_diff_eq;

use crate::media::ImageData;

/// Opaque single-color image of the given size.
pub fn solid_image(width: u32, height: u32) -> ImageData {
    let pixels = (0..width * height)
        .flat_map(|_| [40, 80, 120, 255])
        .collect();
    ImageData::from_rgba(width, height, pixels)
}
