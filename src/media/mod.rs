// SPDX-License-Identifier: MPL-2.0
//! Image sources and decoding.

pub mod image;

pub use image::{load_image, load_source, sample_image, ImageData, ImageSource};
