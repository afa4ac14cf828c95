// SPDX-License-Identifier: MPL-2.0
//! Image decoding for the magnifier.

use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::{GenericImageView, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// Edge length of the generated sample image.
pub const SAMPLE_SIZE: u32 = 512;

/// Cell size of the sample image's grid.
const SAMPLE_CELL: u32 = 32;

/// Decoded image plus the handle the renderer draws from.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Width divided by height, or 1 for degenerate images. Drives the
    /// cover fit when the image is drawn into a box of another shape.
    #[must_use]
    pub fn aspect_ratio(&self) -> f32 {
        if self.height == 0 {
            1.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let ratio = self.width as f32 / self.height as f32;
            ratio
        }
    }
}

/// Where the displayed image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    File(PathBuf),
    /// Procedurally generated image, so the demo runs without assets.
    Sample,
}

impl ImageSource {
    /// Short label for status lines.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            ImageSource::File(path) => path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| {
                    name.to_string_lossy().into_owned()
                }),
            ImageSource::Sample => "built-in sample".to_string(),
        }
    }
}

/// Decodes an image file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Image`] if
/// its contents cannot be decoded.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let img = image_rs::load_from_memory(&bytes)?;
    let (width, height) = img.dimensions();
    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Produces the sample image: a color gradient with a grid, so magnified
/// regions are easy to tell apart.
#[must_use]
pub fn sample_image() -> ImageData {
    let image = RgbaImage::from_fn(SAMPLE_SIZE, SAMPLE_SIZE, sample_pixel);
    ImageData::from_rgba(SAMPLE_SIZE, SAMPLE_SIZE, image.into_vec())
}

fn sample_pixel(x: u32, y: u32) -> Rgba<u8> {
    if x % SAMPLE_CELL == 0 || y % SAMPLE_CELL == 0 {
        return Rgba([255, 255, 255, 255]);
    }
    #[allow(clippy::cast_possible_truncation)]
    let channel = |value: u32| (value * 255 / (SAMPLE_SIZE - 1)) as u8;
    let checker = ((x / SAMPLE_CELL) + (y / SAMPLE_CELL)) % 2 == 0;
    let blue = if checker { 200 } else { 90 };
    Rgba([channel(x), channel(y), blue, 255])
}

/// Loads `source` off the UI thread.
///
/// # Errors
///
/// Same as [`load_image`]; a panicked decoder surfaces as [`Error::Io`].
pub async fn load_source(source: ImageSource) -> Result<ImageData> {
    tokio::task::spawn_blocking(move || match source {
        ImageSource::File(path) => load_image(path),
        ImageSource::Sample => Ok(sample_image()),
    })
    .await
    .map_err(|e| Error::Io(e.to_string()))?
}
