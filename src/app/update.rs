// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the demo root.

use super::Message;
use crate::error::Error;
use crate::media::{self, ImageData, ImageSource};
use crate::ui::zoomable::{self, ZoomState};
use iced::Task;

pub(super) fn handle_zoom_message(zoom: &mut ZoomState, message: zoomable::Message) {
    zoom.update(message);
}

/// Records the decode outcome in the magnifier state and hands the image
/// back to the caller.
pub(super) fn handle_image_loaded(
    zoom: &mut ZoomState,
    source: &ImageSource,
    result: Result<ImageData, Error>,
) -> Result<ImageData, Error> {
    match result {
        Ok(image) => {
            log::info!(
                "loaded {} ({}x{})",
                source.label(),
                image.width,
                image.height
            );
            zoom.update(zoomable::Message::ImageLoaded);
            Ok(image)
        }
        Err(err) => {
            log::warn!("failed to load {}: {err}", source.label());
            zoom.update(zoomable::Message::ImageFailed);
            Err(err)
        }
    }
}

/// Decodes `source` in the background.
pub(super) fn load_image_task(source: ImageSource) -> Task<Message> {
    log::debug!("loading {}", source.label());
    Task::perform(media::load_source(source), Message::ImageLoaded)
}
