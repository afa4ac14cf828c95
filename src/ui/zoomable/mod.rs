// SPDX-License-Identifier: MPL-2.0
//! Hover-activated image magnifier.
//!
//! `ZoomableImage` shows a thumbnail and, while the pointer rests on it and
//! the image is decoded, a lens over the thumbnail plus a magnified preview
//! pane beside it.
//!
//! Data flows one way: cursor sample → [`PointerPosition`] →
//! [`ZoomState`] → [`Overlays`] → canvas drawing. Everything up to the
//! overlays is pure and independent of the renderer.
//!
//! # Example
//!
//! ```no_run
//! use iced_loupe::media::ImageData;
//! use iced_loupe::ui::zoomable::{Message, ZoomOptions, ZoomState};
//!
//! let image = ImageData::from_rgba(1, 1, vec![255, 255, 255, 255]);
//! let options = ZoomOptions::new(image, "Product image")
//!     .width(400.0)
//!     .height(400.0)
//!     .magnification(3.0);
//!
//! let mut state = ZoomState::new();
//! state.update(Message::ImageLoaded);
//! let _element: iced::Element<'_, Message> = state.view(&options);
//! ```

pub mod canvas;
mod component;
pub mod geometry;
pub mod length;
mod options;
pub mod pointer;
pub mod render;
mod state;
mod style;

pub use component::Message;
pub use geometry::{LensGeometry, MagnifiedImage, PreviewGeometry};
pub use length::{DisplayLength, LengthExpr};
pub use options::{
    ZoomOptions, DEFAULT_LENS_SIZE, DEFAULT_MAGNIFICATION, DEFAULT_PREVIEW_OFFSET,
    DEFAULT_TRANSITION,
};
pub use pointer::PointerPosition;
pub use render::{compose, Overlays};
pub use state::{LoadState, Phase, ScaleTransition, ZoomState};
pub use style::{merge, OverlayStyle, StyleOverrides};

/// Per-instance widget state, owned by the embedding application.
pub type State = ZoomState;
