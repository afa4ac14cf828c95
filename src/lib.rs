// SPDX-License-Identifier: MPL-2.0
//! `iced_loupe` is a hover-activated image magnifier for the Iced GUI
//! framework, plus a small demo application.
//!
//! The magnifier lives in [`ui::zoomable`]; the demo window, its settings
//! file and CLI live in [`app`].

pub mod app;
pub mod error;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
