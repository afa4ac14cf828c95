// SPDX-License-Identifier: MPL-2.0
//! User interface: the magnifier widget, its styles and the demo settings
//! panel.

pub mod design_tokens;
pub mod settings;
pub mod styles;
pub mod theming;
pub mod zoomable;
