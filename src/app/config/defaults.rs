// SPDX-License-Identifier: MPL-2.0
//! Centralized default values and bounds for the demo settings.
//!
//! Bounds match the slider ranges of the settings panel; values read from
//! `settings.toml` are clamped to them.

use crate::ui::zoomable as widget;

// ==========================================================================
// Magnification
// ==========================================================================

pub const DEFAULT_MAGNIFICATION: f32 = widget::DEFAULT_MAGNIFICATION;

pub const MIN_MAGNIFICATION: f32 = 1.0;

pub const MAX_MAGNIFICATION: f32 = 8.0;

/// Slider step for magnification.
pub const MAGNIFICATION_STEP: f32 = 0.5;

// ==========================================================================
// Lens
// ==========================================================================

/// Default lens size (in logical pixels).
pub const DEFAULT_LENS_SIZE: f32 = widget::DEFAULT_LENS_SIZE;

pub const MIN_LENS_SIZE: f32 = 20.0;

pub const MAX_LENS_SIZE: f32 = 300.0;

pub const DEFAULT_SHOW_LENS: bool = true;

// ==========================================================================
// Preview
// ==========================================================================

/// Default gap between thumbnail and preview (in logical pixels).
pub const DEFAULT_PREVIEW_OFFSET: f32 = widget::DEFAULT_PREVIEW_OFFSET;

pub const MIN_PREVIEW_OFFSET: f32 = 0.0;

pub const MAX_PREVIEW_OFFSET: f32 = 100.0;

// ==========================================================================
// Transition
// ==========================================================================

/// Default scale transition (in seconds).
pub const DEFAULT_TRANSITION_SECS: f32 = widget::DEFAULT_TRANSITION.as_secs_f32();

pub const MIN_TRANSITION_SECS: f32 = 0.0;

pub const MAX_TRANSITION_SECS: f32 = 2.0;

pub const TRANSITION_STEP_SECS: f32 = 0.05;

// ==========================================================================
// Layout
// ==========================================================================

/// Thumbnail width and height of the demo magnifier (in logical pixels).
pub const DEFAULT_DISPLAY_SIZE: f32 = 400.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAGNIFICATION >= 1.0);
    assert!(MAX_MAGNIFICATION > MIN_MAGNIFICATION);
    assert!(DEFAULT_MAGNIFICATION >= MIN_MAGNIFICATION);
    assert!(DEFAULT_MAGNIFICATION <= MAX_MAGNIFICATION);
    assert!(MAGNIFICATION_STEP > 0.0);

    assert!(MIN_LENS_SIZE > 0.0);
    assert!(MAX_LENS_SIZE > MIN_LENS_SIZE);
    assert!(DEFAULT_LENS_SIZE >= MIN_LENS_SIZE);
    assert!(DEFAULT_LENS_SIZE <= MAX_LENS_SIZE);

    assert!(MIN_PREVIEW_OFFSET >= 0.0);
    assert!(MAX_PREVIEW_OFFSET > MIN_PREVIEW_OFFSET);
    assert!(DEFAULT_PREVIEW_OFFSET >= MIN_PREVIEW_OFFSET);
    assert!(DEFAULT_PREVIEW_OFFSET <= MAX_PREVIEW_OFFSET);

    assert!(MIN_TRANSITION_SECS >= 0.0);
    assert!(MAX_TRANSITION_SECS > MIN_TRANSITION_SECS);
    assert!(DEFAULT_TRANSITION_SECS >= MIN_TRANSITION_SECS);
    assert!(DEFAULT_TRANSITION_SECS <= MAX_TRANSITION_SECS);
    assert!(TRANSITION_STEP_SECS > 0.0);

    assert!(DEFAULT_DISPLAY_SIZE > MAX_LENS_SIZE);
};
