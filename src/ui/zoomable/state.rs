// SPDX-License-Identifier: MPL-2.0
//! Hover and load state for a single magnifier instance.
//!
//! The widget is `Idle` until the pointer enters the thumbnail, `Hovering`
//! while the pointer is inside but the image has not been confirmed decoded,
//! and `Active` once both hold. Overlays are drawn only in `Active`.

use super::pointer::PointerPosition;
use std::time::{Duration, Instant};

/// Decode status of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    #[must_use]
    pub fn is_loaded(self) -> bool {
        matches!(self, LoadState::Loaded)
    }
}

/// Visibility phase derived from hover and load state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Hovering,
    Active,
}

/// Scale animation started when the widget becomes active.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransition {
    started_at: Instant,
}

impl ScaleTransition {
    #[must_use]
    pub fn start(now: Instant) -> Self {
        Self { started_at: now }
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Linear progress in `0..=1`. A zero duration completes immediately.
    #[must_use]
    pub fn progress(&self, now: Instant, duration: Duration) -> f32 {
        if duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
    }

    /// Interpolates from no magnification to `target`.
    #[must_use]
    pub fn scale(&self, now: Instant, duration: Duration, target: f32) -> f32 {
        1.0 + (target - 1.0) * self.progress(now, duration)
    }

    #[must_use]
    pub fn is_running(&self, now: Instant, duration: Duration) -> bool {
        self.progress(now, duration) < 1.0
    }
}

/// Per-instance record, mutated only through its own event handlers.
///
/// Every handler returns whether observable state changed, so redundant events
/// can be dropped without re-rendering.
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    hovered: bool,
    load: LoadState,
    position: PointerPosition,
    transition: Option<ScaleTransition>,
}

impl ZoomState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match (self.hovered, self.load.is_loaded()) {
            (false, _) => Phase::Idle,
            (true, false) => Phase::Hovering,
            (true, true) => Phase::Active,
        }
    }

    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Last known pointer position. Kept after the pointer leaves, but only
    /// consulted while `Active`.
    #[must_use]
    pub fn position(&self) -> PointerPosition {
        self.position
    }

    #[must_use]
    pub fn transition(&self) -> Option<ScaleTransition> {
        self.transition
    }

    pub fn pointer_entered(&mut self, position: PointerPosition, now: Instant) -> bool {
        let was_hovered = self.hovered;
        let moved = self.position != position;
        let previous = self.phase();

        self.hovered = true;
        self.position = position;
        self.sync_transition(previous, now);

        !was_hovered || moved
    }

    /// Ignored unless the pointer is over the thumbnail.
    pub fn pointer_moved(&mut self, position: PointerPosition) -> bool {
        if !self.hovered || self.position == position {
            return false;
        }
        self.position = position;
        true
    }

    pub fn pointer_left(&mut self, now: Instant) -> bool {
        if !self.hovered {
            return false;
        }
        let previous = self.phase();
        self.hovered = false;
        self.sync_transition(previous, now);
        true
    }

    pub fn image_loaded(&mut self, now: Instant) -> bool {
        self.set_load(LoadState::Loaded, now)
    }

    /// Clears the loaded flag so no preview of a broken image is shown.
    pub fn image_failed(&mut self, now: Instant) -> bool {
        self.set_load(LoadState::Failed, now)
    }

    /// A new source is being decoded; nothing is magnified until it succeeds.
    pub fn source_changed(&mut self, now: Instant) -> bool {
        self.set_load(LoadState::Loading, now)
    }

    /// Returns to the freshly mounted state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn set_load(&mut self, load: LoadState, now: Instant) -> bool {
        if self.load == load {
            return false;
        }
        let previous = self.phase();
        self.load = load;
        self.sync_transition(previous, now);
        true
    }

    fn sync_transition(&mut self, previous: Phase, now: Instant) {
        match (previous, self.phase()) {
            (Phase::Active, Phase::Active) => {}
            (_, Phase::Active) => self.transition = Some(ScaleTransition::start(now)),
            _ => self.transition = None,
        }
    }
}
