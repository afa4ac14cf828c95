// SPDX-License-Identifier: MPL-2.0
//! Iced integration for [`ZoomState`]: messages, update, view and
//! subscription.

use super::canvas::ZoomCanvas;
use super::length::DisplayLength;
use super::render::{self, Overlays};
use super::{Phase, PointerPosition, ZoomOptions, ZoomState};
use iced::widget::Canvas;
use iced::{Element, Length, Subscription};
use std::time::{Duration, Instant};

/// Redraw interval while the scale transition runs.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Events handled by a magnifier instance.
#[derive(Debug, Clone)]
pub enum Message {
    PointerEntered(PointerPosition),
    PointerMoved(PointerPosition),
    PointerLeft,
    /// The embedding application started decoding a new image.
    SourceChanged,
    ImageLoaded,
    ImageFailed,
    /// Animation frame while the scale transition runs. The preview scale is
    /// sampled at draw time, so a tick only requests a redraw.
    Tick(Instant),
}

impl ZoomState {
    /// Applies a message. Returns whether observable state changed.
    pub fn update(&mut self, message: Message) -> bool {
        let now = Instant::now();
        let previous = self.phase();

        let changed = match message {
            Message::PointerEntered(position) => self.pointer_entered(position, now),
            Message::PointerMoved(position) => self.pointer_moved(position),
            Message::PointerLeft => self.pointer_left(now),
            Message::SourceChanged => self.source_changed(now),
            Message::ImageLoaded => self.image_loaded(now),
            Message::ImageFailed => self.image_failed(now),
            Message::Tick(_) => self.phase() == Phase::Active && self.transition().is_some(),
        };

        let phase = self.phase();
        if phase != previous {
            log::debug!("magnifier phase {previous:?} -> {phase:?}");
        }
        changed
    }

    /// Overlays to draw right now.
    #[must_use]
    pub fn overlays(&self, options: &ZoomOptions) -> Option<Overlays> {
        render::compose(self, options)
    }

    /// Preview scale at `now`, accounting for the running transition.
    #[must_use]
    pub fn current_scale(&self, options: &ZoomOptions, now: Instant) -> f32 {
        match (self.phase(), self.transition()) {
            (Phase::Active, Some(transition)) => {
                transition.scale(now, options.transition_duration, options.magnification)
            }
            _ => options.magnification,
        }
    }

    pub fn view<'a>(&'a self, options: &'a ZoomOptions) -> Element<'a, Message> {
        Canvas::new(ZoomCanvas {
            options,
            state: self,
            overlays: self.overlays(options),
            scale: self.current_scale(options, Instant::now()),
        })
        .width(canvas_length(&options.width, Some(options.preview_offset)))
        .height(canvas_length(&options.height, None))
        .into()
    }

    /// Whether the preview scale still moves at `now`.
    #[must_use]
    pub fn is_animating(&self, options: &ZoomOptions, now: Instant) -> bool {
        self.phase() == Phase::Active
            && self
                .transition()
                .is_some_and(|transition| transition.is_running(now, options.transition_duration))
    }

    /// Ticks only while the transition is still running.
    pub fn subscription(&self, options: &ZoomOptions) -> Subscription<Message> {
        if self.is_animating(options, Instant::now()) {
            iced::time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

/// Canvas extent on one axis.
///
/// An absolute width reserves room for thumbnail, gap and preview side by
/// side. Relative widths fill the parent and resolve at draw time against the
/// layout basis it leaves each half.
fn canvas_length(length: &DisplayLength, preview_offset: Option<f32>) -> Length {
    let expr = length.to_expr();
    let Some(px) = expr.is_absolute().then(|| expr.resolve(0.0)).flatten() else {
        return Length::Fill;
    };
    let px = px.max(0.0);

    match preview_offset {
        Some(offset) => Length::Fixed(px * 2.0 + offset.max(0.0)),
        None => Length::Fixed(px),
    }
}
