// SPDX-License-Identifier: MPL-2.0
//! Demo settings panel: sliders and a toggle driving the magnifier options.

use crate::app::config::{self, ZoomConfig};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::zoomable::{DisplayLength, ZoomOptions};
use iced::widget::{button, container, slider, text, toggler, Column, Row, Space};
use iced::{Alignment, Element, Length};

/// Current slider values. Always within the ranges of [`config::defaults`].
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    magnification: f32,
    lens_size: f32,
    show_lens: bool,
    transition_secs: f32,
    preview_offset: f32,
    width: DisplayLength,
    height: DisplayLength,
}

#[derive(Debug, Clone)]
pub enum Message {
    MagnificationChanged(f32),
    LensSizeChanged(f32),
    ShowLensToggled(bool),
    TransitionChanged(f32),
    PreviewOffsetChanged(f32),
    ReloadPressed,
}

/// Outcome of a settings update that the parent must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    ReloadRequested,
}

impl Default for State {
    fn default() -> Self {
        Self::from_config(&ZoomConfig::default())
    }
}

impl State {
    #[must_use]
    pub fn from_config(zoom: &ZoomConfig) -> Self {
        Self {
            magnification: zoom.magnification(),
            lens_size: zoom.lens_size(),
            show_lens: zoom.show_lens(),
            transition_secs: zoom.transition_secs(),
            preview_offset: zoom.preview_offset(),
            width: zoom.width(),
            height: zoom.height(),
        }
    }

    /// Overrides the magnification, e.g. from the command line.
    #[must_use]
    pub fn with_magnification(mut self, magnification: f32) -> Self {
        self.set_magnification(magnification);
        self
    }

    #[must_use]
    pub fn magnification(&self) -> f32 {
        self.magnification
    }

    #[must_use]
    pub fn lens_size(&self) -> f32 {
        self.lens_size
    }

    #[must_use]
    pub fn show_lens(&self) -> bool {
        self.show_lens
    }

    #[must_use]
    pub fn transition_secs(&self) -> f32 {
        self.transition_secs
    }

    #[must_use]
    pub fn preview_offset(&self) -> f32 {
        self.preview_offset
    }

    fn set_magnification(&mut self, value: f32) {
        self.magnification = config::clamp_or(
            Some(value),
            self.magnification,
            config::MIN_MAGNIFICATION,
            config::MAX_MAGNIFICATION,
        );
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::MagnificationChanged(value) => self.set_magnification(value),
            Message::LensSizeChanged(value) => {
                self.lens_size = config::clamp_or(
                    Some(value),
                    self.lens_size,
                    config::MIN_LENS_SIZE,
                    config::MAX_LENS_SIZE,
                );
            }
            Message::ShowLensToggled(show) => self.show_lens = show,
            Message::TransitionChanged(value) => {
                self.transition_secs = config::clamp_or(
                    Some(value),
                    self.transition_secs,
                    config::MIN_TRANSITION_SECS,
                    config::MAX_TRANSITION_SECS,
                );
            }
            Message::PreviewOffsetChanged(value) => {
                self.preview_offset = config::clamp_or(
                    Some(value),
                    self.preview_offset,
                    config::MIN_PREVIEW_OFFSET,
                    config::MAX_PREVIEW_OFFSET,
                );
            }
            Message::ReloadPressed => return Event::ReloadRequested,
        }
        Event::None
    }

    /// Copies the slider values onto `options`.
    #[must_use]
    pub fn apply(&self, options: ZoomOptions) -> ZoomOptions {
        options
            .width(self.width.clone())
            .height(self.height.clone())
            .magnification(self.magnification)
            .lens_size(self.lens_size)
            .show_lens(self.show_lens)
            .transition_secs(self.transition_secs)
            .preview_offset(self.preview_offset)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let magnification = labeled_slider(
            "Magnification",
            format!("{}x", format_decimal(self.magnification)),
            slider(
                config::MIN_MAGNIFICATION..=config::MAX_MAGNIFICATION,
                self.magnification,
                Message::MagnificationChanged,
            )
            .step(config::MAGNIFICATION_STEP),
        );

        let lens_size = labeled_slider(
            "Lens size",
            format!("{:.0}px", self.lens_size),
            slider(
                config::MIN_LENS_SIZE..=config::MAX_LENS_SIZE,
                self.lens_size,
                Message::LensSizeChanged,
            )
            .step(1.0),
        );

        let preview_offset = labeled_slider(
            "Preview offset",
            format!("{:.0}px", self.preview_offset),
            slider(
                config::MIN_PREVIEW_OFFSET..=config::MAX_PREVIEW_OFFSET,
                self.preview_offset,
                Message::PreviewOffsetChanged,
            )
            .step(1.0),
        );

        let transition = labeled_slider(
            "Transition",
            format!("{:.2}s", self.transition_secs),
            slider(
                config::MIN_TRANSITION_SECS..=config::MAX_TRANSITION_SECS,
                self.transition_secs,
                Message::TransitionChanged,
            )
            .step(config::TRANSITION_STEP_SECS),
        );

        let lens_toggle = Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(text("Show lens").size(typography::BODY))
            .push(Space::new().width(Length::Fill))
            .push(toggler(self.show_lens).on_toggle(Message::ShowLensToggled));

        let reload = button(text("Reload image").size(typography::BODY))
            .padding(spacing::XS)
            .width(Length::Fill)
            .on_press(Message::ReloadPressed);

        container(
            Column::new()
                .spacing(spacing::SM)
                .push(text("Settings").size(typography::TITLE_SM))
                .push(magnification)
                .push(lens_size)
                .push(preview_offset)
                .push(transition)
                .push(lens_toggle)
                .push(reload),
        )
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::SETTINGS_PANEL_WIDTH))
        .style(styles::container::panel)
        .into()
    }
}

/// Label, slider and current value on one row.
fn labeled_slider<'a>(
    label: &'a str,
    value: String,
    control: impl Into<Element<'a, Message>>,
) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(
            text(label)
                .size(typography::BODY)
                .width(Length::Fixed(sizing::SLIDER_LABEL_WIDTH)),
        )
        .push(control)
        .push(
            text(value)
                .size(typography::CAPTION)
                .width(Length::Fixed(sizing::SLIDER_VALUE_WIDTH)),
        )
        .into()
}

/// One decimal, trailing ".0" dropped.
fn format_decimal(value: f32) -> String {
    let formatted = format!("{value:.1}");
    formatted
        .strip_suffix(".0")
        .map(str::to_owned)
        .unwrap_or(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::ImageData;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn defaults_come_from_config() {
        let state = State::default();
        assert_abs_diff_eq!(state.magnification(), config::DEFAULT_MAGNIFICATION);
        assert_abs_diff_eq!(state.lens_size(), config::DEFAULT_LENS_SIZE);
        assert!(state.show_lens());
    }

    #[test]
    fn default_settings_keep_widget_defaults() {
        let source = || ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let widget = ZoomOptions::new(source(), "sample");
        let applied = State::default().apply(ZoomOptions::new(source(), "sample"));

        assert_abs_diff_eq!(applied.magnification, widget.magnification);
        assert_abs_diff_eq!(applied.lens_size, widget.lens_size);
        assert_abs_diff_eq!(applied.preview_offset, widget.preview_offset);
        assert_abs_diff_eq!(
            applied.transition_duration.as_secs_f32(),
            widget.transition_duration.as_secs_f32(),
            epsilon = 1e-6
        );
    }

    #[test]
    fn slider_values_are_clamped() {
        let mut state = State::default();
        assert_eq!(state.update(Message::MagnificationChanged(12.0)), Event::None);
        assert_abs_diff_eq!(state.magnification(), config::MAX_MAGNIFICATION);

        state.update(Message::LensSizeChanged(1.0));
        assert_abs_diff_eq!(state.lens_size(), config::MIN_LENS_SIZE);

        state.update(Message::TransitionChanged(f32::NAN));
        assert_abs_diff_eq!(state.transition_secs(), config::DEFAULT_TRANSITION_SECS);
    }

    #[test]
    fn reload_is_forwarded_to_parent() {
        let mut state = State::default();
        assert_eq!(state.update(Message::ReloadPressed), Event::ReloadRequested);
    }

    #[test]
    fn apply_copies_values_onto_options() {
        let mut state = State::default().with_magnification(4.0);
        state.update(Message::ShowLensToggled(false));
        state.update(Message::PreviewOffsetChanged(35.0));

        let options = state.apply(ZoomOptions::new(
            ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]),
            "sample",
        ));
        assert_abs_diff_eq!(options.magnification, 4.0);
        assert_abs_diff_eq!(options.preview_offset, 35.0);
        assert!(!options.show_lens);
        assert_eq!(
            options.width,
            DisplayLength::Pixels(config::DEFAULT_DISPLAY_SIZE)
        );
    }

    #[test]
    fn decimals_drop_trailing_zero() {
        assert_eq!(format_decimal(2.0), "2");
        assert_eq!(format_decimal(2.5), "2.5");
    }
}
