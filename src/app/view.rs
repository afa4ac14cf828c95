// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo window.

use super::Message;
use crate::error::Error;
use crate::media::ImageSource;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::settings;
use crate::ui::styles;
use crate::ui::zoomable::{LoadState, ZoomOptions, ZoomState};
use iced::widget::image::Image;
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{Element, Length};

const HINT: &str =
    "Hover over the image to see the zoom effect. The zoom preview will appear to the right.";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub zoom: &'a ZoomState,
    pub options: Option<&'a ZoomOptions>,
    pub source: &'a ImageSource,
    pub settings: &'a settings::State,
    pub load_error: Option<&'a Error>,
    pub config_warning: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut demo = Column::new()
        .spacing(spacing::LG)
        .push(text("Image Zoom Demo").size(typography::TITLE_LG))
        .push(section("Regular Image", regular_image(ctx.options)))
        .push(section("Zoomable Image", zoomable_image(ctx.zoom, ctx.options)))
        .push(text(HINT).size(typography::BODY))
        .push(text(status_line(ctx.zoom, ctx.source)).size(typography::CAPTION));

    if let Some(err) = ctx.load_error {
        demo = demo.push(error_text(err.to_string()));
    }
    if let Some(warning) = ctx.config_warning {
        demo = demo.push(error_text(warning.to_string()));
    }

    let layout = Row::new()
        .spacing(spacing::LG)
        .push(demo.width(Length::Fill))
        .push(ctx.settings.view().map(Message::Settings));

    Container::new(layout)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .push(text(title).size(typography::TITLE_SM))
        .push(content)
        .into()
}

/// Unmagnified image for comparison.
fn regular_image(options: Option<&ZoomOptions>) -> Element<'_, Message> {
    match options {
        Some(options) => container(
            Image::new(options.source.handle.clone())
                .width(Length::Fixed(sizing::REGULAR_IMAGE_WIDTH)),
        )
        .style(styles::container::figure(styles::zoom::thumbnail()))
        .into(),
        None => placeholder(),
    }
}

fn zoomable_image<'a>(zoom: &'a ZoomState, options: Option<&'a ZoomOptions>) -> Element<'a, Message> {
    match options {
        Some(options) => zoom.view(options).map(Message::Zoom),
        None => placeholder(),
    }
}

fn placeholder<'a>() -> Element<'a, Message> {
    text("Loading image...").size(typography::BODY).into()
}

fn error_text<'a>(message: String) -> Element<'a, Message> {
    Text::new(message)
        .size(typography::BODY)
        .color(palette::ERROR_500)
        .into()
}

/// One-line summary of the magnifier state.
pub(super) fn status_line(zoom: &ZoomState, source: &ImageSource) -> String {
    let load = match zoom.load_state() {
        LoadState::Loading => "loading",
        LoadState::Loaded => "loaded",
        LoadState::Failed => "failed",
    };
    let position = zoom.position();
    format!(
        "{} | image {load} | phase {:?} | pointer {:.0}%, {:.0}%",
        source.label(),
        zoom.phase(),
        position.x(),
        position.y()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_line_names_phase_and_load_state() {
        let zoom = ZoomState::new();
        let line = status_line(&zoom, &ImageSource::Sample);
        assert!(line.contains("loading"));
        assert!(line.contains("Idle"));
        assert!(line.contains("built-in sample"));
    }
}
