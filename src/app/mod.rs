// SPDX-License-Identifier: MPL-2.0
//! Application root state for the magnifier demo.
//!
//! The `App` owns the magnifier state, the decoded image and the settings
//! panel, and rebuilds the magnifier options whenever one of them changes.

pub mod config;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::error::Error;
use crate::media::{ImageData, ImageSource};
use crate::ui::settings;
use crate::ui::theming::ThemeMode;
use crate::ui::zoomable::{ZoomOptions, ZoomState};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

pub const WINDOW_DEFAULT_WIDTH: f32 = 1280.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;
pub const MIN_WINDOW_WIDTH: f32 = 720.0;
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Root Iced application state.
pub struct App {
    zoom: ZoomState,
    /// Options for the current image; `None` until the first decode succeeds.
    options: Option<ZoomOptions>,
    source: ImageSource,
    settings: settings::State,
    load_error: Option<Error>,
    config_warning: Option<String>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source)
            .field("phase", &self.zoom.phase())
            .field("has_image", &self.options.is_some())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            zoom: ZoomState::new(),
            options: None,
            source: ImageSource::Sample,
            settings: settings::State::default(),
            load_error: None,
            config_warning: None,
            theme_mode: ThemeMode::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || App::new(boot_state.borrow_mut().take().unwrap_or_default());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Reads the config and starts decoding the requested image.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_override(flags.config_dir);
        let (config, config_warning) = config::load();
        Self::with_config(&config, config_warning, flags.image_path, flags.magnification)
    }

    fn with_config(
        config: &config::Config,
        config_warning: Option<String>,
        image_path: Option<String>,
        magnification: Option<f32>,
    ) -> (Self, Task<Message>) {
        let mut settings = settings::State::from_config(&config.zoom);
        if let Some(magnification) = magnification {
            settings = settings.with_magnification(magnification);
        }

        let source = image_path
            .map(PathBuf::from)
            .map_or(ImageSource::Sample, ImageSource::File);

        let mut app = App {
            source,
            settings,
            config_warning,
            theme_mode: config.general.theme_mode,
            ..Self::default()
        };
        let task = app.start_loading();
        (app, task)
    }

    fn title(&self) -> String {
        format!("{} - Image Zoom Demo", self.source.label())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        match &self.options {
            Some(options) => self.zoom.subscription(options).map(Message::Zoom),
            None => Subscription::none(),
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Zoom(zoom_message) => {
                update::handle_zoom_message(&mut self.zoom, zoom_message);
                Task::none()
            }
            Message::Settings(settings_message) => {
                match self.settings.update(settings_message) {
                    settings::Event::None => self.rebuild_options(),
                    settings::Event::ReloadRequested => return self.start_loading(),
                }
                Task::none()
            }
            Message::ImageLoaded(result) => {
                match update::handle_image_loaded(&mut self.zoom, &self.source, result) {
                    Ok(image) => {
                        self.load_error = None;
                        self.options = Some(self.build_options(image));
                    }
                    Err(err) => self.load_error = Some(err),
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            zoom: &self.zoom,
            options: self.options.as_ref(),
            source: &self.source,
            settings: &self.settings,
            load_error: self.load_error.as_ref(),
            config_warning: self.config_warning.as_deref(),
        })
    }

    fn start_loading(&mut self) -> Task<Message> {
        update::handle_zoom_message(&mut self.zoom, crate::ui::zoomable::Message::SourceChanged);
        update::load_image_task(self.source.clone())
    }

    fn build_options(&self, image: ImageData) -> ZoomOptions {
        self.settings
            .apply(ZoomOptions::new(image, self.source.label()))
    }

    /// Re-applies the settings to the current image, keeping hover state.
    fn rebuild_options(&mut self) {
        if let Some(options) = self.options.take() {
            self.options = Some(self.build_options(options.source));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::sample_image;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::ui::zoomable::{self, LoadState, Phase, PointerPosition};

    fn app_with_sample() -> App {
        let (mut app, _task) = App::with_config(&config::Config::default(), None, None, None);
        let _ = app.update(Message::ImageLoaded(Ok(sample_image())));
        app
    }

    #[test]
    fn starts_loading_the_sample_without_a_path() {
        let (app, _task) = App::with_config(&config::Config::default(), None, None, None);
        assert_eq!(app.source, ImageSource::Sample);
        assert_eq!(app.zoom.load_state(), LoadState::Loading);
        assert!(app.options.is_none());
    }

    #[test]
    fn image_path_selects_file_source() {
        let (app, _task) = App::with_config(
            &config::Config::default(),
            None,
            Some("photo.png".to_string()),
            None,
        );
        assert_eq!(app.source, ImageSource::File(PathBuf::from("photo.png")));
        assert_eq!(app.title(), "photo.png - Image Zoom Demo");
    }

    #[test]
    fn cli_magnification_overrides_config() {
        let (app, _task) = App::with_config(&config::Config::default(), None, None, Some(5.0));
        assert_abs_diff_eq!(app.settings.magnification(), 5.0);
    }

    #[test]
    fn loaded_image_builds_options() {
        let app = app_with_sample();
        assert_eq!(app.zoom.load_state(), LoadState::Loaded);
        let options = app.options.as_ref().expect("options after load");
        assert_eq!(options.alt_text, ImageSource::Sample.label());
        assert!(app.load_error.is_none());
    }

    #[test]
    fn failed_load_records_error() {
        let (mut app, _task) = App::with_config(&config::Config::default(), None, None, None);
        let _ = app.update(Message::ImageLoaded(Err(Error::Image("corrupt".into()))));
        assert_eq!(app.zoom.load_state(), LoadState::Failed);
        assert!(matches!(app.load_error, Some(Error::Image(_))));
    }

    #[test]
    fn settings_change_keeps_hover_state() {
        let mut app = app_with_sample();
        let _ = app.update(Message::Zoom(zoomable::Message::PointerEntered(
            PointerPosition::CENTER,
        )));
        assert_eq!(app.zoom.phase(), Phase::Active);

        let _ = app.update(Message::Settings(settings::Message::MagnificationChanged(
            6.0,
        )));
        assert_eq!(app.zoom.phase(), Phase::Active);
        assert_abs_diff_eq!(
            app.options.as_ref().map_or(0.0, |o| o.magnification),
            6.0
        );
    }

    #[test]
    fn reload_returns_to_loading() {
        let mut app = app_with_sample();
        let _ = app.update(Message::Settings(settings::Message::ReloadPressed));
        assert_eq!(app.zoom.load_state(), LoadState::Loading);
        assert!(app.options.is_some());
    }
}
