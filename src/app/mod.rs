// SPDX-License-Identifier: MPL-2.0
//! Application root state and startup.
//!
//! The `App` struct wires together localization, preferences and the gallery
//! screen, and kicks off image resolution for every catalog record at boot.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::gallery::{self, source};
use crate::i18n::fluent::I18n;
use crate::ui::gallery::{self as gallery_ui, Selection};
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    gallery: gallery_ui::State,
    theme: Theme,
    window_size: Size,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", self.i18n.current_locale())
            .field("selection", &self.gallery.selection())
            .field("window_size", &self.window_size)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 860;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    let icon = crate::icon::load_window_icon();

    window::Settings {
        size: default_window_size(),
        min_size: Some(Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon,
        ..window::Settings::default()
    }
}

fn default_window_size() -> Size {
    Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery_ui::State::default(),
            theme: Theme::Dark,
            window_size: default_window_size(),
        }
    }
}

impl App {
    /// Loads preferences, builds the gallery and schedules one image
    /// resolution task per catalog record.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);
        report_config_warning(&i18n, config_warning.as_deref());
        let assets_dir = paths::get_assets_dir(config.gallery.assets_dir.clone());
        tracing::info!(
            locale = %i18n.current_locale(),
            assets_dir = %assets_dir.display(),
            "starting gallery"
        );

        let mut app = App {
            i18n,
            gallery: gallery_ui::State::new(gallery::catalog(), &config),
            theme: config.general.theme_mode.theme(),
            ..Self::default()
        };

        let task = app.resolve_images(assets_dir);
        (app, task)
    }

    /// Starts loading every artwork image in the background.
    ///
    /// Records without a usable reference are never scheduled and render the
    /// placeholder straight away.
    fn resolve_images(&mut self, assets_dir: PathBuf) -> Task<Message> {
        let tasks: Vec<Task<Message>> = self
            .gallery
            .artworks()
            .iter()
            .filter_map(|artwork| {
                let Some(reference) = artwork.image_ref() else {
                    tracing::warn!(id = %artwork.id, "artwork has no image reference");
                    return None;
                };
                let id = artwork.id;
                self.gallery.mark_pending(id);
                Some(Task::perform(
                    source::load(reference, assets_dir.clone()),
                    move |result| Message::Gallery(gallery_ui::Message::ImageResolved(id, result)),
                ))
            })
            .collect();

        Task::batch(tasks)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.gallery.selection() {
            Selection::Closed => app_name,
            Selection::Open(artwork) => format!("{} - {app_name}", artwork.title),
        }
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(&self.gallery)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            gallery: &mut self.gallery,
            window_size: &mut self.window_size,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
            window_size: self.window_size,
        })
    }
}

/// Logs a settings load warning in the active locale and returns the message.
fn report_config_warning(i18n: &I18n, key: Option<&str>) -> Option<String> {
    let message = i18n.tr(key?);
    tracing::warn!(%message, "settings.toml ignored");
    Some(message)
}
