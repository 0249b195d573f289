// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the session, localization and persisted
//! preferences, and translates messages into session transitions and
//! background tasks (file dialogs, probing, resizing, saving).

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::media::{PreparedArchive, ResizeTarget};
use crate::session::{Session, StatusKind};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    session: Session,
    theme_mode: ThemeMode,
    /// Quality factor for lossy encoders, read from the config at startup.
    quality: u8,
    /// Archive waiting for the save dialog to return.
    pending_archive: Option<PreparedArchive>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("images", &self.session.gallery().len())
            .field("exporting", &self.session.is_exporting())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
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
            session: Session::default(),
            theme_mode: ThemeMode::System,
            quality: config::DEFAULT_QUALITY,
            pending_archive: None,
        }
    }
}

impl App {
    /// Initializes application state and, when image paths were given on
    /// the command line, uploads them as a first batch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            session: Session::new(ResizeTarget::uniform(config.resize.effective_size())),
            theme_mode: config.general.theme_mode,
            quality: config.resize.effective_quality(),
            pending_archive: None,
        };

        if let Some(key) = config_warning {
            app.session
                .status_mut()
                .set(StatusKind::Error, key, Vec::new());
        }

        tracing::debug!(
            locale = %app.i18n.current_locale(),
            target = %app.session.target(),
            quality = app.quality,
            "application started"
        );

        let task = update::load_batch(flags.files);
        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.gallery().len() {
            0 => app_name,
            count => format!("{app_name} ({count})"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            session: &mut self.session,
            pending_archive: &mut self.pending_archive,
            quality: self.quality,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut ctx, gallery_message)
            }
            Message::ConfirmDialog(dialog_message) => {
                update::handle_confirm_dialog_message(&mut ctx, dialog_message)
            }
            Message::FilesPicked(paths) => update::handle_files_picked(&mut ctx, paths),
            Message::FileDropped(path) => update::handle_file_dropped(&mut ctx, path),
            Message::IntakeLoaded(results) => update::handle_intake_loaded(&mut ctx, results),
            Message::ArchivePrepared(result) => update::handle_archive_prepared(&mut ctx, result),
            Message::SaveTargetChosen(path) => update::handle_save_target_chosen(&mut ctx, path),
            Message::ArchiveSaved(result) => update::handle_archive_saved(&mut ctx, result),
            Message::ClearStatus(generation) => update::handle_clear_status(&mut ctx, generation),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: &self.session,
        })
    }
}
