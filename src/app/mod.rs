// SPDX-License-Identifier: MPL-2.0
//! Core application module wiring screens, backend ports, localization, and
//! persisted state.
//!
//! The `App` struct owns all runtime state; `update.rs` holds the message
//! handlers, `view.rs` the rendering, and the backend is reached exclusively
//! through the injected [`Ports`].

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
pub mod persisted_state;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::{MediaUploader, SessionGateway, VideoCatalog};
use crate::diagnostics::{BufferCapacity, DiagnosticsHandle, WarningType};
use crate::domain::{Session, VideoAsset, VideoId};
use crate::ui::feed;
use crate::ui::notifications;
use crate::ui::theming::ThemeMode;
use crate::ui::upload_form;
use i18n::I18n;
use iced::widget::image;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Backend capabilities injected at startup.
///
/// `main.rs` builds the HTTP adapters; tests inject fakes.
pub struct Ports {
    pub session: Arc<dyn SessionGateway>,
    pub uploader: Arc<dyn MediaUploader>,
    pub catalog: Arc<dyn VideoCatalog>,
}

/// Root Iced application state that bridges UI components, localization, and
/// persisted state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Whether the navbar dropdown is open.
    menu_open: bool,
    /// Feed load state, replaced wholesale on every catalog request.
    feed: feed::State,
    /// Poster frames fetched for feed cards, keyed by asset id.
    posters: HashMap<VideoId, image::Handle>,
    /// Asset shown on the detail screen.
    detail: Option<VideoAsset>,
    /// Upload form state; survives navigation, reset after a publish.
    upload_form: upload_form::State,
    /// Session snapshot used by the view; refreshed when sign-out completes.
    account: Option<Session>,
    theme_mode: ThemeMode,
    /// Base URL poster references are resolved against.
    api_base_url: String,
    /// Persisted application state (account email, last video directory).
    app_state: persisted_state::AppState,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    /// In-memory diagnostics buffer behind the notification manager.
    diagnostics: DiagnosticsHandle,
    session: Arc<dyn SessionGateway>,
    uploader: Arc<dyn MediaUploader>,
    catalog: Arc<dyn VideoCatalog>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("feed_videos", &self.feed.videos().len())
            .field("signed_in", &self.account.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 650;
pub const MIN_WINDOW_WIDTH: u32 = 650;

/// Builds the window settings
pub fn window_settings_with_locale() -> window::Settings {
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
pub fn run(flags: Flags, ports: Ports) -> iced::Result {
    use std::cell::RefCell;

    // Wrap startup data in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming it once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, ports)));
    let boot = move || {
        let (flags, ports) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, ports)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings_with_locale())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the initial feed load.
    fn new(flags: Flags, ports: Ports) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), flags.i18n_dir.clone(), &config);

        let api_base_url = flags
            .api_url
            .clone()
            .unwrap_or_else(|| config.backend_base_url());

        // Load application state (account email, last video directory)
        let (app_state, state_warning) = persisted_state::AppState::load();

        let diagnostics = DiagnosticsHandle::new(BufferCapacity::default());
        let mut notifications = notifications::Manager::new();
        notifications.set_diagnostics(diagnostics.clone());

        let account = ports.session.current();

        let mut app = App {
            i18n,
            screen: Screen::Feed,
            menu_open: false,
            feed: feed::State::Loading,
            posters: HashMap::new(),
            detail: None,
            upload_form: upload_form::State::default(),
            account,
            theme_mode: config.general.theme_mode,
            api_base_url,
            app_state,
            notifications,
            diagnostics,
            session: ports.session,
            uploader: ports.uploader,
            catalog: ports.catalog,
        };

        // Show warnings for config/state loading issues
        if let Some(key) = config_warning {
            app.notifications.push(
                notifications::Notification::warning(key)
                    .with_warning_type(WarningType::ConfigLoad),
            );
        }
        if let Some(key) = state_warning {
            app.notifications.push(
                notifications::Notification::warning(key)
                    .with_warning_type(WarningType::StatePersist),
            );
        }

        let task = update::load_videos(&app.catalog);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        if self.screen == Screen::Detail {
            if let Some(video) = &self.detail {
                return format!("{} - {}", video.title, app_name);
            }
        }

        app_name
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            menu_open: &mut self.menu_open,
            feed: &mut self.feed,
            posters: &mut self.posters,
            detail: &mut self.detail,
            upload_form: &mut self.upload_form,
            account: &mut self.account,
            persisted: &mut self.app_state,
            notifications: &mut self.notifications,
            diagnostics: &self.diagnostics,
            session: &self.session,
            uploader: &self.uploader,
            catalog: &self.catalog,
            api_base_url: &self.api_base_url,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Feed(feed_message) => update::handle_feed_message(&mut ctx, feed_message),
            Message::Detail(detail_message) => {
                update::handle_detail_message(&mut ctx, detail_message)
            }
            Message::UploadForm(form_message) => {
                update::handle_upload_form_message(&mut ctx, form_message)
            }
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                // Tick the notification manager to handle auto-dismiss
                self.notifications.tick();
                Task::none()
            }
            Message::PickFileDialogResult(path) => {
                update::handle_pick_file_dialog_result(&mut ctx, path)
            }
            Message::TransferProgress(percent) => {
                update::handle_transfer_progress(&mut ctx, percent)
            }
            Message::TransferCompleted(result) => {
                update::handle_transfer_completed(&mut ctx, result)
            }
            Message::PublishCompleted(result) => {
                update::handle_publish_completed(&mut ctx, result)
            }
            Message::VideosLoaded(result) => update::handle_videos_loaded(&mut ctx, result),
            Message::PosterFetched { id, result } => {
                update::handle_poster_fetched(&mut ctx, id, result)
            }
            Message::SignOutCompleted(result) => {
                update::handle_sign_out_completed(&mut ctx, result)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            menu_open: self.menu_open,
            account: self.account.as_ref(),
            feed: &self.feed,
            posters: &self.posters,
            detail: self.detail.as_ref(),
            upload_form: &self.upload_form,
            notifications: &self.notifications,
        })
    }
}
