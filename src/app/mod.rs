// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the map, the
//! registration form and the details screen.
//!
//! The `App` struct wires together the screens, localization, configuration
//! and the external collaborators (API client, tile source, position
//! provider), and translates component events into side effects such as
//! HTTP requests, file dialogs and navigation.

pub mod config;
mod message;
pub mod navigation;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use navigation::{Navigator, Router};
pub use screen::Screen;

use crate::api::ApiClient;
use crate::error::SubmitError;
use crate::geolocation::{self, PositionProvider};
use crate::i18n::fluent::I18n;
use crate::map::{TileCache, TileSource};
use crate::ui::create_orphanage;
use crate::ui::notifications;
use crate::ui::orphanages_map;
use config::Config;
use iced::{window, Element, Size, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    config: Config,
    navigator: Box<dyn Navigator>,
    map: orphanages_map::State,
    /// Present only while the registration form is the active screen.
    form: Option<create_orphanage::State>,
    tiles: TileCache,
    tile_source: TileSource,
    /// Client for the directory API, or why it could not be built.
    api: Result<ApiClient, SubmitError>,
    /// A registration POST is running. Outlives the form that started it.
    submit_in_flight: bool,
    locator: Arc<dyn PositionProvider>,
    /// Resolved once at startup.
    theme: Theme,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("form_open", &self.form.is_some())
            .field("submit_in_flight", &self.submit_in_flight)
            .field("tiles", &self.tiles.len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 768;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const MIN_WINDOW_HEIGHT: u32 = 600;
pub const MIN_WINDOW_WIDTH: u32 = 760;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
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

impl App {
    /// Builds the application from its configuration and collaborators.
    ///
    /// Tests use this directly to inject a router and a position provider
    /// that stay off the filesystem and the network.
    pub fn with_parts(
        config: Config,
        i18n: I18n,
        navigator: Box<dyn Navigator>,
        locator: Arc<dyn PositionProvider>,
        tile_source: TileSource,
    ) -> Self {
        let api = ApiClient::new(&config.api);
        if let Err(err) = &api {
            tracing::error!(error = %err, base_url = %config.api.base_url, "API client unavailable");
        }

        let map = orphanages_map::State::new(
            config.map.default_center(),
            config.map.map_zoom,
            Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        );

        Self {
            i18n,
            screen: Screen::Map,
            theme: config.general.theme_mode.theme(),
            navigator,
            map,
            form: None,
            tiles: TileCache::new(),
            tile_source,
            api,
            submit_in_flight: false,
            locator,
            notifications: notifications::Manager::new(),
            config,
        }
    }

    /// Initializes application state from the on-disk configuration and the
    /// `Flags` received from the launcher.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let navigator = Box::new(Router::new(config.routes.clone()));
        let locator = geolocation::provider_from_config(&config.geolocation, &config.map);
        let tile_source = TileSource::from_config(&config.map);

        let mut app = Self::with_parts(config, i18n, navigator, locator, tile_source);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        let start = flags.screen.unwrap_or(Screen::Map);
        tracing::info!(screen = %start, locale = %app.i18n.current_locale(), "starting");

        let task = app.switch_screen(start);
        let tiles = app.request_tiles();
        (app, Task::batch([task, tiles]))
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn form(&self) -> Option<&create_orphanage::State> {
        self.form.as_ref()
    }

    #[must_use]
    pub fn map(&self) -> &orphanages_map::State {
        &self.map
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme.clone()
    }

    fn subscription(&self) -> Subscription<Message> {
        let is_animating = self
            .form
            .as_ref()
            .is_some_and(create_orphanage::State::is_animating);
        subscription::create_tick_subscription(
            is_animating,
            self.notifications.has_notifications(),
        )
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = update::handle(self, message);
        Task::batch([task, self.request_tiles()])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            map: &self.map,
            form: self.form.as_ref(),
            tiles: &self.tiles,
            notifications: &self.notifications,
        })
    }
}
