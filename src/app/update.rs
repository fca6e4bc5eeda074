// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component updates return events; this module turns those events into
//! navigation, notifications and asynchronous tasks.

use super::{App, Message, Screen};
use crate::media;
use crate::error::SubmitError;
use crate::ui::create_orphanage::{self, Event as FormEvent};
use crate::ui::navbar::{self, Destination, Event as NavbarEvent};
use crate::ui::notifications::Notification;
use crate::ui::orphanage_details::{self, Event as DetailsEvent};
use crate::ui::orphanages_map::Event as MapEvent;
use iced::Task;

/// Dispatches one top-level message.
pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => match navbar::update(&message) {
            NavbarEvent::Navigate(Destination::Map) => {
                let route = app.navigator.route_for(Screen::Map).to_string();
                app.navigate(&route)
            }
            NavbarEvent::Navigate(Destination::Register) => {
                let route = app.navigator.route_for(Screen::CreateOrphanage).to_string();
                app.navigate(&route)
            }
        },
        Message::Map(message) => match app.map.update(message) {
            MapEvent::None => Task::none(),
            MapEvent::OpenDetails => {
                let route = app.config.routes.details_route.clone();
                app.navigate(&route)
            }
        },
        Message::CreateOrphanage(message) => handle_form_message(app, message),
        Message::Details(message) => match orphanage_details::update(&message) {
            DetailsEvent::None => Task::none(),
            DetailsEvent::BackToMap => {
                let route = app.config.routes.root_route.clone();
                app.navigate(&route)
            }
        },
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::TileLoaded { id, result } => {
            app.tiles.finish(id, result);
            Task::none()
        }
        Message::Tick(_) => {
            app.notifications.tick();
            if let Some(form) = app.form.as_mut() {
                form.update(create_orphanage::Message::Tick);
            }
            Task::none()
        }
    }
}

fn handle_form_message(app: &mut App, message: create_orphanage::Message) -> Task<Message> {
    if let create_orphanage::Message::SubmitCompleted(result) = &message {
        let was_in_flight = std::mem::take(&mut app.submit_in_flight);
        if app.form.is_none() {
            if was_in_flight {
                report_detached_submit(app, result);
            } else {
                tracing::debug!("submit result without a pending submission ignored");
            }
            return Task::none();
        }
    }

    let Some(form) = app.form.as_mut() else {
        // Late results for a form that was already left
        tracing::debug!(?message, "form message without an open form");
        return Task::none();
    };

    match form.update(message) {
        FormEvent::None => Task::none(),
        FormEvent::PickImages => {
            let title = app.i18n.tr("form-images-dialog-title");
            Task::perform(media::pick_images(title), |result| {
                Message::CreateOrphanage(create_orphanage::Message::ImagesSelected(result))
            })
        }
        FormEvent::Submit(submission) => {
            app.notifications.clear_submit_errors();
            app.submit_in_flight = true;
            match &app.api {
                Ok(client) => {
                    let client = client.clone();
                    Task::perform(
                        async move { client.create_orphanage(submission).await },
                        |result| {
                            Message::CreateOrphanage(create_orphanage::Message::SubmitCompleted(
                                result,
                            ))
                        },
                    )
                }
                Err(err) => Task::done(Message::CreateOrphanage(
                    create_orphanage::Message::SubmitCompleted(Err(err.clone())),
                )),
            }
        }
        FormEvent::Submitted => {
            tracing::info!("orphanage registered");
            Task::none()
        }
        FormEvent::SubmitFailed(err) => {
            app.notifications.push(Notification::submit_failed(&err));
            Task::none()
        }
        FormEvent::ImageLoadFailed(reason) => {
            app.notifications.push(
                Notification::error("notification-image-load-error").with_arg("reason", reason),
            );
            Task::none()
        }
        FormEvent::LocationFailed(err) => {
            app.notifications.push(Notification::location_failed(&err));
            Task::none()
        }
        FormEvent::Acknowledged => {
            let route = app.config.routes.root_route.clone();
            app.navigate(&route)
        }
    }
}

/// Reports the outcome of a submission whose form was left while the
/// request was running.
fn report_detached_submit(app: &mut App, result: &Result<(), SubmitError>) {
    match result {
        Ok(()) => {
            tracing::info!("orphanage registered after its form was closed");
            app.notifications
                .push(Notification::success("form-submit-success"));
        }
        Err(err) => {
            tracing::warn!(error = %err, "submission failed after its form was closed");
            app.notifications.push(Notification::submit_failed(err));
        }
    }
}

impl App {
    /// Shows the screen behind `route`. Unknown routes are logged and ignored.
    pub(super) fn navigate(&mut self, route: &str) -> Task<Message> {
        match self.navigator.resolve(route) {
            Some(screen) => {
                tracing::info!(route, %screen, "navigating");
                self.switch_screen(screen)
            }
            None => {
                tracing::warn!(route, "navigation to unknown route ignored");
                Task::none()
            }
        }
    }

    /// Leaves the current screen and enters `screen`.
    ///
    /// Leaving the form releases its previews and drops its draft. Entering
    /// it builds a fresh form and starts the position lookup.
    pub(super) fn switch_screen(&mut self, screen: Screen) -> Task<Message> {
        if screen == self.screen && (screen != Screen::CreateOrphanage || self.form.is_some()) {
            return Task::none();
        }

        if let Some(mut form) = self.form.take() {
            form.release();
        }
        self.screen = screen;

        if screen != Screen::CreateOrphanage {
            return Task::none();
        }

        let mut form =
            create_orphanage::State::new(self.config.map.default_center(), self.config.map.form_zoom);
        if self.submit_in_flight {
            form.resume_submission();
        }
        self.form = Some(form);
        Task::perform(self.locator.locate(), |result| {
            Message::CreateOrphanage(create_orphanage::Message::LocationResolved(result))
        })
    }

    /// Starts downloads for the visible tiles of the current screen that are
    /// not tracked yet.
    pub(super) fn request_tiles(&mut self) -> Task<Message> {
        if !self.tile_source.is_enabled() {
            return Task::none();
        }

        let visible = match self.screen {
            Screen::Map => self.map.viewport().visible_tiles(),
            Screen::CreateOrphanage => match &self.form {
                Some(form) if !form.location().is_pending() => form.viewport().visible_tiles(),
                _ => return Task::none(),
            },
            Screen::Details => return Task::none(),
        };

        let missing = self.tiles.begin_missing(&visible);
        if missing.is_empty() {
            return Task::none();
        }

        Task::batch(missing.into_iter().map(|id| {
            Task::perform(self.tile_source.fetch(id), |(id, result)| {
                Message::TileLoaded { id, result }
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::app::Router;
    use crate::domain::geo::Coordinate;
    use crate::geolocation::FixedPositionProvider;
    use crate::i18n::fluent::I18n;
    use crate::map::TileSource;
    use crate::ui::orphanages_map;
    use crate::ui::widgets::MapEvent as CanvasEvent;
    use std::sync::Arc;

    fn app() -> App {
        let config = Config::default();
        App::with_parts(
            config.clone(),
            I18n::default(),
            Box::new(Router::new(config.routes.clone())),
            Arc::new(FixedPositionProvider::new(config.map.default_center())),
            TileSource::disabled(),
        )
    }

    fn form_message(app: &mut App, message: create_orphanage::Message) {
        let _ = app.update(Message::CreateOrphanage(message));
    }

    #[test]
    fn app_starts_on_the_map() {
        let app = app();
        assert_eq!(app.screen(), Screen::Map);
        assert!(app.form().is_none());
    }

    #[test]
    fn callout_press_opens_details() {
        let mut app = app();
        let _ = app.update(Message::Map(orphanages_map::Message::Map(
            CanvasEvent::CalloutPressed,
        )));
        assert_eq!(app.screen(), Screen::Details);

        let _ = app.update(Message::Details(orphanage_details::Message::BackToMap));
        assert_eq!(app.screen(), Screen::Map);
    }

    #[test]
    fn navbar_switches_between_map_and_form() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        assert_eq!(app.screen(), Screen::CreateOrphanage);
        assert!(app.form().is_some());

        let _ = app.update(Message::Navbar(navbar::Message::OpenMap));
        assert_eq!(app.screen(), Screen::Map);
        assert!(app.form().is_none());
    }

    #[test]
    fn reopening_the_form_keeps_the_current_draft() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        form_message(&mut app, create_orphanage::Message::NameChanged("Shelter A".into()));
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));

        let form = app.form().expect("form open");
        assert_eq!(form.draft().name(), "Shelter A");
    }

    #[test]
    fn unknown_route_keeps_the_current_screen() {
        let mut app = app();
        let _ = app.navigate("/does-not-exist");
        assert_eq!(app.screen(), Screen::Map);
    }

    #[test]
    fn failed_submit_shows_an_error_toast() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        form_message(&mut app, create_orphanage::Message::Submit);
        form_message(
            &mut app,
            create_orphanage::Message::SubmitCompleted(Err(SubmitError::Status(500))),
        );

        assert_eq!(app.screen(), Screen::CreateOrphanage);
        assert!(app.notifications().has_notifications());
        assert!(app
            .notifications()
            .visible()
            .any(|notification| notification.is_submit_error()));
    }

    #[test]
    fn acknowledged_submit_returns_to_the_map() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        form_message(&mut app, create_orphanage::Message::Submit);
        form_message(&mut app, create_orphanage::Message::SubmitCompleted(Ok(())));
        assert!(app.form().is_some_and(create_orphanage::State::is_acknowledgment_open));

        form_message(&mut app, create_orphanage::Message::AcknowledgmentConfirmed);
        assert_eq!(app.screen(), Screen::Map);
        assert!(app.form().is_none());
    }

    #[test]
    fn failed_location_warns_and_uses_default_center() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        form_message(
            &mut app,
            create_orphanage::Message::LocationResolved(Err(
                crate::error::GeolocationError::InvalidResponse("no coordinates".into()),
            )),
        );

        let form = app.form().expect("form open");
        assert_eq!(
            form.viewport().center(),
            Coordinate::new(49.1749376, -122.8242944)
        );
        assert!(app.notifications().has_notifications());
    }

    #[test]
    fn late_form_results_are_ignored_after_leaving() {
        let mut app = app();
        form_message(&mut app, create_orphanage::Message::SubmitCompleted(Ok(())));
        assert_eq!(app.screen(), Screen::Map);
        assert!(app.form().is_none());
    }

    #[test]
    fn failure_after_leaving_the_form_is_still_reported() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        form_message(&mut app, create_orphanage::Message::Submit);
        let _ = app.update(Message::Navbar(navbar::Message::OpenMap));
        assert!(!app.notifications().has_notifications());

        form_message(
            &mut app,
            create_orphanage::Message::SubmitCompleted(Err(SubmitError::Status(500))),
        );
        assert!(app
            .notifications()
            .visible()
            .any(|notification| notification.is_submit_error()));
    }

    #[test]
    fn success_after_leaving_the_form_is_confirmed() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        form_message(&mut app, create_orphanage::Message::Submit);
        let _ = app.update(Message::Navbar(navbar::Message::OpenMap));

        form_message(&mut app, create_orphanage::Message::SubmitCompleted(Ok(())));
        assert!(app
            .notifications()
            .visible()
            .any(|notification| notification.message_key() == "form-submit-success"));
        assert_eq!(app.screen(), Screen::Map);
    }

    #[test]
    fn returning_to_the_form_keeps_the_pending_submit_guarded() {
        let mut app = app();
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));
        form_message(&mut app, create_orphanage::Message::Submit);
        let _ = app.update(Message::Navbar(navbar::Message::OpenMap));
        let _ = app.update(Message::Navbar(navbar::Message::OpenRegister));

        let form = app.form().expect("form open");
        assert!(form.is_submitting());
        form_message(&mut app, create_orphanage::Message::Submit);
        assert!(app.submit_in_flight);

        form_message(&mut app, create_orphanage::Message::SubmitCompleted(Ok(())));
        assert!(!app.submit_in_flight);
        assert!(app
            .form()
            .is_some_and(create_orphanage::State::is_acknowledgment_open));
    }

    #[test]
    fn disabled_tiles_are_never_tracked() {
        let mut app = app();
        let _ = app.update(Message::Map(orphanages_map::Message::Map(
            CanvasEvent::Resized(iced::Size::new(640.0, 480.0)),
        )));
        assert!(app.tiles.is_empty());
    }
}
