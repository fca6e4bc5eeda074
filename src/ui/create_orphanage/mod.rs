// SPDX-License-Identifier: MPL-2.0
//! Orphanage registration form.
//!
//! The form owns an [`OrphanageDraft`] and the preview handles of its images.
//! Side effects (file dialog, HTTP submit, position lookup) are requested
//! from the application through [`Event`]s and their outcomes come back as
//! [`Message`]s, so the whole state machine is testable without a runtime.
//!
//! A submit is in flight from [`Message::Submit`] until
//! [`Message::SubmitCompleted`]; further submits are ignored meanwhile. A
//! successful submit opens a blocking acknowledgment dialog, and confirming
//! it resets the draft.

mod messages;
mod view;

#[cfg(test)]
mod tests;

pub use messages::{Event, Message};
pub use view::ViewContext;

use crate::api::Submission;
use crate::domain::geo::Coordinate;
use crate::domain::orphanage::OrphanageDraft;
use crate::geolocation::PositionStatus;
use crate::map::Viewport;
use crate::media::PreviewStore;
use crate::ui::design_tokens::sizing;
use crate::ui::widgets::{animated_spinner, MapEvent};
use iced::Size;

#[derive(Debug)]
pub struct State {
    draft: OrphanageDraft,
    previews: PreviewStore,
    location: PositionStatus,
    /// Center used when the position lookup fails.
    fallback_center: Coordinate,
    viewport: Viewport,
    submitting: bool,
    acknowledgment_open: bool,
    spinner_rotation: f32,
}

impl State {
    /// A blank form waiting for its position lookup.
    #[must_use]
    pub fn new(fallback_center: Coordinate, zoom: u8) -> Self {
        let mut viewport = Viewport::new(fallback_center, zoom);
        viewport.set_size(Size::new(sizing::FORM_WIDTH, sizing::FORM_MAP_HEIGHT));

        Self {
            draft: OrphanageDraft::new(),
            previews: PreviewStore::new(),
            location: PositionStatus::Pending,
            fallback_center,
            viewport,
            submitting: false,
            acknowledgment_open: false,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn draft(&self) -> &OrphanageDraft {
        &self.draft
    }

    #[must_use]
    pub fn previews(&self) -> &PreviewStore {
        &self.previews
    }

    #[must_use]
    pub fn location(&self) -> PositionStatus {
        self.location
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    #[must_use]
    pub fn is_acknowledgment_open(&self) -> bool {
        self.acknowledgment_open
    }

    /// Whether the Yes (`true`) or No (`false`) weekend button is active.
    #[must_use]
    pub fn is_choice_active(&self, choice: bool) -> bool {
        self.draft.open_on_weekends() == choice
    }

    /// Whether a spinner is on screen and needs animation ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.location.is_pending() || self.submitting
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::NameChanged(name) => {
                self.draft.set_name(name);
                Event::None
            }
            Message::AboutChanged(about) => {
                self.draft.set_about(about);
                Event::None
            }
            Message::InstructionsChanged(instructions) => {
                self.draft.set_instructions(instructions);
                Event::None
            }
            Message::OpeningHoursChanged(hours) => {
                self.draft.set_opening_hours(hours);
                Event::None
            }
            Message::OpenOnWeekendsSelected(open) => {
                self.draft.set_open_on_weekends(open);
                Event::None
            }
            Message::Map(event) => {
                self.handle_map_event(event);
                Event::None
            }
            Message::SelectImages => Event::PickImages,
            Message::ImagesSelected(Ok(images)) => {
                let count = images.len();
                if self.draft.replace_images(images, &mut self.previews) {
                    tracing::debug!(count, "image selection replaced");
                }
                Event::None
            }
            Message::ImagesSelected(Err(err)) => Event::ImageLoadFailed(err.to_string()),
            Message::Submit => self.begin_submit(),
            Message::SubmitCompleted(result) => {
                self.submitting = false;
                match result {
                    Ok(()) => {
                        self.acknowledgment_open = true;
                        Event::Submitted
                    }
                    Err(err) => Event::SubmitFailed(err),
                }
            }
            Message::AcknowledgmentConfirmed => {
                if !self.acknowledgment_open {
                    return Event::None;
                }
                self.acknowledgment_open = false;
                self.reset();
                Event::Acknowledged
            }
            Message::LocationResolved(result) => self.resolve_location(result),
            Message::Tick => {
                if self.is_animating() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                Event::None
            }
        }
    }

    /// Marks a submission started before this form was built as still
    /// running, so the submit button stays disabled until its result arrives.
    pub fn resume_submission(&mut self) {
        self.submitting = true;
    }

    /// Frees every preview handle. Called when the form screen is left.
    pub fn release(&mut self) {
        self.draft.release_images(&mut self.previews);
    }

    fn handle_map_event(&mut self, event: MapEvent) {
        match event {
            MapEvent::Resized(size) => {
                self.viewport.set_size(size);
            }
            MapEvent::Pressed(position) => {
                self.draft.set_position(position);
            }
            // Markers on the form map are passive and never publish these
            MapEvent::MarkerPressed(_) | MapEvent::CalloutPressed => {}
        }
    }

    fn begin_submit(&mut self) -> Event {
        if self.submitting || self.acknowledgment_open {
            tracing::debug!("submit ignored, a submission is already in progress");
            return Event::None;
        }
        self.submitting = true;
        Event::Submit(Submission::from_draft(&self.draft))
    }

    fn resolve_location(
        &mut self,
        result: Result<Coordinate, crate::error::GeolocationError>,
    ) -> Event {
        match result {
            Ok(position) => {
                tracing::info!(position = %position.format(), "position resolved");
                self.location = PositionStatus::Resolved(position);
                self.viewport.set_center(position);
                Event::None
            }
            Err(err) => {
                tracing::warn!(error = %err, "position lookup failed, using default center");
                self.location = PositionStatus::Failed {
                    fallback: self.fallback_center,
                };
                self.viewport.set_center(self.fallback_center);
                Event::LocationFailed(err)
            }
        }
    }

    fn reset(&mut self) {
        self.draft.release_images(&mut self.previews);
        self.draft = OrphanageDraft::new();
    }
}
