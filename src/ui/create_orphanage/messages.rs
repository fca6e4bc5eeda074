// SPDX-License-Identifier: MPL-2.0
//! Registration form message/event types re-exported by the facade.

use crate::api::Submission;
use crate::domain::geo::Coordinate;
use crate::domain::orphanage::SelectedImage;
use crate::error::{Error, GeolocationError, SubmitError};
use crate::ui::widgets::MapEvent;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    AboutChanged(String),
    InstructionsChanged(String),
    OpeningHoursChanged(String),
    /// One of the Yes/No weekend buttons was pressed.
    OpenOnWeekendsSelected(bool),
    Map(MapEvent),
    SelectImages,
    /// Result of the file dialog. An empty list means the dialog was cancelled.
    ImagesSelected(Result<Vec<SelectedImage>, Error>),
    Submit,
    SubmitCompleted(Result<(), SubmitError>),
    AcknowledgmentConfirmed,
    LocationResolved(Result<Coordinate, GeolocationError>),
    /// Animation frame for the spinners.
    Tick,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// Open the image selection dialog.
    PickImages,
    /// Post this payload; answer with [`Message::SubmitCompleted`].
    Submit(Submission),
    /// The server accepted the orphanage.
    Submitted,
    SubmitFailed(SubmitError),
    ImageLoadFailed(String),
    LocationFailed(GeolocationError),
    /// The success dialog was dismissed; leave for the root route.
    Acknowledged,
}
