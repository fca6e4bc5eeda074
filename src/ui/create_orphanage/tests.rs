// SPDX-License-Identifier: MPL-2.0

use super::*;
use crate::domain::orphanage::{SelectedImage, Thumbnail};
use crate::error::{Error, GeolocationError, SubmitError};
use crate::i18n::fluent::I18n;
use crate::map::TileCache;
use std::sync::Arc;

const DEFAULT_CENTER: (f64, f64) = (49.1749376, -122.8242944);

fn form() -> State {
    State::new(Coordinate::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1), 12)
}

fn ready_form() -> State {
    let mut state = form();
    state.update(Message::LocationResolved(Ok(Coordinate::new(49.2, -122.9))));
    state
}

fn image(name: &str) -> SelectedImage {
    SelectedImage {
        file_name: name.to_string(),
        mime: "image/png".to_string(),
        bytes: Arc::from(vec![1_u8, 2, 3]),
        thumbnail: Thumbnail {
            width: 1,
            height: 1,
            rgba: vec![0, 0, 0, 255],
        },
    }
}

fn click(state: &mut State, latitude: f64, longitude: f64) {
    state.update(Message::Map(MapEvent::Pressed(Coordinate::new(
        latitude, longitude,
    ))));
}

fn submitted(event: Event) -> Submission {
    match event {
        Event::Submit(submission) => submission,
        other => panic!("expected a submit event, got {other:?}"),
    }
}

#[test]
fn new_form_is_pending_with_default_draft() {
    let state = form();
    assert!(state.location().is_pending());
    assert!(state.is_animating());
    assert!(!state.is_submitting());
    assert!(state.draft().open_on_weekends());
    assert!(state.draft().position().is_unset());
}

#[test]
fn text_fields_are_last_write_wins() {
    let mut state = ready_form();
    state.update(Message::NameChanged("First".into()));
    state.update(Message::NameChanged("Shelter A".into()));
    state.update(Message::InstructionsChanged("Ring twice".into()));
    state.update(Message::OpeningHoursChanged("8h - 18h".into()));

    assert_eq!(state.draft().name(), "Shelter A");
    assert_eq!(state.draft().instructions(), "Ring twice");
    assert_eq!(state.draft().opening_hours(), "8h - 18h");
    assert_eq!(state.draft().about(), "");
}

#[test]
fn about_is_truncated_to_the_maximum() {
    let mut state = ready_form();
    state.update(Message::AboutChanged("é".repeat(400)));
    assert_eq!(state.draft().about().chars().count(), 300);
}

#[test]
fn weekend_choice_matches_the_active_button() {
    let mut state = ready_form();
    assert!(state.is_choice_active(true));
    assert!(!state.is_choice_active(false));

    state.update(Message::OpenOnWeekendsSelected(false));
    assert!(!state.draft().open_on_weekends());
    assert!(state.is_choice_active(false));
    assert!(!state.is_choice_active(true));

    state.update(Message::OpenOnWeekendsSelected(true));
    assert!(state.draft().open_on_weekends());
    assert!(state.is_choice_active(true));
}

#[test]
fn switching_the_weekend_choice_twice_restores_it() {
    let mut state = ready_form();
    let original = state.draft().open_on_weekends();

    state.update(Message::OpenOnWeekendsSelected(!original));
    assert_ne!(state.draft().open_on_weekends(), original);
    assert!(state.is_choice_active(!original));

    state.update(Message::OpenOnWeekendsSelected(original));
    assert_eq!(state.draft().open_on_weekends(), original);
    assert!(state.is_choice_active(original));
}

#[test]
fn map_clicks_keep_only_the_latest_position() {
    let mut state = ready_form();
    click(&mut state, 49.10, -122.70);
    click(&mut state, 49.17, -122.82);

    let position = state.draft().position();
    assert!((position.latitude() - 49.17).abs() < 1e-9);
    assert!((position.longitude() + 122.82).abs() < 1e-9);
}

#[test]
fn submitting_without_a_click_sends_the_unset_position() {
    let mut state = ready_form();
    let submission = submitted(state.update(Message::Submit));
    assert_eq!(submission.field("latitude"), Some("0"));
    assert_eq!(submission.field("longitude"), Some("0"));
}

#[test]
fn pressing_on_the_pin_moves_the_position() {
    let mut state = ready_form();
    click(&mut state, 49.17, -122.82);
    let before = state.draft().position();

    let tiles = TileCache::new();
    let tip = state.viewport().project(before);
    let event = state
        .location_map(&tiles)
        .press_at(iced::Point::new(tip.x, tip.y - 20.0));
    let MapEvent::Pressed(target) = event else {
        panic!("expected a map press, got {event:?}");
    };

    state.update(Message::Map(event));
    assert_eq!(state.draft().position(), target);
    assert!(state.draft().position().latitude() > before.latitude());
}

#[test]
fn select_images_asks_for_the_dialog() {
    let mut state = ready_form();
    assert!(matches!(state.update(Message::SelectImages), Event::PickImages));
}

#[test]
fn selected_images_replace_previews_one_to_one() {
    let mut state = ready_form();
    state.update(Message::ImagesSelected(Ok(vec![image("a.png"), image("b.png")])));
    assert_eq!(state.draft().images().len(), 2);
    assert_eq!(state.draft().image_previews().len(), 2);
    assert_eq!(state.previews().live(), 2);

    state.update(Message::ImagesSelected(Ok(vec![image("c.png")])));
    assert_eq!(state.draft().images().len(), 1);
    assert_eq!(state.draft().image_previews().len(), 1);
    assert_eq!(state.previews().live(), 1);
    assert_eq!(state.draft().images()[0].file_name, "c.png");
}

#[test]
fn cancelled_selection_keeps_previous_images() {
    let mut state = ready_form();
    state.update(Message::ImagesSelected(Ok(vec![image("a.png")])));
    let previews = state.draft().image_previews().to_vec();

    state.update(Message::ImagesSelected(Ok(Vec::new())));
    assert_eq!(state.draft().image_previews(), previews.as_slice());
    assert_eq!(state.previews().live(), 1);
}

#[test]
fn failed_selection_keeps_previous_images_and_reports() {
    let mut state = ready_form();
    state.update(Message::ImagesSelected(Ok(vec![image("a.png")])));

    let event = state.update(Message::ImagesSelected(Err(Error::Image(
        "bad header".into(),
    ))));
    assert!(matches!(event, Event::ImageLoadFailed(_)));
    assert_eq!(state.draft().images().len(), 1);
}

#[test]
fn double_submit_is_ignored_while_in_flight() {
    let mut state = ready_form();
    assert!(matches!(state.update(Message::Submit), Event::Submit(_)));
    assert!(state.is_submitting());
    assert!(matches!(state.update(Message::Submit), Event::None));
}

#[test]
fn failed_submit_keeps_the_draft_for_retry() {
    let mut state = ready_form();
    state.update(Message::NameChanged("Shelter A".into()));
    state.update(Message::Submit);

    let event = state.update(Message::SubmitCompleted(Err(SubmitError::Status(500))));
    assert!(matches!(event, Event::SubmitFailed(SubmitError::Status(500))));
    assert!(!state.is_submitting());
    assert!(!state.is_acknowledgment_open());
    assert_eq!(state.draft().name(), "Shelter A");

    assert!(matches!(state.update(Message::Submit), Event::Submit(_)));
}

#[test]
fn successful_submit_shows_acknowledgment_then_resets() {
    let mut state = ready_form();
    state.update(Message::NameChanged("Shelter A".into()));
    state.update(Message::ImagesSelected(Ok(vec![image("a.png"), image("b.png")])));
    state.update(Message::Submit);

    assert!(matches!(
        state.update(Message::SubmitCompleted(Ok(()))),
        Event::Submitted
    ));
    assert!(state.is_acknowledgment_open());
    assert!(matches!(state.update(Message::Submit), Event::None));

    assert!(matches!(
        state.update(Message::AcknowledgmentConfirmed),
        Event::Acknowledged
    ));
    assert!(!state.is_acknowledgment_open());
    assert_eq!(state.draft().name(), "");
    assert!(state.draft().images().is_empty());
    assert_eq!(state.previews().live(), 0);
}

#[test]
fn stray_acknowledgment_is_ignored() {
    let mut state = ready_form();
    state.update(Message::NameChanged("keep".into()));
    assert!(matches!(
        state.update(Message::AcknowledgmentConfirmed),
        Event::None
    ));
    assert_eq!(state.draft().name(), "keep");
}

#[test]
fn release_frees_all_previews() {
    let mut state = ready_form();
    state.update(Message::ImagesSelected(Ok(vec![image("a.png"), image("b.png")])));
    state.release();
    assert_eq!(state.previews().live(), 0);
    assert!(state.draft().image_previews().is_empty());
}

#[test]
fn resolved_location_recenters_the_map() {
    let mut state = form();
    let target = Coordinate::new(48.85, 2.35);
    state.update(Message::LocationResolved(Ok(target)));

    assert_eq!(state.location(), PositionStatus::Resolved(target));
    assert_eq!(state.viewport().center(), target);
    assert!(!state.is_animating());
}

#[test]
fn failed_location_falls_back_to_default_center() {
    let mut state = form();
    let event = state.update(Message::LocationResolved(Err(GeolocationError::Network(
        "offline".into(),
    ))));

    assert!(matches!(event, Event::LocationFailed(_)));
    let fallback = Coordinate::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1);
    assert_eq!(state.location(), PositionStatus::Failed { fallback });
    assert_eq!(state.viewport().center(), fallback);
    assert!(!state.is_animating());
}

#[test]
fn ticks_only_spin_while_animating() {
    let mut state = form();
    state.update(Message::Tick);
    assert!(state.spinner_rotation() > 0.0);

    let mut idle = ready_form();
    idle.update(Message::Tick);
    assert_eq!(idle.spinner_rotation(), 0.0);
}

#[test]
fn end_to_end_payload_matches_the_form() {
    let mut state = ready_form();
    state.update(Message::NameChanged("Shelter A".into()));
    state.update(Message::AboutChanged("desc".into()));
    click(&mut state, 49.17, -122.82);
    state.update(Message::ImagesSelected(Ok(vec![image("a.png"), image("b.png")])));

    let submission = submitted(state.update(Message::Submit));
    assert_eq!(submission.field("name"), Some("Shelter A"));
    assert_eq!(submission.field("about"), Some("desc"));
    assert_eq!(submission.field("latitude"), Some("49.17"));
    assert_eq!(submission.field("longitude"), Some("-122.82"));
    assert_eq!(submission.field("open_on_weekends"), Some("true"));
    assert_eq!(submission.images().len(), 2);
}

#[test]
fn view_renders_in_every_phase() {
    let i18n = I18n::default();
    let tiles = TileCache::new();

    let pending = form();
    let _ = pending.view(ViewContext {
        i18n: &i18n,
        tiles: &tiles,
    });

    let mut state = ready_form();
    click(&mut state, 49.17, -122.82);
    state.update(Message::ImagesSelected(Ok(vec![image("a.png")])));
    state.update(Message::Submit);
    state.update(Message::SubmitCompleted(Ok(())));
    let _ = state.view(ViewContext {
        i18n: &i18n,
        tiles: &tiles,
    });
}
