// SPDX-License-Identifier: MPL-2.0
//! Map screen: the orphanage pin, its callout and the footer.
//!
//! The screen fetches nothing beyond map tiles. Pressing the pin opens the
//! callout, pressing the callout asks the application to open the details
//! route, and pressing anywhere else on the map closes it again.

use crate::domain::geo::Coordinate;
use crate::i18n::fluent::I18n;
use crate::map::{TileCache, Viewport};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::{Callout, MapCanvas, MapEvent};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Container, Row, Space, Stack, Text},
    Element, Length, Size,
};

/// Index of the orphanage pin in the marker list.
const ORPHANAGE_MARKER: usize = 0;

#[derive(Debug, Clone)]
pub struct State {
    viewport: Viewport,
    orphanage: Coordinate,
    callout_open: bool,
}

/// Contextual data needed to render the map screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tiles: &'a TileCache,
}

#[derive(Debug, Clone)]
pub enum Message {
    Map(MapEvent),
    AddPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    OpenDetails,
}

impl State {
    /// Map centered on `center`, with the orphanage pin at the same spot.
    #[must_use]
    pub fn new(center: Coordinate, zoom: u8, initial_size: Size) -> Self {
        let mut viewport = Viewport::new(center, zoom);
        viewport.set_size(initial_size);
        Self {
            viewport,
            orphanage: center,
            callout_open: false,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn is_callout_open(&self) -> bool {
        self.callout_open
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Map(MapEvent::Resized(size)) => {
                self.viewport.set_size(size);
                Event::None
            }
            Message::Map(MapEvent::MarkerPressed(_)) => {
                self.callout_open = true;
                Event::None
            }
            Message::Map(MapEvent::Pressed(_)) => {
                self.callout_open = false;
                Event::None
            }
            Message::Map(MapEvent::CalloutPressed) => {
                self.callout_open = false;
                Event::OpenDetails
            }
            Message::AddPressed => {
                tracing::debug!("add orphanage button pressed on the map footer");
                Event::None
            }
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let callout = self.callout_open.then(|| Callout {
            marker: ORPHANAGE_MARKER,
            label: ctx.i18n.tr("map-callout"),
        });

        let map = MapCanvas::new(&self.viewport, ctx.tiles, Message::Map)
            .marker(self.orphanage)
            .callout(callout)
            .into_element(Length::Fill);

        let footer = build_footer(ctx.i18n);

        Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(map)
            .push(
                Container::new(footer)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .padding(spacing::XL)
                    .align_y(Vertical::Bottom),
            )
            .into()
    }
}

fn build_footer(i18n: &I18n) -> Element<'_, Message> {
    let count = Text::new(i18n.tr("map-footer-count")).size(typography::BODY_LG);

    let add_button = button(
        Text::new("+")
            .size(typography::TITLE_MD)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center),
    )
    .width(sizing::FOOTER_HEIGHT)
    .height(sizing::FOOTER_HEIGHT)
    .on_press(Message::AddPressed)
    .style(styles::button::primary);

    let row = Row::new()
        .align_y(Vertical::Center)
        .push(Space::new().width(spacing::LG))
        .push(count)
        .push(Space::new().width(Length::Fill))
        .push(add_button);

    container(row)
        .width(Length::Fill)
        .height(sizing::FOOTER_HEIGHT)
        .style(styles::container::footer)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> State {
        State::new(
            Coordinate::new(49.1749376, -122.8242944),
            13,
            Size::new(800.0, 600.0),
        )
    }

    #[test]
    fn pressing_the_marker_opens_the_callout() {
        let mut state = state();
        assert!(!state.is_callout_open());

        let event = state.update(Message::Map(MapEvent::MarkerPressed(0)));
        assert_eq!(event, Event::None);
        assert!(state.is_callout_open());
    }

    #[test]
    fn pressing_the_map_closes_the_callout() {
        let mut state = state();
        state.update(Message::Map(MapEvent::MarkerPressed(0)));
        state.update(Message::Map(MapEvent::Pressed(Coordinate::new(49.0, -122.0))));
        assert!(!state.is_callout_open());
    }

    #[test]
    fn pressing_the_callout_requests_details() {
        let mut state = state();
        state.update(Message::Map(MapEvent::MarkerPressed(0)));
        assert_eq!(
            state.update(Message::Map(MapEvent::CalloutPressed)),
            Event::OpenDetails
        );
    }

    #[test]
    fn add_button_does_nothing() {
        let mut state = state();
        let before = *state.viewport();
        assert_eq!(state.update(Message::AddPressed), Event::None);
        assert_eq!(*state.viewport(), before);
        assert!(!state.is_callout_open());
    }

    #[test]
    fn resize_updates_the_viewport() {
        let mut state = state();
        state.update(Message::Map(MapEvent::Resized(Size::new(1200.0, 900.0))));
        assert_eq!(state.viewport().size(), Size::new(1200.0, 900.0));
    }

    #[test]
    fn pin_sits_on_the_center() {
        let state = state();
        assert_eq!(state.viewport().center(), state.orphanage);
    }

    #[test]
    fn view_renders_with_and_without_callout() {
        let i18n = I18n::default();
        let tiles = TileCache::new();
        let mut state = state();
        {
            let _closed = state.view(ViewContext {
                i18n: &i18n,
                tiles: &tiles,
            });
        }
        state.update(Message::Map(MapEvent::MarkerPressed(0)));
        let _open = state.view(ViewContext {
            i18n: &i18n,
            tiles: &tiles,
        });
    }
}
