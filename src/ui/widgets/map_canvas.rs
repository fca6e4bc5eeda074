// SPDX-License-Identifier: MPL-2.0
//! Slippy-map canvas shared by the map screen and the location picker.
//!
//! The widget is stateless apart from the last size it reported: the
//! viewport, tiles, markers and callout all come from the owning screen, and
//! every interaction is reported back as a [`MapEvent`].

use crate::domain::geo::Coordinate;
use crate::map::{TileCache, Viewport};
use crate::ui::design_tokens::{opacity, palette, sizing, typography};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke, Text};
use iced::widget::Action;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

/// Vertical distance from the pin tip to the center of its head.
const PIN_HEAD_OFFSET: f32 = sizing::MARKER_RADIUS * 2.2;

/// Gap between the pin head and the callout.
const CALLOUT_GAP: f32 = 6.0;

/// Interactions reported by the map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MapEvent {
    /// The widget was laid out at a new size.
    Resized(Size),
    /// The map background was pressed at this coordinate.
    Pressed(Coordinate),
    /// The marker with this index was pressed.
    MarkerPressed(usize),
    /// The open callout was pressed.
    CalloutPressed,
}

/// A text bubble anchored to one marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Callout {
    pub marker: usize,
    pub label: String,
}

/// What lies under a point of the widget, topmost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Callout,
    Marker(usize),
    Map,
}

pub struct MapCanvas<'a, Message> {
    viewport: &'a Viewport,
    tiles: &'a TileCache,
    markers: Vec<Coordinate>,
    callout: Option<Callout>,
    interactive_markers: bool,
    on_event: Box<dyn Fn(MapEvent) -> Message + 'a>,
}

impl<'a, Message> MapCanvas<'a, Message> {
    pub fn new(
        viewport: &'a Viewport,
        tiles: &'a TileCache,
        on_event: impl Fn(MapEvent) -> Message + 'a,
    ) -> Self {
        Self {
            viewport,
            tiles,
            markers: Vec::new(),
            callout: None,
            interactive_markers: true,
            on_event: Box::new(on_event),
        }
    }

    #[must_use]
    pub fn marker(mut self, position: Coordinate) -> Self {
        self.markers.push(position);
        self
    }

    #[must_use]
    pub fn callout(mut self, callout: Option<Callout>) -> Self {
        self.callout = callout;
        self
    }

    /// When disabled, markers and their callout are drawn but presses on
    /// them reach the map underneath.
    #[must_use]
    pub fn interactive_markers(mut self, interactive: bool) -> Self {
        self.interactive_markers = interactive;
        self
    }

    pub fn into_element(self, height: Length) -> Element<'a, Message>
    where
        Message: 'a,
    {
        Canvas::new(self).width(Length::Fill).height(height).into()
    }

    fn hit(&self, position: Point) -> Hit {
        if !self.interactive_markers {
            return Hit::Map;
        }
        hit_test(
            self.viewport,
            &self.markers,
            self.callout.as_ref().map(|c| c.marker),
            position,
        )
    }

    /// Event published for a press at `position`, in widget coordinates.
    #[must_use]
    pub fn press_at(&self, position: Point) -> MapEvent {
        match self.hit(position) {
            Hit::Callout => MapEvent::CalloutPressed,
            Hit::Marker(index) => MapEvent::MarkerPressed(index),
            Hit::Map => MapEvent::Pressed(self.viewport.unproject(position)),
        }
    }
}

/// Bounds of the callout attached to a marker tip at `tip`.
#[must_use]
pub fn callout_bounds(tip: Point) -> Rectangle {
    Rectangle {
        x: tip.x + sizing::MARKER_RADIUS,
        y: tip.y - PIN_HEAD_OFFSET - CALLOUT_GAP - sizing::CALLOUT_HEIGHT,
        width: sizing::CALLOUT_WIDTH,
        height: sizing::CALLOUT_HEIGHT,
    }
}

fn pin_head(tip: Point) -> Point {
    Point::new(tip.x, tip.y - PIN_HEAD_OFFSET)
}

fn marker_contains(tip: Point, position: Point) -> bool {
    let head = pin_head(tip);
    let reach = sizing::MARKER_RADIUS + 4.0;
    let in_head = head.distance(position) <= reach;
    let in_stem = (position.x - tip.x).abs() <= sizing::MARKER_RADIUS / 2.0
        && position.y <= tip.y
        && position.y >= head.y;
    in_head || in_stem
}

/// Finds what lies under `position`: the callout first, then markers (last
/// drawn on top), then the map itself.
#[must_use]
pub fn hit_test(
    viewport: &Viewport,
    markers: &[Coordinate],
    callout_marker: Option<usize>,
    position: Point,
) -> Hit {
    if let Some(tip) = callout_marker
        .and_then(|index| markers.get(index))
        .map(|coordinate| viewport.project(*coordinate))
    {
        if callout_bounds(tip).contains(position) {
            return Hit::Callout;
        }
    }

    markers
        .iter()
        .enumerate()
        .rev()
        .find(|(_, coordinate)| marker_contains(viewport.project(**coordinate), position))
        .map_or(Hit::Map, |(index, _)| Hit::Marker(index))
}

/// Canvas state: the size last reported through [`MapEvent::Resized`].
#[derive(Debug, Default)]
pub struct MapCanvasState {
    reported_size: Option<Size>,
}

impl<Message> canvas::Program<Message> for MapCanvas<'_, Message> {
    type State = MapCanvasState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            let position = cursor.position_in(bounds)?;
            let map_event = self.press_at(position);
            return Some(Action::publish((self.on_event)(map_event)).and_capture());
        }

        let size = bounds.size();
        if state.reported_size != Some(size) && self.viewport.size() != size {
            state.reported_size = Some(size);
            return Some(Action::publish((self.on_event)(MapEvent::Resized(size))));
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        frame.fill_rectangle(Point::ORIGIN, bounds.size(), palette::GRAY_50);
        self.draw_tiles(&mut frame);

        for coordinate in &self.markers {
            draw_marker(&mut frame, self.viewport.project(*coordinate));
        }

        if let Some(callout) = &self.callout {
            if let Some(coordinate) = self.markers.get(callout.marker) {
                draw_callout(&mut frame, self.viewport.project(*coordinate), &callout.label);
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match cursor.position_in(bounds).map(|position| self.hit(position)) {
            Some(Hit::Callout | Hit::Marker(_)) => mouse::Interaction::Pointer,
            Some(Hit::Map) => mouse::Interaction::Crosshair,
            None => mouse::Interaction::default(),
        }
    }
}

impl<Message> MapCanvas<'_, Message> {
    fn draw_tiles(&self, frame: &mut Frame) {
        let grid = Stroke::default().with_width(1.0).with_color(palette::GRAY_100);

        for placement in self.viewport.tile_placements() {
            match self.tiles.handle(placement.id) {
                Some(handle) => {
                    frame.draw_image(placement.bounds, canvas::Image::new(handle.clone()));
                }
                None => {
                    // Graticule placeholder while the tile is missing
                    frame.stroke(
                        &Path::rectangle(placement.bounds.position(), placement.bounds.size()),
                        grid,
                    );
                }
            }
        }
    }
}

fn draw_marker(frame: &mut Frame, tip: Point) {
    let head = pin_head(tip);
    let r = sizing::MARKER_RADIUS;

    let pin = Path::new(|builder| {
        builder.move_to(tip);
        builder.line_to(Point::new(head.x - r * 0.75, head.y + r * 0.66));
        builder.line_to(Point::new(head.x + r * 0.75, head.y + r * 0.66));
        builder.close();
    });
    frame.fill(&pin, palette::PRIMARY_500);
    frame.fill(&Path::circle(head, r), palette::PRIMARY_500);
    frame.fill(&Path::circle(head, r * 0.55), palette::ACCENT_500);
    frame.stroke(
        &Path::circle(head, r),
        Stroke::default().with_width(2.0).with_color(palette::WHITE),
    );
}

fn draw_callout(frame: &mut Frame, tip: Point, label: &str) {
    let bounds = callout_bounds(tip);

    let shadow = Path::rounded_rectangle(
        bounds.position() + Vector::new(0.0, 2.0),
        bounds.size(),
        16.0.into(),
    );
    frame.fill(
        &shadow,
        Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        },
    );

    let bubble = Path::rounded_rectangle(bounds.position(), bounds.size(), 16.0.into());
    frame.fill(
        &bubble,
        Color {
            a: opacity::OVERLAY_HOVER,
            ..palette::WHITE
        },
    );

    frame.fill_text(Text {
        content: label.to_string(),
        position: Point::new(
            bounds.x + 16.0,
            bounds.y + (bounds.height - typography::BODY) / 2.0 - 2.0,
        ),
        color: palette::PRIMARY_700,
        size: typography::BODY.into(),
        ..Text::default()
    });
}
