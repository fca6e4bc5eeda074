// SPDX-License-Identifier: MPL-2.0
//! Tail-spin loading indicator drawn on a canvas.
//!
//! The arc fades from transparent at its tail to solid at its head. The
//! caller owns the rotation angle and advances it on every tick.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Angle added per animation tick, in radians.
pub const ROTATION_STEP: f32 = PI / 12.0;

/// Number of strokes making up the fading tail.
const TAIL_SEGMENTS: u16 = 24;

/// Sweep of the visible arc.
const ARC_SWEEP: f32 = PI * 1.5;

/// Advances a rotation by one step, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    (rotation + ROTATION_STEP) % TAU
}

pub struct AnimatedSpinner {
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            rotation,
            color,
            size: sizing::ICON_XXL,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 4.0;
        let width = (radius / 6.0).max(2.0);

        // -90° offset so rotation 0 starts at the top
        let head = self.rotation - PI / 2.0;
        let step = ARC_SWEEP / f32::from(TAIL_SEGMENTS);

        for i in 0..TAIL_SEGMENTS {
            let start = head - ARC_SWEEP + step * f32::from(i);
            let end = start + step;
            let alpha = f32::from(i + 1) / f32::from(TAIL_SEGMENTS);

            let mut builder = canvas::path::Builder::new();
            builder.move_to(point_on(center, radius, start));
            builder.line_to(point_on(center, radius, end));

            frame.stroke(
                &builder.build(),
                Stroke::default()
                    .with_width(width)
                    .with_color(Color {
                        a: self.color.a * alpha,
                        ..self.color
                    })
                    .with_line_cap(canvas::LineCap::Round),
            );
        }

        frame.fill(&Path::circle(point_on(center, radius, head), width / 2.0), self.color);

        vec![frame.into_geometry()]
    }
}

fn point_on(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_stays_within_one_turn() {
        let mut rotation = 0.0;
        for _ in 0..100 {
            rotation = advance(rotation);
            assert!((0.0..TAU).contains(&rotation));
        }
    }

    #[test]
    fn point_on_starts_to_the_right() {
        let p = point_on(Point::new(10.0, 10.0), 5.0, 0.0);
        assert!((p.x - 15.0).abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
    }
}
