// SPDX-License-Identifier: MPL-2.0
//! Viewport math: what part of the projected world a map widget shows.

use crate::domain::geo::{world_size, Coordinate, TileId, WorldPoint, TILE_SIZE};
use iced::{Point, Rectangle, Size};

/// A tile and where it lands inside the widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    pub id: TileId,
    pub bounds: Rectangle,
}

/// Center, zoom and pixel size of a map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    center: Coordinate,
    zoom: u8,
    size: Size,
}

impl Viewport {
    /// Creates a viewport with no size yet; the size arrives with the first
    /// layout of the widget.
    #[must_use]
    pub fn new(center: Coordinate, zoom: u8) -> Self {
        Self {
            center,
            zoom,
            size: Size::ZERO,
        }
    }

    #[must_use]
    pub fn center(&self) -> Coordinate {
        self.center
    }

    #[must_use]
    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_center(&mut self, center: Coordinate) {
        self.center = center;
    }

    /// Updates the widget size. Returns `true` if it changed.
    pub fn set_size(&mut self, size: Size) -> bool {
        if self.size == size {
            return false;
        }
        self.size = size;
        true
    }

    fn center_world(&self) -> WorldPoint {
        self.center.to_world(self.zoom)
    }

    fn half_extent(&self) -> (f64, f64) {
        (
            f64::from(self.size.width) / 2.0,
            f64::from(self.size.height) / 2.0,
        )
    }

    /// Widget-local position of a coordinate.
    ///
    /// Longitudes are taken on the copy of the world closest to the center.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn project(&self, coordinate: Coordinate) -> Point {
        let world = world_size(self.zoom);
        let center = self.center_world();
        let point = coordinate.to_world(self.zoom);
        let (half_w, half_h) = self.half_extent();

        let mut dx = point.x - center.x;
        if dx > world / 2.0 {
            dx -= world;
        } else if dx < -world / 2.0 {
            dx += world;
        }
        let dy = point.y - center.y;

        Point::new((dx + half_w) as f32, (dy + half_h) as f32)
    }

    /// Coordinate under a widget-local position.
    #[must_use]
    pub fn unproject(&self, position: Point) -> Coordinate {
        let world = world_size(self.zoom);
        let center = self.center_world();
        let (half_w, half_h) = self.half_extent();

        let x = (center.x + f64::from(position.x) - half_w).rem_euclid(world);
        let y = (center.y + f64::from(position.y) - half_h).clamp(0.0, world);

        Coordinate::from_world(WorldPoint { x, y }, self.zoom)
    }

    /// Tiles intersecting the viewport, with their widget-local bounds.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn tile_placements(&self) -> Vec<TilePlacement> {
        if self.size.width <= 0.0 || self.size.height <= 0.0 {
            return Vec::new();
        }

        let center = self.center_world();
        let (half_w, half_h) = self.half_extent();
        let origin_x = center.x - half_w;
        let origin_y = center.y - half_h;

        let first_col = (origin_x / TILE_SIZE).floor() as i64;
        let last_col = ((origin_x + 2.0 * half_w) / TILE_SIZE).floor() as i64;
        let first_row = (origin_y / TILE_SIZE).floor() as i64;
        let last_row = ((origin_y + 2.0 * half_h) / TILE_SIZE).floor() as i64;

        let mut placements = Vec::new();
        for row in first_row..=last_row {
            for col in first_col..=last_col {
                let Some(id) = TileId::wrapped(self.zoom, col, row) else {
                    continue;
                };
                placements.push(TilePlacement {
                    id,
                    bounds: Rectangle {
                        x: (col as f64 * TILE_SIZE - origin_x) as f32,
                        y: (row as f64 * TILE_SIZE - origin_y) as f32,
                        width: TILE_SIZE as f32,
                        height: TILE_SIZE as f32,
                    },
                });
            }
        }
        placements
    }

    /// Ids of the tiles intersecting the viewport.
    #[must_use]
    pub fn visible_tiles(&self) -> Vec<TileId> {
        self.tile_placements()
            .into_iter()
            .map(|placement| placement.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sized(center: Coordinate, zoom: u8) -> Viewport {
        let mut viewport = Viewport::new(center, zoom);
        viewport.set_size(Size::new(800.0, 600.0));
        viewport
    }

    #[test]
    fn center_projects_to_middle_of_widget() {
        let center = Coordinate::new(49.1749376, -122.8242944);
        let viewport = sized(center, 13);
        let point = viewport.project(center);
        assert!((point.x - 400.0).abs() < 0.01);
        assert!((point.y - 300.0).abs() < 0.01);
    }

    #[test]
    fn unproject_inverts_project() {
        let viewport = sized(Coordinate::new(49.17, -122.82), 12);
        let target = Coordinate::new(49.18, -122.80);
        let back = viewport.unproject(viewport.project(target));
        assert!((back.latitude() - target.latitude()).abs() < 1e-4);
        assert!((back.longitude() - target.longitude()).abs() < 1e-4);
    }

    #[test]
    fn set_size_reports_changes_only() {
        let mut viewport = Viewport::new(Coordinate::unset(), 3);
        assert!(viewport.set_size(Size::new(10.0, 10.0)));
        assert!(!viewport.set_size(Size::new(10.0, 10.0)));
    }

    #[test]
    fn unsized_viewport_has_no_tiles() {
        let viewport = Viewport::new(Coordinate::unset(), 5);
        assert!(viewport.tile_placements().is_empty());
    }

    #[test]
    fn placements_cover_the_whole_widget() {
        let viewport = sized(Coordinate::new(49.17, -122.82), 13);
        let placements = viewport.tile_placements();
        assert!(!placements.is_empty());

        for (x, y) in [(0.0, 0.0), (799.0, 0.0), (0.0, 599.0), (799.0, 599.0)] {
            let point = Point::new(x, y);
            assert!(
                placements.iter().any(|p| p.bounds.contains(point)),
                "no tile covers {point:?}"
            );
        }
    }

    #[test]
    fn antimeridian_columns_wrap() {
        let viewport = sized(Coordinate::new(0.0, 179.99), 4);
        let ids = viewport.visible_tiles();
        assert!(ids.iter().any(|id| id.x == 0));
        assert!(ids.iter().any(|id| id.x == 15));
    }

    #[test]
    fn project_takes_nearest_world_copy() {
        let viewport = sized(Coordinate::new(0.0, 179.0), 2);
        let point = viewport.project(Coordinate::new(0.0, -179.0));
        assert!(point.x > 400.0, "expected east of center, got {}", point.x);
    }
}
