// SPDX-License-Identifier: MPL-2.0
//! Geographic domain types.
//!
//! Pure types for WGS84 coordinates and the Web-Mercator ("slippy map")
//! projection used by raster tile providers.

use std::f64::consts::PI;

/// Edge length of a raster tile in logical pixels.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web-Mercator projection.
pub const MAX_LATITUDE: f64 = 85.051_128_78;

/// Highest zoom level supported by common tile providers.
pub const MAX_ZOOM: u8 = 22;

// =============================================================================
// Coordinate
// =============================================================================

/// A position in decimal degrees.
///
/// `(0, 0)` doubles as the "unset" value: a draft whose position was never
/// picked on the map carries it, and the marker is hidden until the user
/// clicks somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, clamping latitude to [-90, 90] and wrapping
    /// longitude into [-180, 180].
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: latitude.clamp(-90.0, 90.0),
            longitude: wrap_longitude(longitude),
        }
    }

    /// The unset position `(0, 0)`.
    #[must_use]
    pub const fn unset() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns whether both components are exactly zero.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Returns whether both components are finite numbers.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }

    /// Projects this coordinate to absolute pixel space at `zoom`.
    ///
    /// Latitude is clamped to the Mercator limit first.
    #[must_use]
    pub fn to_world(&self, zoom: u8) -> WorldPoint {
        let scale = world_size(zoom);
        let lat = self.latitude.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (self.longitude + 180.0) / 360.0 * scale;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
        WorldPoint { x, y }
    }

    /// Inverse of [`Coordinate::to_world`].
    #[must_use]
    pub fn from_world(point: WorldPoint, zoom: u8) -> Self {
        let scale = world_size(zoom);
        let longitude = point.x / scale * 360.0 - 180.0;
        let n = PI - 2.0 * PI * point.y / scale;
        let latitude = n.sinh().atan().to_degrees();
        Self::new(latitude, longitude)
    }

    /// Formats the coordinate as "49.174938° N, 122.824294° W".
    #[must_use]
    pub fn format(&self) -> String {
        let lat_dir = if self.latitude >= 0.0 { "N" } else { "S" };
        let lon_dir = if self.longitude >= 0.0 { "E" } else { "W" };
        format!(
            "{:.6}° {}, {:.6}° {}",
            self.latitude.abs(),
            lat_dir,
            self.longitude.abs(),
            lon_dir
        )
    }
}

fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) || !longitude.is_finite() {
        return longitude;
    }
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

// =============================================================================
// WorldPoint / TileId
// =============================================================================

/// Absolute pixel position on the projected world at a given zoom level.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

/// Width (and height) of the projected world in pixels at `zoom`.
#[must_use]
pub fn world_size(zoom: u8) -> f64 {
    TILE_SIZE * f64::from(1u32 << zoom.min(MAX_ZOOM))
}

/// Number of tiles along one axis at `zoom`.
#[must_use]
pub fn tiles_per_axis(zoom: u8) -> u32 {
    1u32 << zoom.min(MAX_ZOOM)
}

/// Address of one raster tile in the XYZ scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub z: u8,
    pub x: u32,
    pub y: u32,
}

impl TileId {
    /// Builds a tile id from possibly out-of-range column/row indices.
    ///
    /// Columns wrap around the antimeridian; rows outside the world return
    /// `None`.
    #[must_use]
    pub fn wrapped(z: u8, x: i64, y: i64) -> Option<Self> {
        let n = i64::from(tiles_per_axis(z));
        if y < 0 || y >= n {
            return None;
        }
        let x = x.rem_euclid(n);
        Some(Self {
            z,
            x: u32::try_from(x).ok()?,
            y: u32::try_from(y).ok()?,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
