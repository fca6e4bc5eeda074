// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **API**: Base URL and request timeout of the orphanage API
//! - **Map**: Default center, zoom levels and tile provider
//! - **Geolocation**: Lookup endpoint
//! - **Routes**: Navigation targets

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the orphanage API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333/";

/// Request timeout for API calls (in seconds).
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

/// Minimum accepted API timeout (in seconds).
pub const MIN_API_TIMEOUT_SECS: u64 = 1;

/// Maximum accepted API timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Latitude the map screen is centered on.
pub const DEFAULT_CENTER_LATITUDE: f64 = 49.174_937_6;

/// Longitude the map screen is centered on.
pub const DEFAULT_CENTER_LONGITUDE: f64 = -122.824_294_4;

/// Zoom level of the map screen.
pub const DEFAULT_MAP_ZOOM: u8 = 13;

/// Zoom level of the location picker on the registration form.
pub const DEFAULT_FORM_ZOOM: u8 = 12;

/// Tile URL template. `{z}`, `{x}`, `{y}` and `{token}` are substituted.
pub const DEFAULT_TILE_URL_TEMPLATE: &str =
    "https://api.mapbox.com/styles/v1/mapbox/light-v10/tiles/256/{z}/{x}/{y}@2x?access_token={token}";

/// Environment variable holding the tile provider access token.
pub const DEFAULT_ACCESS_TOKEN_ENV: &str = "MAPBOX_TOKEN";

// ==========================================================================
// Geolocation Defaults
// ==========================================================================

/// JSON endpoint returning `latitude` and `longitude` for the caller's IP.
pub const DEFAULT_GEOLOCATION_ENDPOINT: &str = "https://ipapi.co/json/";

/// Timeout for the geolocation lookup (in seconds).
pub const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 10;

// ==========================================================================
// Route Defaults
// ==========================================================================

/// Route opened when the map callout is pressed.
pub const DEFAULT_DETAILS_ROUTE: &str = "OrphanageDetails";

/// Route opened after a successful registration.
pub const DEFAULT_ROOT_ROUTE: &str = "/app";

/// Route of the registration form.
pub const DEFAULT_CREATE_ROUTE: &str = "/orphanages/create";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_timeout_bounds_are_ordered() {
        assert!(MIN_API_TIMEOUT_SECS <= DEFAULT_API_TIMEOUT_SECS);
        assert!(DEFAULT_API_TIMEOUT_SECS <= MAX_API_TIMEOUT_SECS);
    }

    #[test]
    fn default_center_is_a_valid_coordinate() {
        assert!(DEFAULT_CENTER_LATITUDE.abs() <= 90.0);
        assert!(DEFAULT_CENTER_LONGITUDE.abs() <= 180.0);
    }

    #[test]
    fn tile_template_has_all_placeholders() {
        for placeholder in ["{z}", "{x}", "{y}", "{token}"] {
            assert!(DEFAULT_TILE_URL_TEMPLATE.contains(placeholder));
        }
    }
}
