// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[general]` - Language and theme mode
//! - `[api]` - Orphanage API base URL and timeout
//! - `[map]` - Default center, zoom levels and tile provider
//! - `[geolocation]` - How the registration form finds its initial center
//! - `[routes]` - Navigation targets used by the screens
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ORPHANAGE_FINDER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use orphanage_finder::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, warning) = config::load();
//! if let Some(key) = warning {
//!     eprintln!("settings unreadable ({key}), using defaults");
//! }
//! println!("posting to {}", config.api.base_url);
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::geo::Coordinate;
use crate::error::{Error, Result};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums (shared between sections)
// =============================================================================

/// Source of the initial position on the registration form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum GeolocationProvider {
    /// IP-based lookup against `geolocation.endpoint`.
    #[default]
    Ip,
    /// Resolve immediately to the configured default center.
    Fixed,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Orphanage API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL; the registration form posts to `<base_url>orphanages`.
    pub base_url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Timeout clamped to the accepted range.
    #[must_use]
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
            .clamp(MIN_API_TIMEOUT_SECS, MAX_API_TIMEOUT_SECS)
    }
}

/// Map rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub default_center_latitude: f64,
    pub default_center_longitude: f64,

    /// Zoom level of the map screen.
    pub map_zoom: u8,

    /// Zoom level of the location picker on the registration form.
    pub form_zoom: u8,

    /// Tile URL with `{z}`, `{x}`, `{y}` and `{token}` placeholders.
    pub tile_url_template: String,

    /// Name of the environment variable holding the tile access token.
    pub access_token_env: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            default_center_latitude: DEFAULT_CENTER_LATITUDE,
            default_center_longitude: DEFAULT_CENTER_LONGITUDE,
            map_zoom: DEFAULT_MAP_ZOOM,
            form_zoom: DEFAULT_FORM_ZOOM,
            tile_url_template: DEFAULT_TILE_URL_TEMPLATE.to_string(),
            access_token_env: DEFAULT_ACCESS_TOKEN_ENV.to_string(),
        }
    }
}

impl MapConfig {
    /// The configured default center as a coordinate.
    #[must_use]
    pub fn default_center(&self) -> Coordinate {
        Coordinate::new(self.default_center_latitude, self.default_center_longitude)
    }

    /// Reads the tile access token from the configured environment variable.
    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        std::env::var(&self.access_token_env)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

/// Geolocation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeolocationConfig {
    pub provider: GeolocationProvider,

    /// JSON endpoint used by the `ip` provider.
    pub endpoint: String,

    /// Lookup timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GeolocationConfig {
    fn default() -> Self {
        Self {
            provider: GeolocationProvider::default(),
            endpoint: DEFAULT_GEOLOCATION_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_GEOLOCATION_TIMEOUT_SECS,
        }
    }
}

/// Navigation targets.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutesConfig {
    /// Opened when the map callout is pressed.
    pub details_route: String,

    /// Opened after a successful registration.
    pub root_route: String,

    /// The registration form.
    pub create_route: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            details_route: DEFAULT_DETAILS_ROUTE.to_string(),
            root_route: DEFAULT_ROOT_ROUTE.to_string(),
            create_route: DEFAULT_CREATE_ROUTE.to_string(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub map: MapConfig,

    #[serde(default)]
    pub geolocation: GeolocationConfig,

    #[serde(default)]
    pub routes: RoutesConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "config load failed, using defaults");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves configuration to a specific path.
///
/// The application only reads its settings; this writes fixtures and
/// starter files.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.general.theme_mode, ThemeMode::System);
        assert_eq!(config.api.base_url, "http://localhost:3333/");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.map.map_zoom, 13);
        assert_eq!(config.geolocation.provider, GeolocationProvider::Ip);
        assert_eq!(config.routes.details_route, "OrphanageDetails");
        assert_eq!(config.routes.root_route, "/app");
        assert_eq!(config.routes.create_route, "/orphanages/create");
    }

    #[test]
    fn default_center_matches_constants() {
        let center = MapConfig::default().default_center();
        assert!((center.latitude() - DEFAULT_CENTER_LATITUDE).abs() < 1e-9);
        assert!((center.longitude() - DEFAULT_CENTER_LONGITUDE).abs() < 1e-9);
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            api: ApiConfig {
                base_url: "https://api.example.org/v1/".to_string(),
                timeout_secs: 12,
            },
            map: MapConfig {
                default_center_latitude: 48.85,
                default_center_longitude: 2.35,
                map_zoom: 15,
                ..MapConfig::default()
            },
            geolocation: GeolocationConfig {
                provider: GeolocationProvider::Fixed,
                ..GeolocationConfig::default()
            },
            routes: RoutesConfig {
                root_route: "/home".to_string(),
                ..RoutesConfig::default()
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn partial_file_keeps_defaults_for_missing_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(
            &config_path,
            "[api]\nbase_url = \"http://10.0.0.2:3333/\"\n\n[geolocation]\nprovider = \"fixed\"\n",
        )
        .expect("write file");

        let loaded = load_from_path(&config_path).expect("partial config loads");
        assert_eq!(loaded.api.base_url, "http://10.0.0.2:3333/");
        assert_eq!(loaded.api.timeout_secs, DEFAULT_API_TIMEOUT_SECS);
        assert_eq!(loaded.geolocation.provider, GeolocationProvider::Fixed);
        assert_eq!(loaded.map, MapConfig::default());
        assert_eq!(loaded.routes, RoutesConfig::default());
    }

    #[test]
    fn theme_mode_is_case_insensitive() {
        let config: Config =
            toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("valid config");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn unknown_theme_mode_is_rejected() {
        let result = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn api_timeout_is_clamped() {
        let api = ApiConfig {
            timeout_secs: 0,
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout_secs(), MIN_API_TIMEOUT_SECS);

        let api = ApiConfig {
            timeout_secs: 10_000,
            ..ApiConfig::default()
        };
        assert_eq!(api.timeout_secs(), MAX_API_TIMEOUT_SECS);
    }

    #[test]
    fn access_token_reads_configured_variable() {
        let map = MapConfig {
            access_token_env: "ORPHANAGE_FINDER_TEST_TOKEN_PRESENT".to_string(),
            ..MapConfig::default()
        };
        std::env::set_var("ORPHANAGE_FINDER_TEST_TOKEN_PRESENT", "pk.test");
        assert_eq!(map.access_token(), Some("pk.test".to_string()));
        std::env::remove_var("ORPHANAGE_FINDER_TEST_TOKEN_PRESENT");
    }

    #[test]
    fn blank_access_token_counts_as_missing() {
        let map = MapConfig {
            access_token_env: "ORPHANAGE_FINDER_TEST_TOKEN_BLANK".to_string(),
            ..MapConfig::default()
        };
        std::env::set_var("ORPHANAGE_FINDER_TEST_TOKEN_BLANK", "  ");
        assert_eq!(map.access_token(), None);
        std::env::remove_var("ORPHANAGE_FINDER_TEST_TOKEN_BLANK");
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn saved_file_loads_back_through_the_override_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            ..Config::default()
        };

        let expected_path = base_dir.join("settings.toml");
        save_to_path(&config, &expected_path).expect("save should succeed");

        let (loaded, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "load should succeed without warning");
        assert_eq!(loaded.general.language, Some("fr".to_string()));
        assert_eq!(loaded.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn load_with_override_from_empty_directory_returns_default() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let (config, warning) = load_with_override(Some(base_dir));
        assert!(warning.is_none(), "should not warn for missing file");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn load_with_override_from_corrupted_file_returns_default_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base_dir = temp_dir.path().to_path_buf();

        let config_path = base_dir.join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("write file");

        let (config, warning) = load_with_override(Some(base_dir));
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let nested_dir = temp_dir.path().join("nested").join("deeply");

        save_to_path(&Config::default(), &nested_dir.join("settings.toml"))
            .expect("save should succeed");
        assert!(nested_dir.join("settings.toml").exists());
    }

    #[test]
    fn saved_config_uses_sectioned_format() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save");
        let content = fs::read_to_string(&config_path).expect("read");

        for section in ["[general]", "[api]", "[map]", "[geolocation]", "[routes]"] {
            assert!(content.contains(section), "missing {section}");
        }
    }
}
