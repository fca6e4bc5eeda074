// SPDX-License-Identifier: MPL-2.0
//! Position lookup for the registration form.
//!
//! The form never talks to a location source directly. It receives a
//! [`PositionProvider`] and tracks the lookup as a [`PositionStatus`].

use crate::app::config::{GeolocationConfig, GeolocationProvider, MapConfig};
use crate::domain::geo::Coordinate;
use crate::error::GeolocationError;
use futures_util::future::BoxFuture;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// A source of the device's approximate position.
pub trait PositionProvider: Send + Sync + fmt::Debug {
    /// Starts a lookup. The returned future owns everything it needs.
    fn locate(&self) -> BoxFuture<'static, Result<Coordinate, GeolocationError>>;
}

/// Progress of a position lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PositionStatus {
    Pending,
    Resolved(Coordinate),
    /// The lookup failed; the map falls back to `fallback`.
    Failed { fallback: Coordinate },
}

impl PositionStatus {
    /// Map center to use, or `None` while the lookup is pending.
    #[must_use]
    pub fn center(&self) -> Option<Coordinate> {
        match self {
            PositionStatus::Pending => None,
            PositionStatus::Resolved(coordinate) => Some(*coordinate),
            PositionStatus::Failed { fallback } => Some(*fallback),
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, PositionStatus::Pending)
    }
}

/// Always resolves to the same coordinate.
#[derive(Debug, Clone, Copy)]
pub struct FixedPositionProvider {
    position: Coordinate,
}

impl FixedPositionProvider {
    #[must_use]
    pub fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

impl PositionProvider for FixedPositionProvider {
    fn locate(&self) -> BoxFuture<'static, Result<Coordinate, GeolocationError>> {
        let position = self.position;
        Box::pin(async move { Ok(position) })
    }
}

/// Looks the position up from the public IP address.
///
/// The endpoint must answer with a JSON object carrying numeric
/// `latitude` and `longitude` fields.
#[derive(Debug, Clone)]
pub struct IpPositionProvider {
    endpoint: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct IpLocation {
    latitude: Option<f64>,
    longitude: Option<f64>,
}

impl IpPositionProvider {
    /// # Errors
    ///
    /// Returns [`GeolocationError::Network`] when the HTTP client cannot be
    /// built.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, GeolocationError> {
        let http = crate::api::http_client(timeout)
            .map_err(|err| GeolocationError::Network(err.to_string()))?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PositionProvider for IpPositionProvider {
    fn locate(&self) -> BoxFuture<'static, Result<Coordinate, GeolocationError>> {
        let http = self.http.clone();
        let endpoint = self.endpoint.clone();

        Box::pin(async move {
            let response = http
                .get(&endpoint)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|err| GeolocationError::Network(err.to_string()))?;

            let body: IpLocation = response
                .json()
                .await
                .map_err(|err| GeolocationError::InvalidResponse(err.to_string()))?;

            coordinate_from(body)
        })
    }
}

fn coordinate_from(location: IpLocation) -> Result<Coordinate, GeolocationError> {
    match (location.latitude, location.longitude) {
        (Some(latitude), Some(longitude)) => {
            let coordinate = Coordinate::new(latitude, longitude);
            if coordinate.is_valid() {
                Ok(coordinate)
            } else {
                Err(GeolocationError::InvalidResponse(
                    "non-finite coordinates".to_string(),
                ))
            }
        }
        _ => Err(GeolocationError::InvalidResponse(
            "missing latitude or longitude".to_string(),
        )),
    }
}

/// Builds the provider selected in the configuration.
///
/// Falls back to a fixed provider on the default center if the IP provider
/// cannot be constructed.
#[must_use]
pub fn provider_from_config(
    geolocation: &GeolocationConfig,
    map: &MapConfig,
) -> Arc<dyn PositionProvider> {
    match geolocation.provider {
        GeolocationProvider::Fixed => Arc::new(FixedPositionProvider::new(map.default_center())),
        GeolocationProvider::Ip => {
            let timeout = Duration::from_secs(geolocation.timeout_secs.max(1));
            match IpPositionProvider::new(geolocation.endpoint.clone(), timeout) {
                Ok(provider) => Arc::new(provider),
                Err(err) => {
                    tracing::warn!(error = %err, "ip geolocation unavailable, using fixed position");
                    Arc::new(FixedPositionProvider::new(map.default_center()))
                }
            }
        }
    }
}
