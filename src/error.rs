// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Image(String),
    Submit(SubmitError),
    Geolocation(GeolocationError),
}

/// Reasons an orphanage submission can fail.
/// Used to provide user-friendly, localized error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// The configured API base URL cannot be parsed or joined.
    InvalidUrl(String),

    /// A part of the multipart payload was rejected (e.g. bad MIME type).
    InvalidPayload(String),

    /// Connection refused, DNS failure, reset, etc.
    Network(String),

    /// The request did not complete within the configured timeout.
    Timeout,

    /// The server answered with a non-success status code.
    Status(u16),
}

impl SubmitError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            SubmitError::InvalidUrl(_) => "error-submit-invalid-url",
            SubmitError::InvalidPayload(_) => "error-submit-invalid-payload",
            SubmitError::Network(_) => "error-submit-network",
            SubmitError::Timeout => "error-submit-timeout",
            SubmitError::Status(_) => "error-submit-status",
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return SubmitError::Timeout;
        }
        if let Some(status) = err.status() {
            return SubmitError::Status(status.as_u16());
        }
        SubmitError::Network(err.to_string())
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::InvalidUrl(url) => write!(f, "Invalid API URL: {}", url),
            SubmitError::InvalidPayload(msg) => write!(f, "Invalid payload: {}", msg),
            SubmitError::Network(msg) => write!(f, "Network error: {}", msg),
            SubmitError::Timeout => write!(f, "Request timed out"),
            SubmitError::Status(code) => write!(f, "Server answered with status {}", code),
        }
    }
}

/// Failures of the device position lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeolocationError {
    /// The lookup endpoint could not be reached.
    Network(String),

    /// The endpoint answered but without usable coordinates.
    InvalidResponse(String),
}

impl GeolocationError {
    pub fn i18n_key(&self) -> &'static str {
        match self {
            GeolocationError::Network(_) => "notification-location-network-error",
            GeolocationError::InvalidResponse(_) => "notification-location-invalid-error",
        }
    }
}

impl fmt::Display for GeolocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeolocationError::Network(msg) => write!(f, "Geolocation lookup failed: {}", msg),
            GeolocationError::InvalidResponse(msg) => {
                write!(f, "Geolocation response unusable: {}", msg)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Submit(e) => write!(f, "Submit Error: {}", e),
            Error::Geolocation(e) => write!(f, "Geolocation Error: {}", e),
        }
    }
}

impl From<SubmitError> for Error {
    fn from(err: SubmitError) -> Self {
        Error::Submit(err)
    }
}

impl From<GeolocationError> for Error {
    fn from(err: GeolocationError) -> Self {
        Error::Geolocation(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
