// SPDX-License-Identifier: MPL-2.0
//! Client for the orphanage directory HTTP API.

use super::submission::Submission;
use crate::app::config::ApiConfig;
use crate::error::SubmitError;
use reqwest::Url;
use std::time::Duration;

/// Resource path, relative to the API base, that accepts new orphanages.
pub const CREATE_ORPHANAGE_PATH: &str = "orphanages";

/// Cheap-to-clone handle on the API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: reqwest::Client,
}

impl ApiClient {
    /// Builds a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidUrl`] when the base URL does not parse,
    /// or [`SubmitError::Network`] when the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, SubmitError> {
        let base_url = parse_base_url(&config.base_url)?;
        let http = super::http_client(Duration::from_secs(config.timeout_secs()))
            .map_err(|err| SubmitError::Network(err.to_string()))?;
        Ok(Self { base_url, http })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL the registration form posts to.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::InvalidUrl`] if the path cannot be joined.
    pub fn orphanages_url(&self) -> Result<Url, SubmitError> {
        self.base_url
            .join(CREATE_ORPHANAGE_PATH)
            .map_err(|err| SubmitError::InvalidUrl(err.to_string()))
    }

    /// Posts a new orphanage as `multipart/form-data`.
    ///
    /// Any 2xx status counts as success; the response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns the [`SubmitError`] matching the failure: timeout, transport
    /// error, or non-success status.
    pub async fn create_orphanage(&self, submission: Submission) -> Result<(), SubmitError> {
        let url = self.orphanages_url()?;
        let image_count = submission.images().len();
        let form = submission.into_form()?;

        tracing::info!(%url, images = image_count, "submitting orphanage");

        let response = self.http.post(url).multipart(form).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SubmitError::Status(status.as_u16()));
        }
        Ok(())
    }
}

/// Parses the base URL, making sure it ends with a slash so relative paths
/// are appended rather than replacing the last segment.
fn parse_base_url(raw: &str) -> Result<Url, SubmitError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&normalized).map_err(|err| SubmitError::InvalidUrl(format!("{trimmed}: {err}")))
}
