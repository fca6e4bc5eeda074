// SPDX-License-Identifier: MPL-2.0
//! HTTP access to the orphanage directory API.
//!
//! - [`submission`] turns a draft into the ordered multipart payload.
//! - [`client`] posts that payload and maps the outcome to
//!   [`SubmitError`](crate::error::SubmitError).

pub mod client;
pub mod submission;

pub use client::{ApiClient, CREATE_ORPHANAGE_PATH};
pub use submission::{ImagePart, Submission};

use std::time::Duration;

/// User agent sent with every outgoing request.
pub const USER_AGENT: &str = concat!("OrphanageFinder/", env!("CARGO_PKG_VERSION"));

/// Builds the HTTP client shared by API, tile and geolocation requests.
///
/// # Errors
///
/// Fails when the TLS backend cannot be initialized.
pub fn http_client(timeout: Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}
