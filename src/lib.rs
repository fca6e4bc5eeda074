// SPDX-License-Identifier: MPL-2.0
//! `orphanage_finder` is a desktop orphanage directory built with the Iced GUI
//! framework.
//!
//! Visitors browse orphanages on a map, open an orphanage's details from its
//! callout, and register a new orphanage through a form that posts a
//! multipart request to the directory API. Strings are localized with Fluent
//! and settings are read from a TOML file in the platform config directory.

pub mod api;
pub mod app;
pub mod domain;
pub mod error;
pub mod geolocation;
pub mod i18n;
pub mod map;
pub mod media;
pub mod ui;
