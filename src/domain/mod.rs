// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core types with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the form logic
//! can be tested without a window, a network, or a file dialog.
//!
//! # Modules
//!
//! - [`geo`]: Geographic types ([`Coordinate`](geo::Coordinate)) and
//!   Web-Mercator projection helpers
//! - [`orphanage`]: The registration draft ([`OrphanageDraft`](orphanage::OrphanageDraft))
//!   and its image/preview bookkeeping

pub mod geo;
pub mod orphanage;
