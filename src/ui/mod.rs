// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`orphanages_map`] - Map with the orphanage pin, its callout and the footer
//! - [`create_orphanage`] - Registration form posting a new orphanage
//! - [`orphanage_details`] - Target of the map callout
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (spinner, map canvas)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`navbar`] - Navigation bar between the map and the form
//! - [`notifications`] - Toast notification system for user feedback

pub mod create_orphanage;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod orphanage_details;
pub mod orphanages_map;
pub mod styles;
pub mod theming;
pub mod widgets;
