// SPDX-License-Identifier: MPL-2.0
//! Image handling for the registration form.
//!
//! - [`selection`] reads picked files, sniffs their format and decodes
//!   preview thumbnails.
//! - [`preview`] owns the Iced image handles behind preview ids and frees
//!   them on release.

pub mod preview;
pub mod selection;

pub use preview::PreviewStore;
pub use selection::{load_selected_images, pick_images, PickedFile};
