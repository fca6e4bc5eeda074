// SPDX-License-Identifier: MPL-2.0
//! Slippy-map support shared by the map screen and the location picker.
//!
//! - [`viewport`] maps between coordinates and widget pixels.
//! - [`tiles`] downloads and caches raster tiles.

pub mod tiles;
pub mod viewport;

pub use tiles::{render_tile_url, TileCache, TileSource, TileState};
pub use viewport::{TilePlacement, Viewport};
