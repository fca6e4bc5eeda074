// SPDX-License-Identifier: MPL-2.0
pub mod animated_spinner;
pub mod map_canvas;

pub use animated_spinner::AnimatedSpinner;
pub use map_canvas::{Callout, MapCanvas, MapEvent};
