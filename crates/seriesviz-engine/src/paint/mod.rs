//! Color model shared by the visualizers.
//!
//! - straight-alpha RGBA (`Color`)
//! - HSV mapping used for per-term hue sweeps

pub mod color;
pub mod hsv;

pub use color::Color;
pub use hsv::{hsv_to_rgb, hue_sweep, Hsv};
