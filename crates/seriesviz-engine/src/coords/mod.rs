//! Coordinate helpers.
//!
//! Canonical space is NDC: `[-1, 1]` on both axes, +Y up. Plots reserve
//! margins inside that square for axis decoration.

mod plot_area;
mod viewport;

pub use plot_area::{safe_scale, Margins, PlotArea, SCALE_EPSILON};
pub use viewport::Viewport;
