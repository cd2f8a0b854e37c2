//! Seriesviz engine crate.
//!
//! Animated plots of infinite series, fractal constructions and chaotic maps,
//! rendered immediate-mode on wgpu. Hosts drive a [`manager::SeriesManager`]
//! with elapsed time and surface size each frame.

pub mod coords;
pub mod core;
pub mod device;
pub mod logging;
pub mod manager;
pub mod paint;
pub mod render;
pub mod series;
pub mod time;
pub mod window;
