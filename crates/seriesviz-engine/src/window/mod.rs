//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and window, and publishes the window as a named
//! drawable surface.

mod runtime;
mod surfaces;

pub use runtime::{Runtime, RuntimeConfig};
pub use surfaces::WindowSurfaces;
