//! Engine boundary: context lifecycle, visualizer registry and dispatch.
//!
//! `SeriesManager` is generic over a [`ContextFactory`] so the lifecycle and
//! dispatch rules can run against a fake context in tests; hosts use
//! [`GpuContextFactory`].

mod context;
mod gpu_context;
mod series_manager;

pub use context::{ContextFactory, GraphicsContext};
pub use gpu_context::{GpuContext, GpuContextFactory};
pub use series_manager::{ManagerState, SeriesManager, DEFAULT_ACTIVE};
