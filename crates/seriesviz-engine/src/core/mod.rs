//! Core host-facing contracts.
//!
//! Defines the interface between the winit runtime and the host application
//! without leaking runtime internals.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
