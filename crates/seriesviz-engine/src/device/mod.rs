//! GPU device + surface management.
//!
//! This module is responsible for:
//! - resolving a named drawable surface into a wgpu surface target
//! - creating the wgpu Instance/Adapter/Device/Queue
//! - configuring the Surface and acquiring frames for rendering

mod error;
mod frame;
mod gpu;
mod init;
mod source;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use source::{ResolvedSurface, SurfaceSource};
