//! GPU rendering subsystem.
//!
//! Visualizers emit vertex batches through [`DrawSink`]; the wgpu
//! [`Renderer`] turns each batch into one draw call.
//!
//! Convention:
//! - positions are NDC (`[-1, 1]`, +Y up) and pass through the shader unchanged
//! - colors are straight alpha, blended `SrcAlpha, OneMinusSrcAlpha`

mod ctx;
mod renderer;
mod sink;
mod stream;
mod vertex;

#[cfg(test)]
pub(crate) mod testing;

pub use ctx::{RenderCtx, RenderTarget};
pub use renderer::{FramePainter, Renderer, RendererConfig};
pub use sink::{DrawSink, Topology};
pub use vertex::{push_quad, push_segment, Vertex};
