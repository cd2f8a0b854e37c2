use anyhow::Result;

use crate::render::DrawSink;

/// A live rendering context bound to one surface.
pub trait GraphicsContext {
    /// Renders one frame sized `width × height` pixels.
    ///
    /// `draw` is called at most once with a sink that targets the frame. A
    /// skipped frame (zero size, transient surface loss) returns `Ok` without
    /// calling it.
    fn frame(&mut self, width: f32, height: f32, draw: &mut dyn FnMut(&mut dyn DrawSink)) -> Result<()>;
}

/// Creates graphics contexts on named surfaces.
pub trait ContextFactory {
    type Context: GraphicsContext;

    /// Creates a context and prepares the renderer on `surface_id`.
    fn create(&mut self, surface_id: &str) -> Result<Self::Context>;
}
