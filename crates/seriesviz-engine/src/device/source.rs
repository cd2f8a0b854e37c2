use winit::dpi::PhysicalSize;

/// A drawable surface looked up by id, ready to hand to wgpu.
pub struct ResolvedSurface {
    pub target: wgpu::SurfaceTarget<'static>,
    /// Current drawable size in physical pixels.
    pub size: PhysicalSize<u32>,
}

/// Maps opaque surface ids to drawable surfaces.
///
/// Hosts own their windows; the engine only ever sees them through this lookup.
pub trait SurfaceSource {
    /// Returns `None` when no surface is registered under `surface_id`.
    fn resolve(&self, surface_id: &str) -> Option<ResolvedSurface>;
}
