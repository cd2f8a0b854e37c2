use anyhow::{anyhow, Context as _, Result};
use winit::dpi::PhysicalSize;

use crate::device::{Gpu, GpuInit, SurfaceErrorAction, SurfaceSource};
use crate::render::{DrawSink, RenderCtx, RenderTarget, Renderer, RendererConfig};

use super::{ContextFactory, GraphicsContext};

/// wgpu-backed context: one `Gpu` plus the renderer initialized for its surface.
pub struct GpuContext {
    gpu: Gpu,
    renderer: Renderer,
}

impl GpuContext {
    /// Brings the surface configuration in line with the requested pixel size.
    fn sync_size(&mut self, width: u32, height: u32) {
        let wanted = PhysicalSize::new(width, height);
        if self.gpu.size() != wanted {
            log::debug!("surface resized to {width}x{height}");
            self.gpu.resize(wanted);
        }
    }
}

/// Converts a requested float size to whole pixels, `None` for zero-area.
fn pixel_size(width: f32, height: f32) -> Option<(u32, u32)> {
    let to_px = |v: f32| if v.is_finite() && v >= 1.0 { v.round() as u32 } else { 0 };
    let (w, h) = (to_px(width), to_px(height));
    (w > 0 && h > 0).then_some((w, h))
}

impl GraphicsContext for GpuContext {
    fn frame(&mut self, width: f32, height: f32, draw: &mut dyn FnMut(&mut dyn DrawSink)) -> Result<()> {
        let Some((w, h)) = pixel_size(width, height) else {
            return Ok(());
        };
        self.sync_size(w, h);

        let mut frame = match self.gpu.begin_frame() {
            Ok(frame) => frame,
            Err(err) => {
                let reason = err.to_string();
                return match self.gpu.handle_surface_error(err) {
                    SurfaceErrorAction::Fatal => Err(anyhow!("surface acquisition failed: {reason}")),
                    action => {
                        log::debug!("frame skipped after surface error: {reason} ({action:?})");
                        Ok(())
                    }
                };
            }
        };

        {
            let ctx = RenderCtx::new(self.gpu.device(), self.gpu.queue(), (w, h));
            let mut target = RenderTarget::new(&mut frame.encoder, &frame.view);
            if let Some(mut painter) = self.renderer.begin_frame(&ctx, &mut target, w as f32, h as f32) {
                draw(&mut painter);
            }
        }

        self.gpu.submit(frame);
        Ok(())
    }
}

/// Builds [`GpuContext`]s on surfaces looked up through a [`SurfaceSource`].
pub struct GpuContextFactory<S> {
    surfaces: S,
    gpu_init: GpuInit,
    renderer: RendererConfig,
}

impl<S: SurfaceSource> GpuContextFactory<S> {
    pub fn new(surfaces: S) -> Self {
        Self::with_config(surfaces, GpuInit::default(), RendererConfig::default())
    }

    pub fn with_config(surfaces: S, gpu_init: GpuInit, renderer: RendererConfig) -> Self {
        Self {
            surfaces,
            gpu_init,
            renderer,
        }
    }
}

impl<S: SurfaceSource> ContextFactory for GpuContextFactory<S> {
    type Context = GpuContext;

    fn create(&mut self, surface_id: &str) -> Result<GpuContext> {
        let resolved = self
            .surfaces
            .resolve(surface_id)
            .with_context(|| format!("no surface registered as {surface_id:?}"))?;

        let gpu = pollster::block_on(Gpu::new(resolved, self.gpu_init.clone()))
            .context("GPU context creation failed")?;

        let mut renderer = Renderer::new(self.renderer.clone());
        renderer
            .initialize(gpu.device(), gpu.surface_format())
            .context("renderer initialization failed")?;

        Ok(GpuContext { gpu, renderer })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::ResolvedSurface;

    struct NoSurfaces;

    impl SurfaceSource for NoSurfaces {
        fn resolve(&self, _surface_id: &str) -> Option<ResolvedSurface> {
            None
        }
    }

    #[test]
    fn unknown_surface_fails_before_touching_the_gpu() {
        let mut factory = GpuContextFactory::new(NoSurfaces);
        let err = factory.create("nope").err().map(|e| format!("{e:#}"));
        assert!(err.is_some_and(|e| e.contains("nope")));
    }

    #[test]
    fn pixel_size_rejects_empty_and_non_finite() {
        assert_eq!(pixel_size(800.0, 600.0), Some((800, 600)));
        assert_eq!(pixel_size(799.6, 600.2), Some((800, 600)));
        assert_eq!(pixel_size(0.0, 600.0), None);
        assert_eq!(pixel_size(f32::NAN, 600.0), None);
        assert_eq!(pixel_size(800.0, -1.0), None);
    }
}
