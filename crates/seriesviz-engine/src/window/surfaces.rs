use std::collections::HashMap;
use std::sync::Arc;

use winit::window::Window;

use crate::device::{ResolvedSurface, SurfaceSource};

/// Windows registered by surface id.
///
/// Cloning is cheap and shares the underlying windows.
#[derive(Clone, Default)]
pub struct WindowSurfaces {
    windows: HashMap<String, Arc<Window>>,
}

impl WindowSurfaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `window` under `surface_id`, replacing any previous entry.
    pub fn insert(&mut self, surface_id: impl Into<String>, window: Arc<Window>) {
        self.windows.insert(surface_id.into(), window);
    }

    pub fn remove(&mut self, surface_id: &str) -> Option<Arc<Window>> {
        self.windows.remove(surface_id)
    }

}

impl SurfaceSource for WindowSurfaces {
    fn resolve(&self, surface_id: &str) -> Option<ResolvedSurface> {
        let window = self.windows.get(surface_id)?;
        Some(ResolvedSurface {
            target: wgpu::SurfaceTarget::from(Arc::clone(window)),
            size: window.inner_size(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_registry_resolves_nothing() {
        let mut surfaces = WindowSurfaces::new();
        assert!(surfaces.resolve("main").is_none());
        assert!(surfaces.remove("main").is_none());
    }
}
