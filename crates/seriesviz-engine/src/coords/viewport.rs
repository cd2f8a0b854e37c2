/// Drawable size in physical pixels.
///
/// Geometry itself lives in NDC; the viewport is only needed for pixel-sized
/// features (point sprites) and for the rasterizer viewport.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width >= 1.0 && self.height >= 1.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Clamps this viewport to a render target extent.
    ///
    /// Non-finite or negative sizes collapse to zero.
    #[inline]
    pub fn clamped_to(self, max_width: u32, max_height: u32) -> Self {
        let clamp = |v: f32, max: u32| {
            if v.is_finite() { v.clamp(0.0, max as f32) } else { 0.0 }
        };
        Self::new(clamp(self.width, max_width), clamp(self.height, max_height))
    }
}
