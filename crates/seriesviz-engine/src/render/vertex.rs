use bytemuck::{Pod, Zeroable};

use crate::paint::Color;

/// Colored 2D vertex in NDC.
///
/// This is also the per-instance record for point sprites, so the same slice
/// can be uploaded for every topology.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        1 => Float32x2, // center
        2 => Float32x4  // color
    ];

    #[inline]
    pub fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            pos: [x, y],
            color: color.to_array(),
        }
    }

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }

    pub(crate) fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::INSTANCE_ATTRS,
        }
    }
}

/// Appends an axis-aligned quad as two triangles.
///
/// Corners may be given in any order; the quad covers their bounding box.
pub fn push_quad(out: &mut Vec<Vertex>, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
    let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
    let (y1, y2) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };

    out.extend_from_slice(&[
        Vertex::new(x1, y1, color),
        Vertex::new(x2, y1, color),
        Vertex::new(x1, y2, color),
        Vertex::new(x2, y1, color),
        Vertex::new(x2, y2, color),
        Vertex::new(x1, y2, color),
    ]);
}

/// Appends one line segment (two vertices of a line list).
#[inline]
pub fn push_segment(out: &mut Vec<Vertex>, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
    out.push(Vertex::new(x1, y1, color));
    out.push(Vertex::new(x2, y2, color));
}

/// Unit sprite corner, expanded by the point shader.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(crate) struct SpriteCorner {
    pub offset: [f32; 2],
}

impl SpriteCorner {
    const ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<SpriteCorner>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Two triangles covering `[-0.5, 0.5]²`.
pub(crate) const SPRITE_CORNERS: [SpriteCorner; 6] = [
    SpriteCorner { offset: [-0.5, -0.5] },
    SpriteCorner { offset: [0.5, -0.5] },
    SpriteCorner { offset: [-0.5, 0.5] },
    SpriteCorner { offset: [0.5, -0.5] },
    SpriteCorner { offset: [0.5, 0.5] },
    SpriteCorner { offset: [-0.5, 0.5] },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_is_six_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
    }

    #[test]
    fn quad_is_two_triangles_over_bounding_box() {
        let mut out = Vec::new();
        push_quad(&mut out, 0.5, 0.25, -0.5, -0.25, Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(out.len(), 6);

        let xs: Vec<f32> = out.iter().map(|v| v.pos[0]).collect();
        let ys: Vec<f32> = out.iter().map(|v| v.pos[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), -0.5);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 0.5);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), -0.25);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 0.25);
    }

    #[test]
    fn quad_carries_color() {
        let mut out = Vec::new();
        let c = Color::rgba(0.1, 0.2, 0.3, 0.4);
        push_quad(&mut out, 0.0, 0.0, 1.0, 1.0, c);
        assert!(out.iter().all(|v| v.color == c.to_array()));
    }
}
