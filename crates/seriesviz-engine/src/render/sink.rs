use super::Vertex;

/// Sprite width range accepted by the GPU point pipeline, in pixels.
const POINT_SIZE_RANGE: std::ops::RangeInclusive<f32> = 1.0..=64.0;

/// Clamps a requested point size into [`POINT_SIZE_RANGE`].
pub(crate) fn sprite_size(point_size: f32) -> f32 {
    if point_size.is_finite() {
        point_size.clamp(*POINT_SIZE_RANGE.start(), *POINT_SIZE_RANGE.end())
    } else {
        *POINT_SIZE_RANGE.start()
    }
}

/// Primitive topology of one draw batch.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Topology {
    Points,
    Lines,
    LineStrip,
    Triangles,
}

/// Immediate-mode draw target for visualizers.
///
/// Each call is one batch: the vertex list is uploaded and drawn with a single
/// draw call. Empty lists are ignored. Batches composite in call order.
pub trait DrawSink {
    /// Draws square point sprites `point_size` pixels wide.
    ///
    /// The GPU sink clamps the size to `1..=64` px; a non-finite size draws
    /// 1 px sprites.
    fn draw_points(&mut self, vertices: &[Vertex], point_size: f32);

    /// Draws independent segments from consecutive vertex pairs.
    fn draw_lines(&mut self, vertices: &[Vertex]);

    /// Draws a connected polyline through all vertices.
    fn draw_line_strip(&mut self, vertices: &[Vertex]);

    /// Draws a triangle list.
    fn draw_triangles(&mut self, vertices: &[Vertex]);
}
