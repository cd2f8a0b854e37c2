//! Recording draw sink for GPU-free tests.

use super::{DrawSink, Topology, Vertex};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Batch {
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
    pub point_size: f32,
}

/// Captures batches in submission order; empty batches are dropped like the renderer does.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub batches: Vec<Batch>,
}

impl Recorder {
    pub fn of(&self, topology: Topology) -> impl Iterator<Item = &Batch> {
        self.batches.iter().filter(move |b| b.topology == topology)
    }

    pub fn topologies(&self) -> Vec<Topology> {
        self.batches.iter().map(|b| b.topology).collect()
    }

    pub fn all_finite(&self) -> bool {
        self.batches
            .iter()
            .flat_map(|b| &b.vertices)
            .all(|v| v.pos.iter().chain(&v.color).all(|c| c.is_finite()))
    }

    fn push(&mut self, topology: Topology, vertices: &[Vertex], point_size: f32) {
        if vertices.is_empty() {
            return;
        }
        self.batches.push(Batch {
            topology,
            vertices: vertices.to_vec(),
            point_size,
        });
    }
}

impl DrawSink for Recorder {
    fn draw_points(&mut self, vertices: &[Vertex], point_size: f32) {
        self.push(Topology::Points, vertices, point_size);
    }

    fn draw_lines(&mut self, vertices: &[Vertex]) {
        self.push(Topology::Lines, vertices, 1.0);
    }

    fn draw_line_strip(&mut self, vertices: &[Vertex]) {
        self.push(Topology::LineStrip, vertices, 1.0);
    }

    fn draw_triangles(&mut self, vertices: &[Vertex]) {
        self.push(Topology::Triangles, vertices, 1.0);
    }
}
