//! Middle-thirds Cantor set, one row per construction level.

use crate::coords::PlotArea;
use crate::paint::Hsv;
use crate::render::{push_quad, push_segment, DrawSink};

use super::chart::{AXIS_COLOR, GRID_COLOR};
use super::{ParamStore, Reveal, Visualizer};

pub const KEY: &str = "cantor";

pub const DEFAULT_DEPTH: i32 = 6;
/// Level `d` has `2^d` segments; 12 keeps a frame under 8192 quads.
pub const MAX_DEPTH: i32 = 12;
const REVEAL_RATE: f32 = 1.5;
/// Fraction of a row's height covered by its bars.
const BAR_FILL: f32 = 0.7;

/// Splits every `(left, right)` segment into thirds and keeps the outer two.
///
/// Works in f64: at level 12 a segment is ~1.9e-6 wide, which f32 cannot
/// resolve near 1.0 without drifting.
pub fn refine(segments: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::with_capacity(segments.len() * 2);
    for &(left, right) in segments {
        let third = (right - left) / 3.0;
        out.push((left, left + third));
        out.push((right - third, right));
    }
    out
}

pub struct Cantor {
    params: ParamStore,
}

impl Cantor {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("depth", DEFAULT_DEPTH as f32),
        }
    }
}

impl Default for Cantor {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for Cantor {
    fn title(&self) -> &'static str {
        "Cantor set"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let depth = self.params.int("depth", DEFAULT_DEPTH, 1, MAX_DEPTH) as usize;
        let levels = depth + 1;
        let area = PlotArea::default();
        let row = area.height() / levels as f32;
        let bar_h = row * BAR_FILL;
        let reveal = Reveal::new(time, REVEAL_RATE, levels);
        let row_top = |level: usize| area.y_max - level as f32 * row;

        let mut grid = Vec::with_capacity(levels * 2);
        for level in 0..levels {
            let y = row_top(level) - 0.5 * bar_h;
            push_segment(&mut grid, area.x_min, y, area.x_max, y, GRID_COLOR);
        }

        let mut quads = Vec::new();
        let mut segments = vec![(0.0f64, 1.0f64)];
        for level in 0..levels {
            let alpha = reveal.alpha(level);
            if alpha <= 0.0 {
                break;
            }
            let hsv = Hsv::new(0.58 + 0.055 * level as f32, 0.65, 0.80 + 0.20 * alpha);
            let color = hsv.to_color(alpha);
            let y1 = row_top(level);
            let y2 = y1 - bar_h;
            for &(left, right) in &segments {
                push_quad(&mut quads, area.x_at(left as f32), y2, area.x_at(right as f32), y1, color);
            }
            if level + 1 < levels {
                segments = refine(&segments);
            }
        }

        let mut axes = Vec::with_capacity(4 + levels * 2);
        push_segment(&mut axes, area.x_min, area.y_min, area.x_max, area.y_min, AXIS_COLOR);
        push_segment(&mut axes, area.x_min, area.y_min, area.x_min, area.y_max, AXIS_COLOR);
        for level in 0..levels {
            let y = row_top(level) - 0.5 * bar_h;
            push_segment(&mut axes, area.x_min - 0.01, y, area.x_min + 0.02, y, AXIS_COLOR);
        }

        sink.draw_lines(&grid);
        sink.draw_triangles(&quads);
        sink.draw_lines(&axes);
    }

    fn params(&self) -> &ParamStore {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamStore {
        &mut self.params
    }
}
