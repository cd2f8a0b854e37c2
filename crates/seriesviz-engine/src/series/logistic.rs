//! Logistic map bifurcation diagram, `x ← r·x·(1−x)`.

use crate::coords::{safe_scale, PlotArea};
use crate::paint::{Color, Hsv};
use crate::render::{push_segment, DrawSink, Vertex};

use super::chart::{AXIS_COLOR, GRID_COLOR};
use super::{ParamStore, Reveal, Visualizer};

pub const KEY: &str = "logistic";

pub const DEFAULT_GROWTH_RATE: f32 = 4.0;
/// Left edge of the growth-rate sweep.
pub const R_MIN: f32 = 1.0;
pub const R_MAX: f32 = 4.0;
/// Growth rate where the period-doubling cascade turns chaotic.
pub const CHAOS_ONSET: f32 = 3.57;

const WARMUP: usize = 300;
const SAMPLES: usize = 120;
const X0: f32 = 0.5;
const COLUMNS_PER_PIXEL: f32 = 0.7;
const MIN_COLUMNS: usize = 200;
const MAX_COLUMNS: usize = 1400;
/// Fraction of the sweep revealed per second.
const SWEEP_RATE: f32 = 0.5;
const POINT_SIZE: f32 = 1.5;
const R_TICKS: [f32; 6] = [1.5, 2.0, 2.5, 3.0, 3.5, 4.0];
const X_TICKS: [f32; 3] = [0.25, 0.5, 0.75];
const CHAOS_COLOR: Color = Color::rgba(0.85, 0.15, 0.15, 0.55);

/// Iterates the map `warmup` times from `x0`, then returns the next `samples` states.
pub fn orbit(r: f32, x0: f32, warmup: usize, samples: usize) -> Vec<f32> {
    let step = |x: f32| r * x * (1.0 - x);
    let mut x = x0;
    for _ in 0..warmup {
        x = step(x);
    }
    (0..samples)
        .map(|_| {
            x = step(x);
            x
        })
        .collect()
}

/// Sweep resolution for a surface `width` pixels wide.
pub fn column_count(width: f32) -> usize {
    let w = if width.is_finite() { width.max(0.0) } else { 0.0 };
    ((w * COLUMNS_PER_PIXEL) as usize).clamp(MIN_COLUMNS, MAX_COLUMNS)
}

pub struct Logistic {
    params: ParamStore,
}

impl Logistic {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("growth_rate", DEFAULT_GROWTH_RATE),
        }
    }
}

impl Default for Logistic {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for Logistic {
    fn title(&self) -> &'static str {
        "Logistic map"
    }

    fn render(&self, time: f32, width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let r_max = self.params.float("growth_rate", DEFAULT_GROWTH_RATE, R_MIN, R_MAX);
        let span = safe_scale(r_max - R_MIN);
        let area = PlotArea::default();
        let x_of = |r: f32| area.x_at((r - R_MIN) / span);

        let cols = column_count(width);
        let sweep = Reveal::new(time, SWEEP_RATE, 1).revealed().min(1.0);
        let visible = ((cols as f32 * sweep) as usize).clamp(1, cols);
        let r_ticks = R_TICKS.iter().copied().filter(|&r| r <= r_max);

        let mut grid = Vec::new();
        for v in X_TICKS {
            let y = area.y_at(v);
            push_segment(&mut grid, area.x_min, y, area.x_max, y, GRID_COLOR);
        }
        for r in r_ticks.clone() {
            let x = x_of(r);
            push_segment(&mut grid, x, area.y_min, x, area.y_max, GRID_COLOR);
        }

        let mut points = Vec::with_capacity(visible * SAMPLES);
        let denom = (cols - 1).max(1) as f32;
        for col in 0..visible {
            let t = col as f32 / denom;
            let r = R_MIN + (r_max - R_MIN) * t;
            let x = area.x_at(t);
            let color = Hsv::new(0.65 + 0.15 * t, 0.75, 0.55).to_color(0.6);
            for sample in orbit(r, X0, WARMUP, SAMPLES) {
                points.push(Vertex::new(x, area.y_at(sample.clamp(0.0, 1.0)), color));
            }
        }

        let mut axes = Vec::new();
        push_segment(&mut axes, area.x_min, area.y_min, area.x_max, area.y_min, AXIS_COLOR);
        push_segment(&mut axes, area.x_min, area.y_min, area.x_min, area.y_max, AXIS_COLOR);
        for r in r_ticks {
            let x = x_of(r);
            push_segment(&mut axes, x, area.y_min - 0.015, x, area.y_min + 0.01, AXIS_COLOR);
        }
        for v in X_TICKS {
            let y = area.y_at(v);
            push_segment(&mut axes, area.x_min - 0.015, y, area.x_min + 0.01, y, AXIS_COLOR);
        }
        if r_max > CHAOS_ONSET {
            let x = x_of(CHAOS_ONSET);
            push_segment(&mut axes, x, area.y_min, x, area.y_max, CHAOS_COLOR);
        }

        sink.draw_lines(&grid);
        sink.draw_lines(&axes);
        sink.draw_points(&points, POINT_SIZE);
    }

    fn params(&self) -> &ParamStore {
        &self.params
    }

    fn params_mut(&mut self) -> &mut ParamStore {
        &mut self.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::Recorder;
    use crate::render::Topology;

    fn record(growth_rate: f32, time: f32, width: f32) -> Recorder {
        let mut v = Logistic::new();
        v.set_param("growth_rate", growth_rate);
        let mut rec = Recorder::default();
        v.render(time, width, 600.0, &mut rec);
        rec
    }

    #[test]
    fn stable_regime_settles_on_fixed_point() {
        let xs = orbit(2.5, X0, WARMUP, SAMPLES);
        assert!(xs.iter().all(|x| (x - 0.6).abs() < 1e-4));
    }

    #[test]
    fn period_two_regime_alternates() {
        let xs = orbit(3.2, X0, WARMUP, 10);
        assert!((xs[0] - xs[2]).abs() < 1e-4);
        assert!((xs[0] - xs[1]).abs() > 0.1);
    }

    #[test]
    fn chaotic_orbit_stays_in_unit_interval() {
        assert!(orbit(3.9, X0, WARMUP, SAMPLES).iter().all(|x| (0.0..=1.0).contains(x)));
    }

    #[test]
    fn column_count_tracks_width() {
        assert_eq!(column_count(800.0), 560);
        assert_eq!(column_count(10.0), MIN_COLUMNS);
        assert_eq!(column_count(1e6), MAX_COLUMNS);
        assert_eq!(column_count(f32::NAN), MIN_COLUMNS);
    }

    #[test]
    fn sweep_reveals_columns_left_to_right() {
        let partial = record(4.0, 1.0, 800.0);
        let full = record(4.0, 10.0, 800.0);
        let count = |r: &Recorder| r.of(Topology::Points).map(|b| b.vertices.len()).sum::<usize>();
        assert_eq!(count(&partial), 280 * SAMPLES);
        assert_eq!(count(&full), 560 * SAMPLES);
        assert_eq!(full.of(Topology::Points).next().map(|b| b.point_size), Some(POINT_SIZE));
    }

    #[test]
    fn chaos_marker_only_past_onset() {
        let axes = |r: &Recorder| r.of(Topology::Lines).nth(1).map(|b| b.vertices.len());
        // frame + 6 r ticks + 3 x ticks + marker
        assert_eq!(axes(&record(4.0, 10.0, 800.0)), Some(4 + 12 + 6 + 2));
        // frame + 5 r ticks + 3 x ticks
        assert_eq!(axes(&record(3.5, 10.0, 800.0)), Some(4 + 10 + 6));
    }

    #[test]
    fn degenerate_range_stays_finite() {
        let rec = record(1.0, 10.0, 800.0);
        assert!(rec.all_finite());
        assert_eq!(rec.topologies(), vec![Topology::Lines, Topology::Lines, Topology::Points]);
    }
}
