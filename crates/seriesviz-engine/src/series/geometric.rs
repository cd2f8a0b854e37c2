//! Geometric series `Σ r^k`, converging to `1/(1-r)` when `|r| < 1`.

use crate::paint::{Color, Hsv};
use crate::render::DrawSink;

use super::chart::{nice_step, signed_extent, Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "geometric";

pub const DEFAULT_RATIO: f32 = 0.7;
pub const DEFAULT_TERMS: i32 = 15;
pub const MAX_TERMS: i32 = 50;
const RATIO_RANGE: (f32, f32) = (-2.0, 2.0);
const REVEAL_RATE: f32 = 8.0;
/// Below this `|1 - r|` the closed form is treated as undefined.
const BOUNDARY_EPSILON: f32 = 1e-6;

/// `[1, r, r², …, r^(n-1)]`.
pub fn terms(ratio: f32, n: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(n);
    let mut term = 1.0f32;
    for _ in 0..n {
        out.push(term);
        term *= ratio;
    }
    out
}

/// `1/(1-r)` for a convergent ratio, `None` otherwise.
pub fn limit(ratio: f32) -> Option<f32> {
    (ratio.abs() < 1.0 && (1.0 - ratio).abs() > BOUNDARY_EPSILON).then(|| 1.0 / (1.0 - ratio))
}

pub struct Geometric {
    params: ParamStore,
}

impl Geometric {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new()
                .with("ratio", DEFAULT_RATIO)
                .with("terms", DEFAULT_TERMS as f32),
        }
    }

    fn ratio(&self) -> f32 {
        self.params.float("ratio", DEFAULT_RATIO, RATIO_RANGE.0, RATIO_RANGE.1)
    }
}

impl Default for Geometric {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for Geometric {
    fn title(&self) -> &'static str {
        "Geometric series"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let ratio = self.ratio();
        let n = self.params.int("terms", DEFAULT_TERMS, 1, MAX_TERMS) as usize;
        let terms = terms(ratio, n);
        let limit = limit(ratio);
        let scale = signed_extent(&terms, limit) * 1.1;
        BarChart {
            terms: &terms,
            baseline: Baseline::Centered,
            scale,
            grid_step: nice_step(scale / 4.0),
            reveal_rate: REVEAL_RATE,
            palette: Palette::Signed {
                positive: Hsv::new(0.38, 0.75, 0.75),
                negative: Hsv::new(0.0, 0.75, 0.80),
            },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.80, 0.55, 0.05),
            limit,
            limit_color: Color::rgb(0.85, 0.20, 0.20),
        }
        .render(time, sink);
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
    use crate::coords::PlotArea;
    use crate::render::testing::Recorder;
    use crate::render::Topology;
    use crate::series::partial_sums;

    fn lines(vis: &Geometric, time: f32) -> usize {
        let mut rec = Recorder::default();
        vis.render(time, 800.0, 600.0, &mut rec);
        assert!(rec.all_finite());
        rec.of(Topology::Lines).count()
    }

    #[test]
    fn half_ratio_ten_terms() {
        let sums = partial_sums(&terms(0.5, 10));
        assert!((sums[9] - 1.998_046_9).abs() < 1e-6);
        assert_eq!(limit(0.5), Some(2.0));
    }

    #[test]
    fn limit_marker_drawn_at_two() {
        let mut g = Geometric::new();
        g.set_param("ratio", 0.5);
        g.set_param("terms", 10.0);
        let mut rec = Recorder::default();
        g.render(100.0, 800.0, 600.0, &mut rec);

        // grid, axes, marker
        let batches: Vec<_> = rec.of(Topology::Lines).collect();
        assert_eq!(batches.len(), 3);
        let marker = &batches[2].vertices;
        let scale = signed_extent(&terms(0.5, 10), Some(2.0)) * 1.1;
        let area = PlotArea::default();
        let expected = area.y_mid() + 2.0 / scale * area.half_height();
        assert!((marker[0].pos[1] - expected).abs() < 1e-5);
        assert!(marker[0].pos[1] <= area.y_max);
    }

    #[test]
    fn boundary_ratios_suppress_the_marker() {
        assert_eq!(limit(1.0), None);
        assert_eq!(limit(-1.0), None);
        assert_eq!(limit(1.5), None);

        let mut g = Geometric::new();
        g.set_param("ratio", 1.0);
        assert_eq!(lines(&g, 100.0), 2);
        g.set_param("ratio", 2.0);
        g.set_param("terms", 50.0);
        assert_eq!(lines(&g, 100.0), 2);
    }

    #[test]
    fn sums_approach_limit_as_terms_grow() {
        for r in [-0.9f32, -0.3, 0.2, 0.7] {
            let l = limit(r).unwrap_or(f32::NAN);
            let err10 = (partial_sums(&terms(r, 10))[9] - l).abs();
            let err50 = (partial_sums(&terms(r, 50))[49] - l).abs();
            assert!(err50 <= err10, "r={r}");
        }
    }
}
