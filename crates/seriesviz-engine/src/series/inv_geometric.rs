//! Inverse geometric series `Σ r^(-k)`, converging to `r/(r-1)` when `|r| > 1`.

use crate::paint::{Color, Hsv};
use crate::render::DrawSink;

use super::chart::{nice_step, signed_extent, Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "inv_geometric";

pub const DEFAULT_RATIO: f32 = 2.0;
pub const DEFAULT_TERMS: i32 = 15;
pub const MAX_TERMS: i32 = 50;
const RATIO_RANGE: (f32, f32) = (-4.0, 4.0);
/// Smallest `|r|`; keeps `1/r` bounded.
const MIN_ABS_RATIO: f32 = 0.1;
const REVEAL_RATE: f32 = 8.0;
const BOUNDARY_EPSILON: f32 = 1e-6;
/// Generation stops once a term grows past this magnitude.
const TERM_CEILING: f32 = 1e12;

/// Clamps `r` into range and pushes it away from zero, keeping its sign.
pub fn sanitize_ratio(ratio: f32) -> f32 {
    let r = ratio.clamp(RATIO_RANGE.0, RATIO_RANGE.1);
    if r.abs() >= MIN_ABS_RATIO {
        r
    } else if r < 0.0 {
        -MIN_ABS_RATIO
    } else {
        MIN_ABS_RATIO
    }
}

/// `[1, 1/r, 1/r², …]`, at most `n` terms.
///
/// For `|r| < 1` the terms grow; the list is cut short before any term
/// exceeds `1e12` so sums stay finite.
pub fn terms(ratio: f32, n: usize) -> Vec<f32> {
    let step = 1.0 / ratio;
    let mut out = Vec::with_capacity(n);
    let mut term = 1.0f32;
    for _ in 0..n {
        if !term.is_finite() || term.abs() > TERM_CEILING {
            break;
        }
        out.push(term);
        term *= step;
    }
    out
}

/// `r/(r-1)` for `|r| > 1`, `None` otherwise.
pub fn limit(ratio: f32) -> Option<f32> {
    (ratio.abs() > 1.0 && (ratio - 1.0).abs() > BOUNDARY_EPSILON).then(|| ratio / (ratio - 1.0))
}

pub struct InverseGeometric {
    params: ParamStore,
}

impl InverseGeometric {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new()
                .with("ratio", DEFAULT_RATIO)
                .with("terms", DEFAULT_TERMS as f32),
        }
    }
}

impl Default for InverseGeometric {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for InverseGeometric {
    fn title(&self) -> &'static str {
        "Inverse geometric series"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let ratio = sanitize_ratio(self.params.float("ratio", DEFAULT_RATIO, RATIO_RANGE.0, RATIO_RANGE.1));
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
                positive: Hsv::new(0.75, 0.55, 0.70),
                negative: Hsv::new(0.12, 0.75, 0.85),
            },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.05, 0.45, 0.35),
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
    use crate::render::testing::Recorder;
    use crate::render::Topology;
    use crate::series::partial_sums;

    #[test]
    fn ratio_two_sums_to_two() {
        let sums = partial_sums(&terms(2.0, 30));
        assert_eq!(limit(2.0), Some(2.0));
        assert!((sums[29] - 2.0).abs() < 1e-6);
    }

    #[test]
    fn ratio_is_kept_away_from_zero() {
        assert_eq!(sanitize_ratio(0.0), 0.1);
        assert_eq!(sanitize_ratio(-0.05), -0.1);
        assert_eq!(sanitize_ratio(9.0), 4.0);
        assert_eq!(sanitize_ratio(-3.0), -3.0);
    }

    #[test]
    fn growing_terms_are_cut_short() {
        let t = terms(0.1, 50);
        assert!((12..=13).contains(&t.len()));
        assert!(partial_sums(&t).iter().all(|s| s.is_finite()));
    }

    #[test]
    fn divergent_ratios_have_no_limit() {
        assert_eq!(limit(1.0), None);
        assert_eq!(limit(0.5), None);
        assert_eq!(limit(-1.0), None);
        assert!(limit(-2.0).is_some());
    }

    #[test]
    fn tiny_ratio_still_renders_finite_geometry() {
        let mut v = InverseGeometric::new();
        v.set_param("ratio", 0.0);
        v.set_param("terms", 50.0);
        let mut rec = Recorder::default();
        v.render(100.0, 800.0, 600.0, &mut rec);
        assert!(rec.all_finite());
        // no limit marker for |r| < 1
        assert_eq!(rec.of(Topology::Lines).count(), 2);
    }
}
