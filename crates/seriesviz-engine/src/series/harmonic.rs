//! Harmonic series `Σ 1/k`, which diverges.

use crate::paint::Color;
use crate::render::DrawSink;

use super::chart::{partial_sums, Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "harmonic";

pub const DEFAULT_TERMS: i32 = 30;
pub const MAX_TERMS: i32 = 2000;
const REVEAL_RATE: f32 = 10.0;
/// A divergence marker at the final sum is only shown past this many terms.
const MARKER_MIN_TERMS: usize = 5;

/// `[1, 1/2, …, 1/n]`.
pub fn terms(n: usize) -> Vec<f32> {
    (1..=n).map(|k| 1.0 / k as f32).collect()
}

/// Gridline spacing that keeps label density readable as the sum grows.
fn grid_step(scale: f32) -> f32 {
    if scale > 16.0 {
        4.0
    } else if scale > 8.0 {
        2.0
    } else {
        1.0
    }
}

pub struct Harmonic {
    params: ParamStore,
}

impl Harmonic {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("terms", DEFAULT_TERMS as f32),
        }
    }
}

impl Default for Harmonic {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for Harmonic {
    fn title(&self) -> &'static str {
        "Harmonic series"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let n = self.params.int("terms", DEFAULT_TERMS, 1, MAX_TERMS) as usize;
        let terms = terms(n);
        let total = partial_sums(&terms).last().copied().unwrap_or(0.0);
        let scale = total.max(1.0) * 1.1;

        BarChart {
            terms: &terms,
            baseline: Baseline::Bottom,
            scale,
            grid_step: grid_step(scale),
            reveal_rate: REVEAL_RATE,
            palette: Palette::Sweep { from: 0.07, to: 0.02, s: 0.65, v: 0.80 },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.10, 0.30, 0.70),
            limit: (n > MARKER_MIN_TERMS).then_some(total),
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
