//! Euler's number `e = Σ 1/k!`.

use std::f32::consts::E;

use crate::paint::Color;
use crate::render::DrawSink;

use super::chart::{Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "e_series";

pub const DEFAULT_TERMS: i32 = 12;
/// `25!` still fits comfortably in an `f32`.
pub const MAX_TERMS: i32 = 25;
const REVEAL_RATE: f32 = 4.0;

/// `[1/0!, 1/1!, …, 1/(n-1)!]`.
pub fn terms(n: usize) -> Vec<f32> {
    let mut out = Vec::with_capacity(n);
    let mut factorial = 1.0f32;
    for k in 0..n {
        if k > 0 {
            factorial *= k as f32;
        }
        out.push(1.0 / factorial);
    }
    out
}

pub struct ESeries {
    params: ParamStore,
}

impl ESeries {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("terms", DEFAULT_TERMS as f32),
        }
    }
}

impl Default for ESeries {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for ESeries {
    fn title(&self) -> &'static str {
        "Euler's number"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let n = self.params.int("terms", DEFAULT_TERMS, 1, MAX_TERMS) as usize;
        let terms = terms(n);
        BarChart {
            terms: &terms,
            baseline: Baseline::Bottom,
            scale: E * 1.12,
            grid_step: 0.5,
            reveal_rate: REVEAL_RATE,
            palette: Palette::Sweep { from: 0.12, to: 0.06, s: 0.70, v: 0.75 },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.10, 0.25, 0.65),
            limit: Some(E),
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
    use crate::series::partial_sums;

    #[test]
    fn leading_terms_are_reciprocal_factorials() {
        assert_eq!(terms(5), vec![1.0, 1.0, 0.5, 1.0 / 6.0, 1.0 / 24.0]);
    }

    #[test]
    fn converges_to_e_quickly() {
        let sums = partial_sums(&terms(12));
        assert!((sums[11] - E).abs() < 1e-5);
    }

    #[test]
    fn largest_factorial_stays_finite() {
        assert!(terms(MAX_TERMS as usize).iter().all(|t| t.is_finite() && *t > 0.0));
    }
}
