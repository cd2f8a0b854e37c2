//! Gregory–Leibniz series `Σ 4(-1)^k/(2k+1) = π`.

use std::f32::consts::PI;

use crate::paint::{Color, Hsv};
use crate::render::DrawSink;

use super::chart::{nice_step, signed_extent, Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "gregory_leibniz";

pub const DEFAULT_TERMS: i32 = 30;
pub const MAX_TERMS: i32 = 2000;
const REVEAL_RATE: f32 = 8.0;

/// `[4, -4/3, 4/5, …]`.
pub fn terms(n: usize) -> Vec<f32> {
    (0..n)
        .map(|k| {
            let sign = if k % 2 == 0 { 4.0 } else { -4.0 };
            sign / (2 * k + 1) as f32
        })
        .collect()
}

pub struct GregoryLeibniz {
    params: ParamStore,
}

impl GregoryLeibniz {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("terms", DEFAULT_TERMS as f32),
        }
    }
}

impl Default for GregoryLeibniz {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for GregoryLeibniz {
    fn title(&self) -> &'static str {
        "Gregory–Leibniz series"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let n = self.params.int("terms", DEFAULT_TERMS, 1, MAX_TERMS) as usize;
        let terms = terms(n);
        let scale = signed_extent(&terms, Some(PI)) * 1.1;
        BarChart {
            terms: &terms,
            baseline: Baseline::Centered,
            scale,
            grid_step: nice_step(scale / 4.0),
            reveal_rate: REVEAL_RATE,
            palette: Palette::Signed {
                positive: Hsv::new(0.62, 0.55, 0.70),
                negative: Hsv::new(0.08, 0.70, 0.85),
            },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.55, 0.10, 0.45),
            limit: Some(PI),
            limit_color: Color::rgb(0.15, 0.60, 0.15),
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
    fn first_terms() {
        let t = terms(3);
        assert_eq!(t[0], 4.0);
        assert!((t[1] + 4.0 / 3.0).abs() < 1e-6);
        assert!((t[2] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn error_shrinks_like_one_over_n() {
        let sums = partial_sums(&terms(1000));
        assert!((sums[999] - PI).abs() < 2.0 / 1000.0);
    }
}
