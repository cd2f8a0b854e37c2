//! Basel problem `Σ 1/k² = π²/6`.

use std::f32::consts::PI;

use crate::paint::Color;
use crate::render::DrawSink;

use super::chart::{Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "basel";

pub const DEFAULT_TERMS: i32 = 40;
pub const MAX_TERMS: i32 = 2000;
const REVEAL_RATE: f32 = 10.0;

/// `π²/6`.
pub const LIMIT: f32 = PI * PI / 6.0;

pub fn terms(n: usize) -> Vec<f32> {
    (1..=n)
        .map(|k| {
            let k = k as f32;
            1.0 / (k * k)
        })
        .collect()
}

pub struct Basel {
    params: ParamStore,
}

impl Basel {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("terms", DEFAULT_TERMS as f32),
        }
    }
}

impl Default for Basel {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for Basel {
    fn title(&self) -> &'static str {
        "Basel problem"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let n = self.params.int("terms", DEFAULT_TERMS, 1, MAX_TERMS) as usize;
        let terms = terms(n);
        BarChart {
            terms: &terms,
            baseline: Baseline::Bottom,
            scale: LIMIT * 1.15,
            grid_step: 0.5,
            reveal_rate: REVEAL_RATE,
            palette: Palette::Sweep { from: 0.55, to: 0.47, s: 0.65, v: 0.70 },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.20, 0.10, 0.60),
            limit: Some(LIMIT),
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
    fn converges_to_pi_squared_over_six() {
        let sums = partial_sums(&terms(2000));
        let last = sums[1999];
        assert!(last < LIMIT);
        // tail is about 1/n
        assert!(LIMIT - last < 1.0 / 1000.0);
    }

    #[test]
    fn every_partial_sum_is_below_the_limit() {
        assert!(partial_sums(&terms(300)).iter().all(|&s| s < LIMIT));
    }
}
