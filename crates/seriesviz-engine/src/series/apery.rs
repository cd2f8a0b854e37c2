//! Apéry's constant `ζ(3) = Σ 1/k³`.

use crate::paint::Color;
use crate::render::DrawSink;

use super::chart::{Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "apery";

pub const DEFAULT_TERMS: i32 = 30;
pub const MAX_TERMS: i32 = 200;
const REVEAL_RATE: f32 = 10.0;

pub const ZETA_3: f32 = 1.202_056_9;

pub fn terms(n: usize) -> Vec<f32> {
    (1..=n)
        .map(|k| {
            let k = k as f32;
            1.0 / (k * k * k)
        })
        .collect()
}

pub struct Apery {
    params: ParamStore,
}

impl Apery {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("terms", DEFAULT_TERMS as f32),
        }
    }
}

impl Default for Apery {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for Apery {
    fn title(&self) -> &'static str {
        "Apéry's constant"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let n = self.params.int("terms", DEFAULT_TERMS, 1, MAX_TERMS) as usize;
        let terms = terms(n);
        BarChart {
            terms: &terms,
            baseline: Baseline::Bottom,
            scale: ZETA_3 * 1.15,
            grid_step: 0.25,
            reveal_rate: REVEAL_RATE,
            palette: Palette::Sweep { from: 0.90, to: 0.84, s: 0.60, v: 0.70 },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.10, 0.45, 0.50),
            limit: Some(ZETA_3),
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
    fn converges_to_zeta_three() {
        let sums = partial_sums(&terms(200));
        assert!((sums[199] - ZETA_3).abs() < 1e-4);
    }

    #[test]
    fn terms_param_is_clamped() {
        let mut a = Apery::new();
        a.set_param("terms", 10_000.0);
        assert_eq!(a.params().int("terms", DEFAULT_TERMS, 1, MAX_TERMS), MAX_TERMS);
    }
}
