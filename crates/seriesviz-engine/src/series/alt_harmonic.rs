//! Alternating harmonic series `Σ (-1)^(k+1)/k = ln 2`.

use std::f32::consts::LN_2;

use crate::paint::{Color, Hsv};
use crate::render::DrawSink;

use super::chart::{nice_step, signed_extent, Baseline, BarChart, Palette};
use super::{ParamStore, Visualizer};

pub const KEY: &str = "alt_harmonic";

pub const DEFAULT_TERMS: i32 = 30;
pub const MAX_TERMS: i32 = 2000;
const REVEAL_RATE: f32 = 8.0;

/// `[1, -1/2, 1/3, …]`.
pub fn terms(n: usize) -> Vec<f32> {
    (1..=n)
        .map(|k| {
            let sign = if k % 2 == 1 { 1.0 } else { -1.0 };
            sign / k as f32
        })
        .collect()
}

pub struct AltHarmonic {
    params: ParamStore,
}

impl AltHarmonic {
    pub fn new() -> Self {
        Self {
            params: ParamStore::new().with("terms", DEFAULT_TERMS as f32),
        }
    }
}

impl Default for AltHarmonic {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for AltHarmonic {
    fn title(&self) -> &'static str {
        "Alternating harmonic series"
    }

    fn render(&self, time: f32, _width: f32, _height: f32, sink: &mut dyn DrawSink) {
        let n = self.params.int("terms", DEFAULT_TERMS, 1, MAX_TERMS) as usize;
        let terms = terms(n);
        let scale = signed_extent(&terms, Some(LN_2)) * 1.1;
        BarChart {
            terms: &terms,
            baseline: Baseline::Centered,
            scale,
            grid_step: nice_step(scale / 4.0),
            reveal_rate: REVEAL_RATE,
            palette: Palette::Signed {
                positive: Hsv::new(0.52, 0.65, 0.65),
                negative: Hsv::new(0.02, 0.65, 0.70),
            },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.80, 0.50, 0.05),
            limit: Some(LN_2),
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
