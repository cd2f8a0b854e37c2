//! Series visualizers.
//!
//! Every visualizer draws one frame from elapsed time and its own named
//! parameters. Rendering is a pure function of `(time, width, height, params)`:
//! nothing is cached between frames.

mod chart;
mod params;
mod reveal;

pub mod alt_harmonic;
pub mod apery;
pub mod basel;
pub mod cantor;
pub mod e_series;
pub mod geometric;
pub mod gregory_leibniz;
pub mod harmonic;
pub mod inv_geometric;
pub mod logistic;

pub use chart::partial_sums;
pub use params::ParamStore;
pub use reveal::{pulse, Reveal};

use crate::render::DrawSink;

/// A time-driven plot of one mathematical object.
pub trait Visualizer {
    /// Human-readable name.
    fn title(&self) -> &'static str;

    /// Emits one frame of geometry into `sink`.
    ///
    /// `time` is seconds since activation; `width`/`height` are the drawable
    /// size in pixels. Never produces non-finite vertices.
    fn render(&self, time: f32, width: f32, height: f32, sink: &mut dyn DrawSink);

    fn params(&self) -> &ParamStore;

    fn params_mut(&mut self) -> &mut ParamStore;

    fn set_param(&mut self, name: &str, value: f32) {
        self.params_mut().set(name, value);
    }

    fn get_param(&self, name: &str, default: f32) -> f32 {
        self.params().get(name, default)
    }
}

/// The built-in visualizers keyed by their registry name, in menu order.
pub fn builtin() -> Vec<(&'static str, Box<dyn Visualizer>)> {
    vec![
        (cantor::KEY, Box::new(cantor::Cantor::new())),
        (harmonic::KEY, Box::new(harmonic::Harmonic::new())),
        (alt_harmonic::KEY, Box::new(alt_harmonic::AltHarmonic::new())),
        (geometric::KEY, Box::new(geometric::Geometric::new())),
        (basel::KEY, Box::new(basel::Basel::new())),
        (e_series::KEY, Box::new(e_series::ESeries::new())),
        (gregory_leibniz::KEY, Box::new(gregory_leibniz::GregoryLeibniz::new())),
        (inv_geometric::KEY, Box::new(inv_geometric::InverseGeometric::new())),
        (apery::KEY, Box::new(apery::Apery::new())),
        (logistic::KEY, Box::new(logistic::Logistic::new())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::Recorder;

    #[test]
    fn builtin_keys_are_unique() {
        let mut keys: Vec<_> = builtin().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys.len(), 10);
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), 10);
    }

    #[test]
    fn every_visualizer_stays_finite_under_hostile_params() {
        let hostile = [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, -1e9, 0.0, 1e9, 1.0];
        for (key, mut vis) in builtin() {
            for &v in &hostile {
                for name in ["terms", "depth", "ratio", "growth_rate"] {
                    vis.set_param(name, v);
                }
                for &t in &[0.0, 0.37, 5.0, 1e4] {
                    let mut rec = Recorder::default();
                    vis.render(t, 800.0, 600.0, &mut rec);
                    assert!(rec.all_finite(), "{key} produced non-finite geometry for {v} at t={t}");
                }
            }
        }
    }

    #[test]
    fn zero_sized_surface_is_harmless() {
        for (key, vis) in builtin() {
            let mut rec = Recorder::default();
            vis.render(3.0, 0.0, 0.0, &mut rec);
            assert!(rec.all_finite(), "{key}");
        }
    }
}
