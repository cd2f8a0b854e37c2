//! Shared bar-plus-partial-sum layout used by most series visualizers.

use crate::coords::{safe_scale, PlotArea};
use crate::paint::{hue_sweep, Color, Hsv};
use crate::render::{push_quad, push_segment, DrawSink, Vertex};

use super::reveal::{pulse, Reveal};

/// Gap on each side of a bar, as a fraction of its slot.
const BAR_GAP: f32 = 0.12;
const MAX_GRID_LINES: usize = 64;
const TICK_OUT: f32 = 0.015;
const TICK_IN: f32 = 0.01;

pub(crate) const GRID_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.08);
pub(crate) const AXIS_COLOR: Color = Color::rgba(0.15, 0.15, 0.15, 0.9);

/// Where the zero line sits.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Baseline {
    /// Zero at the bottom edge; values in `[0, scale]` fill the plot.
    Bottom,
    /// Zero at the vertical midline; values in `[-scale, scale]` fill the plot.
    Centered,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) enum Palette {
    /// Hue walks linearly from `from` to `to` across the terms.
    Sweep { from: f32, to: f32, s: f32, v: f32 },
    /// One color for non-negative terms, another for negative ones.
    Signed { positive: Hsv, negative: Hsv },
}

impl Palette {
    fn hsv(&self, index: usize, count: usize, term: f32) -> Hsv {
        match *self {
            Palette::Sweep { from, to, s, v } => Hsv::new(hue_sweep(from, to, index, count), s, v),
            Palette::Signed { positive, negative } => {
                if term >= 0.0 {
                    positive
                } else {
                    negative
                }
            }
        }
    }
}

/// One frame of a bar chart: a bar per revealed term, a running-sum polyline
/// and an optional pulsing limit marker once every term is on screen.
#[derive(Debug, Clone)]
pub(crate) struct BarChart<'a> {
    pub terms: &'a [f32],
    pub baseline: Baseline,
    /// Value mapped to the full plot extent (half extent when centered).
    pub scale: f32,
    pub grid_step: f32,
    pub reveal_rate: f32,
    pub palette: Palette,
    pub bar_alpha: f32,
    pub sum_color: Color,
    pub limit: Option<f32>,
    pub limit_color: Color,
}

impl BarChart<'_> {
    /// Emits grid, bars, axes, limit marker and running sum, in that order.
    pub fn render(&self, time: f32, sink: &mut dyn DrawSink) {
        let area = PlotArea::default();
        let count = self.terms.len();
        let scale = safe_scale(self.scale);
        let reveal = Reveal::new(time, self.reveal_rate, count);
        let value_y = |v: f32| value_to_y(&area, self.baseline, scale, v);
        let zero_y = value_y(0.0);

        let grid_values = grid_values(self.grid_step, scale, self.baseline);
        let mut grid = Vec::with_capacity(grid_values.len() * 2);
        for &v in &grid_values {
            let y = value_y(v);
            push_segment(&mut grid, area.x_min, y, area.x_max, y, GRID_COLOR);
        }

        let slot = area.slot_width(count);
        let gap = slot * BAR_GAP;
        let visible = reveal.visible();
        let mut bars = Vec::with_capacity(visible * 6);
        let mut sum_line = Vec::with_capacity(visible);
        let mut partial = 0.0f32;
        for (i, &term) in self.terms.iter().take(visible).enumerate() {
            partial += term;
            let alpha = reveal.alpha(i);
            let left = area.x_min + i as f32 * slot;
            let color = self.palette.hsv(i, count, term).to_color(alpha * self.bar_alpha);
            push_quad(&mut bars, left + gap, zero_y, left + slot - gap, value_y(term), color);
            sum_line.push(Vertex::new(
                left + 0.5 * slot,
                value_y(partial),
                self.sum_color.with_alpha(alpha),
            ));
        }

        let mut axes = Vec::with_capacity(4 + grid_values.len() * 2);
        push_segment(&mut axes, area.x_min, zero_y, area.x_max, zero_y, AXIS_COLOR);
        push_segment(&mut axes, area.x_min, area.y_min, area.x_min, area.y_max, AXIS_COLOR);
        for &v in &grid_values {
            let y = value_y(v);
            push_segment(&mut axes, area.x_min - TICK_OUT, y, area.x_min + TICK_IN, y, AXIS_COLOR);
        }

        let mut marker = Vec::new();
        if reveal.complete()
            && let Some(limit) = self.limit.filter(|l| l.is_finite())
        {
            let y = value_y(limit);
            let alpha = 0.4 + 0.4 * pulse(time);
            push_segment(&mut marker, area.x_min, y, area.x_max, y, self.limit_color.with_alpha(alpha));
        }

        sink.draw_lines(&grid);
        sink.draw_triangles(&bars);
        sink.draw_lines(&axes);
        sink.draw_lines(&marker);
        if sum_line.len() >= 2 {
            sink.draw_line_strip(&sum_line);
        }
    }
}

fn value_to_y(area: &PlotArea, baseline: Baseline, scale: f32, v: f32) -> f32 {
    match baseline {
        Baseline::Bottom => area.y_at(v / scale),
        Baseline::Centered => area.y_mid() + v / scale * area.half_height(),
    }
}

/// Gridline values strictly inside `(0, scale)`, mirrored below zero when centered.
fn grid_values(step: f32, scale: f32, baseline: Baseline) -> Vec<f32> {
    let mut out = Vec::new();
    if !step.is_finite() || step <= 0.0 {
        return out;
    }
    let mut k = 1;
    while out.len() < MAX_GRID_LINES {
        let v = step * k as f32;
        if v >= scale {
            break;
        }
        out.push(v);
        if baseline == Baseline::Centered {
            out.push(-v);
        }
        k += 1;
    }
    out
}

/// Rounds `raw` up to a 1/2/…/9 × 10ⁿ step.
pub(crate) fn nice_step(raw: f32) -> f32 {
    let raw = if raw.is_finite() { raw.max(0.01) } else { 1.0 };
    let magnitude = 10f32.powf(raw.log10().floor());
    (raw / magnitude).ceil() * magnitude
}

/// Running sums of `terms`.
pub fn partial_sums(terms: &[f32]) -> Vec<f32> {
    terms
        .iter()
        .scan(0.0f64, |acc, &t| {
            *acc += t as f64;
            Some(*acc as f32)
        })
        .collect()
}

/// Largest absolute value among terms and running sums, and an optional limit.
pub(crate) fn signed_extent(terms: &[f32], limit: Option<f32>) -> f32 {
    let sums = partial_sums(terms);
    terms
        .iter()
        .chain(sums.iter())
        .chain(limit.iter())
        .filter(|v| v.is_finite())
        .fold(0.0f32, |m, v| m.max(v.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::testing::Recorder;
    use crate::render::Topology;

    fn chart(terms: &[f32], limit: Option<f32>) -> BarChart<'_> {
        BarChart {
            terms,
            baseline: Baseline::Bottom,
            scale: 2.0,
            grid_step: 0.5,
            reveal_rate: 10.0,
            palette: Palette::Sweep { from: 0.1, to: 0.0, s: 0.6, v: 0.8 },
            bar_alpha: 0.85,
            sum_color: Color::rgb(0.1, 0.3, 0.7),
            limit,
            limit_color: Color::rgb(0.8, 0.2, 0.2),
        }
    }

    #[test]
    fn partial_sums_accumulate() {
        assert_eq!(partial_sums(&[1.0, 0.5, 0.25]), vec![1.0, 1.5, 1.75]);
        assert!(partial_sums(&[]).is_empty());
    }

    #[test]
    fn nice_step_rounds_up_to_one_significant_digit() {
        assert!((nice_step(0.23) - 0.3).abs() < 1e-6);
        assert!((nice_step(4.0) - 4.0).abs() < 1e-5);
        assert!((nice_step(17.0) - 20.0).abs() < 1e-4);
        assert_eq!(nice_step(f32::NAN), 1.0);
    }

    #[test]
    fn grid_values_stay_inside_scale() {
        let v = grid_values(0.5, 2.0, Baseline::Bottom);
        assert_eq!(v, vec![0.5, 1.0, 1.5]);
        let c = grid_values(0.5, 1.2, Baseline::Centered);
        assert_eq!(c, vec![0.5, -0.5, 1.0, -1.0]);
        assert!(grid_values(0.0, 2.0, Baseline::Bottom).is_empty());
        assert_eq!(grid_values(1e-9, 2.0, Baseline::Bottom).len(), MAX_GRID_LINES);
    }

    #[test]
    fn full_reveal_emits_batches_in_order() {
        let terms = [1.0, 0.5, 0.25];
        let mut rec = Recorder::default();
        chart(&terms, Some(2.0)).render(10.0, &mut rec);
        assert_eq!(
            rec.topologies(),
            vec![
                Topology::Lines,
                Topology::Triangles,
                Topology::Lines,
                Topology::Lines,
                Topology::LineStrip
            ]
        );
        assert_eq!(rec.of(Topology::Triangles).next().map(|b| b.vertices.len()), Some(18));
        assert!(rec.all_finite());
    }

    #[test]
    fn limit_marker_waits_for_full_reveal() {
        let terms = [1.0; 20];
        let mut rec = Recorder::default();
        chart(&terms, Some(2.0)).render(0.5, &mut rec);
        // grid, bars, axes, sum; no marker yet
        assert_eq!(rec.of(Topology::Lines).count(), 2);
    }

    #[test]
    fn single_visible_term_has_no_sum_line() {
        let terms = [1.0, 1.0];
        let mut rec = Recorder::default();
        chart(&terms, None).render(0.05, &mut rec);
        assert_eq!(rec.of(Topology::LineStrip).count(), 0);
    }

    #[test]
    fn sum_line_tracks_running_sum() {
        let terms = [1.0, 0.5];
        let mut rec = Recorder::default();
        chart(&terms, None).render(10.0, &mut rec);
        let strip = rec.of(Topology::LineStrip).next().map(|b| b.vertices.clone()).unwrap_or_default();
        let area = PlotArea::default();
        assert!((strip[1].pos[1] - area.y_at(1.5 / 2.0)).abs() < 1e-6);
    }
}
