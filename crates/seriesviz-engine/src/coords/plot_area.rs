/// Margins reserved around a plot, as fractions of the NDC half-extent.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Margins {
    /// Room for axis decoration on the left and bottom edges.
    pub const AXIS: Margins = Margins {
        left: 0.14,
        right: 0.06,
        bottom: 0.12,
        top: 0.08,
    };
}

/// Plot rectangle inside the `[-1, 1]` NDC square.
///
/// All visualizers draw in NDC; `PlotArea` maps normalized positions and
/// scaled values onto that rectangle.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlotArea {
    pub x_min: f32,
    pub x_max: f32,
    pub y_min: f32,
    pub y_max: f32,
}

impl PlotArea {
    pub fn with_margins(m: Margins) -> Self {
        Self {
            x_min: -1.0 + m.left,
            x_max: 1.0 - m.right,
            y_min: -1.0 + m.bottom,
            y_max: 1.0 - m.top,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.x_max - self.x_min
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.y_max - self.y_min
    }

    /// Maps `t` in `[0, 1]` across the plot horizontally.
    #[inline]
    pub fn x_at(&self, t: f32) -> f32 {
        self.x_min + self.width() * t
    }

    /// Maps `t` in `[0, 1]` up the plot vertically.
    #[inline]
    pub fn y_at(&self, t: f32) -> f32 {
        self.y_min + self.height() * t
    }

    /// Vertical midline, used as the zero line for signed series.
    #[inline]
    pub fn y_mid(&self) -> f32 {
        0.5 * (self.y_min + self.y_max)
    }

    /// Largest distance from the midline that stays inside the plot.
    #[inline]
    pub fn half_height(&self) -> f32 {
        0.5 * self.height()
    }

    /// Width of one slot when the plot is split into `count` equal columns.
    #[inline]
    pub fn slot_width(&self, count: usize) -> f32 {
        self.width() / count.max(1) as f32
    }
}

impl Default for PlotArea {
    fn default() -> Self {
        Self::with_margins(Margins::AXIS)
    }
}

/// Floors a scale denominator so divisions stay finite.
#[inline]
pub fn safe_scale(scale: f32) -> f32 {
    if scale.is_finite() { scale.max(SCALE_EPSILON) } else { SCALE_EPSILON }
}

/// Smallest scale a plot is allowed to divide by.
pub const SCALE_EPSILON: f32 = 1e-3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_margins_map_to_ndc() {
        let p = PlotArea::default();
        assert!((p.x_min - -0.86).abs() < 1e-6);
        assert!((p.x_max - 0.94).abs() < 1e-6);
        assert!((p.y_min - -0.88).abs() < 1e-6);
        assert!((p.y_max - 0.92).abs() < 1e-6);
    }

    #[test]
    fn endpoints_map_to_edges() {
        let p = PlotArea::default();
        assert_eq!(p.x_at(0.0), p.x_min);
        assert!((p.x_at(1.0) - p.x_max).abs() < 1e-6);
        assert_eq!(p.y_at(0.0), p.y_min);
        assert!((p.y_at(1.0) - p.y_max).abs() < 1e-6);
    }

    #[test]
    fn slot_width_never_divides_by_zero() {
        let p = PlotArea::default();
        assert_eq!(p.slot_width(0), p.width());
    }

    #[test]
    fn safe_scale_floors_degenerate_values() {
        assert_eq!(safe_scale(0.0), SCALE_EPSILON);
        assert_eq!(safe_scale(-3.0), SCALE_EPSILON);
        assert_eq!(safe_scale(f32::NAN), SCALE_EPSILON);
        assert_eq!(safe_scale(f32::INFINITY), SCALE_EPSILON);
        assert_eq!(safe_scale(2.5), 2.5);
    }
}
