use super::Color;

/// Hue/saturation/value triple, all components in `[0, 1]`.
///
/// Hue wraps: `1.25` and `0.25` describe the same color, as do `-0.25` and `0.75`.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Hsv {
    pub h: f32,
    pub s: f32,
    pub v: f32,
}

impl Hsv {
    #[inline]
    pub const fn new(h: f32, s: f32, v: f32) -> Self {
        Self { h, s, v }
    }

    #[inline]
    pub fn to_color(self, alpha: f32) -> Color {
        hsv_to_rgb(self.h, self.s, self.v).with_alpha(alpha)
    }
}

/// Converts HSV to an opaque RGB color.
///
/// Non-finite hue maps to red (`h = 0`) rather than propagating NaN into geometry.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Color {
    let h = if h.is_finite() { h.rem_euclid(1.0) } else { 0.0 };
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let scaled = h * 6.0;
    let sector = scaled.floor();
    let f = scaled - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i32).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color::rgb(r, g, b)
}

/// Hue at position `index` of `count` on a linear sweep from `from` to `to`.
///
/// A single-term range sits at `from`.
#[inline]
pub fn hue_sweep(from: f32, to: f32, index: usize, count: usize) -> f32 {
    let span = count.saturating_sub(1).max(1) as f32;
    from + (to - from) * (index as f32 / span)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 1e-5 && (a.g - b.g).abs() < 1e-5 && (a.b - b.b).abs() < 1e-5
    }

    #[test]
    fn primaries() {
        assert!(close(hsv_to_rgb(0.0, 1.0, 1.0), Color::rgb(1.0, 0.0, 0.0)));
        assert!(close(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), Color::rgb(0.0, 1.0, 0.0)));
        assert!(close(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), Color::rgb(0.0, 0.0, 1.0)));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let c = hsv_to_rgb(0.42, 0.0, 0.6);
        assert!(close(c, Color::rgb(0.6, 0.6, 0.6)));
    }

    #[test]
    fn hue_wraps_in_both_directions() {
        let base = hsv_to_rgb(0.25, 0.7, 0.8);
        assert!(close(hsv_to_rgb(1.25, 0.7, 0.8), base));
        assert!(close(hsv_to_rgb(-0.75, 0.7, 0.8), base));
    }

    #[test]
    fn nan_hue_stays_finite() {
        assert!(hsv_to_rgb(f32::NAN, 0.5, 0.5).to_array().iter().all(|c| c.is_finite()));
    }

    #[test]
    fn sweep_endpoints() {
        assert_eq!(hue_sweep(0.1, 0.5, 0, 5), 0.1);
        assert!((hue_sweep(0.1, 0.5, 4, 5) - 0.5).abs() < 1e-6);
        assert_eq!(hue_sweep(0.3, 0.9, 0, 1), 0.3);
    }
}
