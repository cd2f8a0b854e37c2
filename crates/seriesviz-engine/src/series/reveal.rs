/// Progressive reveal state for one frame.
///
/// `revealed = time * rate` counts items (terms, levels, columns) shown so far.
/// The item at the reveal boundary fades in through a fractional alpha.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Reveal {
    revealed: f32,
    total: usize,
}

impl Reveal {
    /// Negative or non-finite time reads as zero.
    pub fn new(time: f32, rate: f32, total: usize) -> Self {
        let time = if time.is_finite() { time.max(0.0) } else { 0.0 };
        let rate = if rate.is_finite() { rate.max(0.0) } else { 0.0 };
        Self {
            revealed: time * rate,
            total,
        }
    }

    #[inline]
    pub fn revealed(&self) -> f32 {
        self.revealed
    }

    /// Number of items that have started to appear (including the fading one).
    #[inline]
    pub fn visible(&self) -> usize {
        // `as usize` saturates for very large values.
        let started = (self.revealed.floor() as usize).saturating_add(1);
        started.min(self.total)
    }

    /// Opacity of item `index`: `clamp(revealed - index, 0, 1)`.
    #[inline]
    pub fn alpha(&self, index: usize) -> f32 {
        (self.revealed - index as f32).clamp(0.0, 1.0)
    }

    /// `true` once every item has started to appear.
    #[inline]
    pub fn complete(&self) -> bool {
        self.visible() >= self.total
    }
}

/// Limit-marker opacity modulation, `0.5 + 0.5·sin(3t)`.
#[inline]
pub fn pulse(time: f32) -> f32 {
    if time.is_finite() { 0.5 + 0.5 * (3.0 * time).sin() } else { 0.5 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_item_is_visible_at_time_zero_but_transparent() {
        let r = Reveal::new(0.0, 10.0, 30);
        assert_eq!(r.visible(), 1);
        assert_eq!(r.alpha(0), 0.0);
    }

    #[test]
    fn boundary_item_fades() {
        let r = Reveal::new(0.25, 10.0, 30); // revealed = 2.5
        assert_eq!(r.visible(), 3);
        assert_eq!(r.alpha(0), 1.0);
        assert_eq!(r.alpha(1), 1.0);
        assert!((r.alpha(2) - 0.5).abs() < 1e-6);
        assert_eq!(r.alpha(3), 0.0);
    }

    #[test]
    fn visible_is_capped_and_complete() {
        let r = Reveal::new(100.0, 10.0, 30);
        assert_eq!(r.visible(), 30);
        assert!(r.complete());
        assert!(!Reveal::new(1.0, 10.0, 30).complete());
    }

    #[test]
    fn huge_time_does_not_overflow() {
        let r = Reveal::new(f32::MAX, 10.0, 5);
        assert_eq!(r.visible(), 5);
    }

    #[test]
    fn opaque_set_only_grows_over_time() {
        let total = 40;
        let mut prev_opaque: Vec<usize> = Vec::new();
        for step in 0..200 {
            let r = Reveal::new(step as f32 * 0.037, 8.0, total);
            let opaque: Vec<usize> = (0..r.visible()).filter(|&i| r.alpha(i) >= 1.0).collect();
            assert!(prev_opaque.iter().all(|i| opaque.contains(i)));
            prev_opaque = opaque;
        }
    }

    #[test]
    fn negative_and_nan_time_read_as_zero() {
        assert_eq!(Reveal::new(-3.0, 10.0, 5).revealed(), 0.0);
        assert_eq!(Reveal::new(f32::NAN, 10.0, 5).revealed(), 0.0);
    }

    #[test]
    fn pulse_stays_in_unit_range() {
        for i in 0..100 {
            let p = pulse(i as f32 * 0.1);
            assert!((0.0..=1.0).contains(&p));
        }
    }
}
