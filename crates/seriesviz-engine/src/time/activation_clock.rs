use std::time::{Duration, Instant};

/// Monotonic origin for the elapsed time fed to visualizers.
#[derive(Debug, Clone)]
pub struct ActivationClock {
    origin: Instant,
}

impl ActivationClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Moves the origin to now.
    pub fn reset(&mut self) {
        self.origin = Instant::now();
    }

    /// Seconds since the last reset.
    pub fn elapsed(&self) -> f32 {
        self.elapsed_at(Instant::now())
    }

    /// Seconds between the origin and `now`; zero if `now` precedes it.
    pub fn elapsed_at(&self, now: Instant) -> f32 {
        now.saturating_duration_since(self.origin).as_secs_f32()
    }

    /// Shifts the origin back so that `elapsed` reads `by` more.
    ///
    /// Used by hosts to skip an animation to its end.
    pub fn advance(&mut self, by: Duration) {
        if let Some(origin) = self.origin.checked_sub(by) {
            self.origin = origin;
        }
    }
}

impl Default for ActivationClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_measured_from_origin() {
        let clock = ActivationClock::new();
        let later = clock.origin + Duration::from_millis(1500);
        assert!((clock.elapsed_at(later) - 1.5).abs() < 1e-6);
    }

    #[test]
    fn instants_before_origin_read_zero() {
        let mut clock = ActivationClock::new();
        let before = Instant::now();
        clock.origin = before + Duration::from_secs(1);
        assert_eq!(clock.elapsed_at(before), 0.0);
    }

    #[test]
    fn reset_moves_origin_forward() {
        let mut clock = ActivationClock::new();
        let first = clock.origin;
        clock.reset();
        assert!(clock.origin >= first);
    }

    #[test]
    fn advance_adds_elapsed_time() {
        let mut clock = ActivationClock::new();
        let now = clock.origin;
        clock.advance(Duration::from_secs(2));
        assert!(clock.elapsed_at(now) >= 2.0 - 1e-6);
    }
}
