//! Keyboard bindings for the studio window.

use winit::keyboard::KeyCode;

/// A bounded step on one visualizer parameter.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Adjustment {
    pub param: &'static str,
    pub step: f32,
    pub min: f32,
    pub max: f32,
}

impl Adjustment {
    const fn new(param: &'static str, step: f32, min: f32, max: f32) -> Self {
        Self { param, step, min, max }
    }

    /// `current` moved one step in `direction` (±1) and kept in range.
    pub fn apply(&self, current: f32, direction: f32) -> f32 {
        let current = if current.is_finite() { current } else { self.min };
        (current + self.step * direction).clamp(self.min, self.max)
    }
}

/// Up/Down adjustment for a visualizer.
pub fn primary(key: &str) -> Option<Adjustment> {
    Some(match key {
        "cantor" => Adjustment::new("depth", 1.0, 1.0, 12.0),
        "harmonic" | "alt_harmonic" | "basel" | "gregory_leibniz" => {
            Adjustment::new("terms", 5.0, 1.0, 2000.0)
        }
        "geometric" | "inv_geometric" => Adjustment::new("terms", 1.0, 1.0, 50.0),
        "e_series" => Adjustment::new("terms", 1.0, 1.0, 25.0),
        "apery" => Adjustment::new("terms", 5.0, 1.0, 200.0),
        "logistic" => Adjustment::new("growth_rate", 0.05, 1.0, 4.0),
        _ => return None,
    })
}

/// Left/Right adjustment, for visualizers with a second parameter.
pub fn secondary(key: &str) -> Option<Adjustment> {
    match key {
        "geometric" => Some(Adjustment::new("ratio", 0.05, -2.0, 2.0)),
        "inv_geometric" => Some(Adjustment::new("ratio", 0.1, -4.0, 4.0)),
        _ => None,
    }
}

/// What a key press asks the studio to do.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    /// Activate the n-th registered visualizer.
    Select(usize),
    Next,
    Previous,
    /// Step the primary (+1/-1) parameter.
    Primary(i8),
    /// Step the secondary (+1/-1) parameter.
    Secondary(i8),
    /// Restart the reveal animation.
    Restart,
    /// Jump to the end of the reveal animation.
    Finish,
    Quit,
}

pub fn command(key: KeyCode, shift: bool) -> Option<Command> {
    let digit = |n: usize| Some(Command::Select(n));
    match key {
        KeyCode::Digit1 => digit(0),
        KeyCode::Digit2 => digit(1),
        KeyCode::Digit3 => digit(2),
        KeyCode::Digit4 => digit(3),
        KeyCode::Digit5 => digit(4),
        KeyCode::Digit6 => digit(5),
        KeyCode::Digit7 => digit(6),
        KeyCode::Digit8 => digit(7),
        KeyCode::Digit9 => digit(8),
        KeyCode::Digit0 => digit(9),
        KeyCode::Tab if shift => Some(Command::Previous),
        KeyCode::Tab => Some(Command::Next),
        KeyCode::ArrowUp => Some(Command::Primary(1)),
        KeyCode::ArrowDown => Some(Command::Primary(-1)),
        KeyCode::ArrowRight => Some(Command::Secondary(1)),
        KeyCode::ArrowLeft => Some(Command::Secondary(-1)),
        KeyCode::KeyR => Some(Command::Restart),
        KeyCode::Space => Some(Command::Finish),
        KeyCode::Escape => Some(Command::Quit),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_clamped() {
        let depth = primary("cantor").map(|a| a.apply(12.0, 1.0));
        assert_eq!(depth, Some(12.0));
        let ratio = secondary("geometric").map(|a| a.apply(-1.98, -1.0));
        assert_eq!(ratio, Some(-2.0));
    }

    #[test]
    fn non_finite_current_restarts_at_min() {
        let a = Adjustment::new("terms", 5.0, 1.0, 2000.0);
        assert_eq!(a.apply(f32::NAN, 1.0), 6.0);
    }

    #[test]
    fn every_builtin_key_has_a_primary() {
        for key in [
            "cantor",
            "harmonic",
            "alt_harmonic",
            "geometric",
            "basel",
            "e_series",
            "gregory_leibniz",
            "inv_geometric",
            "apery",
            "logistic",
        ] {
            assert!(primary(key).is_some(), "{key}");
        }
        assert!(primary("unknown").is_none());
    }

    #[test]
    fn tab_cycles_both_ways() {
        assert_eq!(command(KeyCode::Tab, false), Some(Command::Next));
        assert_eq!(command(KeyCode::Tab, true), Some(Command::Previous));
        assert_eq!(command(KeyCode::Digit0, false), Some(Command::Select(9)));
        assert_eq!(command(KeyCode::KeyQ, false), None);
    }
}
