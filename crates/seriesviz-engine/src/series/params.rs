use std::collections::HashMap;

/// Open-ended named parameter store owned by one visualizer.
///
/// Unknown names are accepted and stored; reads fall back to a caller-supplied
/// default instead of failing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamStore {
    values: HashMap<String, f32>,
}

impl ParamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, used to seed defaults.
    pub fn with(mut self, name: &str, value: f32) -> Self {
        self.set(name, value);
        self
    }

    /// Overwrites or inserts `name`.
    pub fn set(&mut self, name: &str, value: f32) {
        match self.values.get_mut(name) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(name.to_owned(), value);
            }
        }
    }

    pub fn get(&self, name: &str, default: f32) -> f32 {
        self.values.get(name).copied().unwrap_or(default)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f32)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Reads an integer parameter clamped to `[lo, hi]`.
    ///
    /// The stored value is truncated toward zero; NaN reads as `default`.
    pub fn int(&self, name: &str, default: i32, lo: i32, hi: i32) -> i32 {
        let v = self.get(name, default as f32);
        let v = if v.is_nan() { default } else { v as i32 };
        v.clamp(lo, hi)
    }

    /// Reads a float parameter clamped to `[lo, hi]`; NaN reads as `default`.
    pub fn float(&self, name: &str, default: f32, lo: f32, hi: f32) -> f32 {
        let v = self.get(name, default);
        let v = if v.is_nan() { default } else { v };
        v.clamp(lo, hi)
    }
}
