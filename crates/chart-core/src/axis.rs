// File: crates/chart-core/src/axis.rs
// Summary: Axis model with labels and ranges.

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("X", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Y", 0.0, 1.0)
    }

    /// Range width, never below a tiny epsilon so callers can divide by it.
    pub fn span(&self) -> f64 {
        (self.max - self.min).max(1e-9)
    }

    pub fn set_range(&mut self, min: f64, max: f64) {
        self.min = min;
        self.max = max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_is_clamped_for_degenerate_range() {
        let a = Axis::new("X", 3.0, 3.0);
        assert!(a.span() > 0.0);
        assert_eq!(Axis::new("Y", 0.0, 4.0).span(), 4.0);
    }
}
