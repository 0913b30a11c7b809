// File: crates/trial-plot/src/trial.rs
// Summary: One benchmark run's samples as parallel x/y sequences.

/// Samples of one trial in file order. `x` is the base exponent, `y` the
/// measured duration in nanoseconds; both always have the same length.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trial {
    pub index: u32,
    pub x: Vec<i64>,
    pub y: Vec<i64>,
}

impl Trial {
    pub fn new(index: u32) -> Self {
        Self { index, x: Vec::new(), y: Vec::new() }
    }

    pub fn push(&mut self, x: i64, y: i64) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn len(&self) -> usize { self.x.len() }

    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    /// True when x grows strictly from sample to sample.
    pub fn is_strictly_increasing(&self) -> bool {
        self.x.windows(2).all(|w| w[0] < w[1])
    }

    pub fn points(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}
