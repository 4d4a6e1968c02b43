//! Sources of uniform random integers.

use rand::Rng;
use rand::rngs::StdRng;

/// The single source of nondeterminism for the engine.
pub trait RandomSource {
    /// Return a uniformly distributed integer in `[low, high]`.
    ///
    /// Callers guarantee `low <= high`.
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;
}

impl RandomSource for StdRng {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.random_range(low..=high)
    }
}

/// Replays a fixed sequence of values, for reproducing a match by hand.
///
/// Values cycle once the sequence is exhausted and are clamped into the
/// requested range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<i32>,
    index: usize,
}

impl ScriptedSource {
    /// Create a source that returns `values` in order.
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, index: 0 }
    }

    /// Create a source that always returns the same value.
    pub fn constant(value: i32) -> Self {
        Self::new(vec![value])
    }

    /// How many values have been drawn so far.
    pub fn consumed(&self) -> usize {
        self.index
    }

    /// Returns true once every scripted value has been drawn at least once.
    pub fn is_exhausted(&self) -> bool {
        self.index >= self.values.len()
    }
}

impl RandomSource for ScriptedSource {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        if self.values.is_empty() {
            return low;
        }
        let value = self.values[self.index % self.values.len()];
        self.index += 1;
        value.clamp(low, high)
    }
}
