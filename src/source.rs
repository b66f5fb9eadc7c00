//! Uniform random sources.
//!
//! The selection core never owns a generator: every draw asks a caller-supplied
//! [`RandomSource`] for exactly one value in `[0, 1)`. Any `rand` generator
//! works out of the box; tests can plug in scripted sources to hit exact
//! threshold boundaries.

use rand::{Rng, RngCore};

/// A supplier of uniform draws in `[0, 1)`.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when it runs out.
///
/// Useful for pinning draws to exact thresholds.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    draws: Vec<f64>,
    taken: usize,
}

impl ReplaySource {
    /// # Panics
    ///
    /// Panics if `draws` is empty.
    pub fn new(draws: impl Into<Vec<f64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "ReplaySource: draws must be non-empty");
        Self { draws, taken: 0 }
    }

    /// Number of draws handed out so far.
    pub fn taken(&self) -> usize {
        self.taken
    }
}

impl RandomSource for ReplaySource {
    fn next_unit(&mut self) -> f64 {
        let u = self.draws[self.taken % self.draws.len()];
        self.taken += 1;
        u
    }
}
