//! Selection pipeline: resolve effective weights, then draw.
//!
//! Every draw runs the whole pipeline again, so edits to the candidate list
//! between calls are always picked up and multi-draws are independent
//! (sampling *with* replacement).
//!
//! Notes:
//! - `*_with_rng` entrypoints take any [`RandomSource`] for deterministic use.
//! - The plain forms use `rand::rng()` and are not reproducible across runs.

use log::{debug, trace};
use rand::rngs::{StdRng, ThreadRng};
use rand::SeedableRng;

use crate::candidate::Candidate;
use crate::error::SelectionError;
use crate::resolve::resolve;
use crate::source::RandomSource;
use crate::strategy::SelectionStrategy;

/// Draw one label using the thread-local generator.
pub fn select_one(
    candidates: &[Candidate],
    strategy: SelectionStrategy,
) -> Result<&str, SelectionError> {
    let mut rng = rand::rng();
    select_one_with_rng(candidates, strategy, &mut rng)
}

/// Draw one label using a caller-supplied source.
///
/// An empty candidate list is reported as [`SelectionError::EmptyCandidateSet`]
/// before any weights are computed.
pub fn select_one_with_rng<'a, S: RandomSource + ?Sized>(
    candidates: &'a [Candidate],
    strategy: SelectionStrategy,
    source: &mut S,
) -> Result<&'a str, SelectionError> {
    if candidates.is_empty() {
        debug!("{strategy} selection over an empty candidate set");
        return Err(SelectionError::EmptyCandidateSet);
    }

    let resolved = resolve(candidates);
    let i = match strategy.draw_index(&resolved.weights, source) {
        Ok(i) => i,
        Err(e) => {
            debug!("{strategy} selection failed: {e}");
            return Err(e);
        }
    };

    let label = resolved.labels[i];
    trace!("{strategy} picked #{i} `{label}` of {}", resolved.len());
    Ok(label)
}

/// Draw `count` labels using the thread-local generator.
pub fn select_many(
    candidates: &[Candidate],
    strategy: SelectionStrategy,
    count: usize,
) -> Result<Vec<&str>, SelectionError> {
    let mut rng = rand::rng();
    select_many_with_rng(candidates, strategy, count, &mut rng)
}

/// Draw `count` independent labels using a caller-supplied source.
///
/// `count == 0` returns an empty vector without touching `source`. The first
/// failing draw aborts the batch; no partial result is returned.
pub fn select_many_with_rng<'a, S: RandomSource + ?Sized>(
    candidates: &'a [Candidate],
    strategy: SelectionStrategy,
    count: usize,
    source: &mut S,
) -> Result<Vec<&'a str>, SelectionError> {
    debug!(
        "{strategy} batch of {count} over {} candidates",
        candidates.len()
    );
    (0..count)
        .map(|_| select_one_with_rng(candidates, strategy, source))
        .collect()
}

/// A selection engine that owns its random source.
///
/// ```
/// use randex::{Candidate, SelectionEngine, SelectionStrategy};
///
/// let pool = vec![Candidate::pickup("SSR", 1.0, 2.0), Candidate::new("R", 8.0)];
/// let mut engine = SelectionEngine::seeded(7);
/// let pulls = engine.select_many(&pool, SelectionStrategy::Weighted, 10).unwrap();
/// assert_eq!(pulls.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct SelectionEngine<S> {
    source: S,
}

impl SelectionEngine<StdRng> {
    /// A reproducible engine seeded from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl Default for SelectionEngine<ThreadRng> {
    fn default() -> Self {
        Self::new(rand::rng())
    }
}

impl<S: RandomSource> SelectionEngine<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn select_one<'a>(
        &mut self,
        candidates: &'a [Candidate],
        strategy: SelectionStrategy,
    ) -> Result<&'a str, SelectionError> {
        select_one_with_rng(candidates, strategy, &mut self.source)
    }

    pub fn select_many<'a>(
        &mut self,
        candidates: &'a [Candidate],
        strategy: SelectionStrategy,
        count: usize,
    ) -> Result<Vec<&'a str>, SelectionError> {
        select_many_with_rng(candidates, strategy, count, &mut self.source)
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn into_source(self) -> S {
        self.source
    }
}
