//! `randex`: weighted candidate selection for loot and gacha draws.
//!
//! Candidates carry a base weight and an optional pickup multiplier. A draw
//! resolves effective weights, then applies one of three selection semantics:
//!
//! - `Probability`: weights are raw probabilities, walked as-is.
//! - `Weighted`: weights are normalized by their sum first.
//! - `CumulativeProbability`: an un-normalized prefix-sum table is searched.
//!
//! Exposed modules:
//! - `candidate`: the [`Candidate`] item type.
//! - `resolve`: effective-weight resolution.
//! - `strategy`: the three selection semantics.
//! - `engine`: single and multi-draw entrypoints, plus [`SelectionEngine`].
//! - `source`: the injected [`RandomSource`] capability.
//! - `config`: TOML candidate tables.
//!
//! ```
//! use randex::{select_one_with_rng, Candidate, ReplaySource, SelectionStrategy};
//!
//! let pool = vec![Candidate::pickup("A", 2.0, 3.0), Candidate::new("B", 4.0)];
//! // Effective weights [6, 4] normalize to [0.6, 0.4].
//! let mut draws = ReplaySource::new([0.7]);
//! let pick = select_one_with_rng(&pool, SelectionStrategy::Weighted, &mut draws)?;
//! assert_eq!(pick, "B");
//! # Ok::<(), randex::SelectionError>(())
//! ```

#![forbid(unsafe_code)]

pub mod candidate;
pub mod config;
pub mod engine;
pub mod error;
pub mod resolve;
pub mod source;
pub mod strategy;

pub use candidate::Candidate;
pub use config::CandidateTable;
pub use engine::{
    select_many, select_many_with_rng, select_one, select_one_with_rng, SelectionEngine,
};
pub use error::{ConfigError, SelectionError};
pub use resolve::{resolve, Resolved};
pub use source::{RandomSource, ReplaySource};
pub use strategy::SelectionStrategy;
