//! Error types.

use thiserror::Error;

/// Errors returned by selection operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SelectionError {
    /// The candidate list has no entries.
    #[error("candidate set is empty")]
    EmptyCandidateSet,
    /// Total effective weight is exactly zero under a normalizing strategy.
    #[error("sum of effective weights must not be zero (got {total})")]
    InvalidWeights { total: f64 },
    /// A strategy name did not match any known selection semantics.
    #[error("unknown selection strategy `{0}`")]
    UnknownStrategy(String),
}

/// Errors returned while loading a candidate table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read candidate table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse candidate table: {0}")]
    Parse(#[from] toml::de::Error),
}
