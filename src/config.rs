//! Candidate tables loaded from TOML.
//!
//! ```toml
//! strategy = "weighted"
//!
//! [[candidates]]
//! label = "SSR Hero"
//! weight = 2.0
//! pickup = true
//! pickup_multiplier = 3.0
//!
//! [[candidates]]
//! label = "R Sword"
//! weight = 40.0
//! ```
//!
//! `strategy`, `pickup` and `pickup_multiplier` are optional and default to
//! `weighted`, `false` and `1.0`.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::candidate::Candidate;
use crate::engine::{select_many_with_rng, select_one_with_rng};
use crate::error::{ConfigError, SelectionError};
use crate::source::RandomSource;
use crate::strategy::SelectionStrategy;

/// A candidate list together with the strategy used to draw from it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CandidateTable {
    #[serde(default)]
    pub strategy: SelectionStrategy,
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl CandidateTable {
    pub fn new(strategy: SelectionStrategy, candidates: Vec<Candidate>) -> Self {
        Self {
            strategy,
            candidates,
        }
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Draw one label with the table's strategy.
    pub fn pull_one<S: RandomSource + ?Sized>(
        &self,
        source: &mut S,
    ) -> Result<&str, SelectionError> {
        select_one_with_rng(&self.candidates, self.strategy, source)
    }

    /// Draw `count` labels with the table's strategy.
    pub fn pull<S: RandomSource + ?Sized>(
        &self,
        count: usize,
        source: &mut S,
    ) -> Result<Vec<&str>, SelectionError> {
        select_many_with_rng(&self.candidates, self.strategy, count, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ReplaySource;

    const BANNER: &str = r#"
strategy = "weighted"

[[candidates]]
label = "A"
weight = 2.0
pickup = true
pickup_multiplier = 3.0

[[candidates]]
label = "B"
weight = 4.0
"#;

    #[test]
    fn parses_banner() {
        let table = CandidateTable::from_toml_str(BANNER).expect("valid toml");
        assert_eq!(table.strategy, SelectionStrategy::Weighted);
        assert_eq!(
            table.candidates,
            vec![Candidate::pickup("A", 2.0, 3.0), Candidate::new("B", 4.0)]
        );
    }

    #[test]
    fn defaults_apply() {
        let table = CandidateTable::from_toml_str(
            r#"
[[candidates]]
label = "only"
weight = 1.0
"#,
        )
        .expect("valid toml");
        assert_eq!(table.strategy, SelectionStrategy::Weighted);
        assert!(!table.candidates[0].is_pickup);
        assert_eq!(table.candidates[0].pickup_multiplier, 1.0);

        let empty = CandidateTable::from_toml_str("").expect("valid toml");
        assert!(empty.candidates.is_empty());
    }

    #[test]
    fn strategy_names_accept_variants() {
        let table = CandidateTable::from_toml_str(r#"strategy = "CumulativeProbability""#)
            .expect("valid toml");
        assert_eq!(table.strategy, SelectionStrategy::CumulativeProbability);
    }

    #[test]
    fn unknown_strategy_is_parse_error() {
        let err = CandidateTable::from_toml_str(r#"strategy = "lottery""#)
            .expect_err("unknown strategy");
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("unknown selection strategy"), "{err}");
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = CandidateTable::load("/nonexistent/randex/banner.toml").expect_err("missing");
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn pulls_use_table_strategy() {
        let table = CandidateTable::from_toml_str(BANNER).expect("valid toml");
        let mut src = ReplaySource::new([0.7, 0.3]);
        assert_eq!(table.pull_one(&mut src), Ok("B"));
        assert_eq!(table.pull(1, &mut src), Ok(vec!["A"]));

        let empty = CandidateTable::default();
        assert_eq!(empty.pull(2, &mut src), Err(SelectionError::EmptyCandidateSet));
    }

    #[test]
    fn serializes_back_to_toml() {
        let table = CandidateTable::from_toml_str(BANNER).expect("valid toml");
        let text = toml::to_string(&table).expect("serializable");
        assert!(text.contains(r#"strategy = "weighted""#), "{text}");
        assert_eq!(CandidateTable::from_toml_str(&text).expect("reparse"), table);
    }
}
