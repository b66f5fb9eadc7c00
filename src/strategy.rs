//! Selection semantics.
//!
//! Three ways of reading a weight vector, all ending in the same threshold
//! walk: draw `u` in `[0, 1)` and return the first index whose running total
//! satisfies `u <= total`. If no index qualifies, the last one is returned.
//!
//! - [`SelectionStrategy::Probability`]: weights are already probabilities.
//!   Nothing is normalized, so a vector summing to less than one leaves the
//!   remaining mass to the last candidate.
//! - [`SelectionStrategy::Weighted`]: weights are relative; they are divided by
//!   their sum (when it is not already one) before walking.
//! - [`SelectionStrategy::CumulativeProbability`]: an explicit prefix-sum table
//!   over the *raw* weights is built and searched. Unlike `Weighted`, this does
//!   not normalize, so weights summing past one concentrate on early entries.
//!
//! Because the comparison is `<=`, a draw landing exactly on a threshold picks
//! the candidate whose interval closes there, and among zero-weight neighbours
//! the lowest index wins.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SelectionError;
use crate::source::RandomSource;

/// Which semantics to apply to the effective weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SelectionStrategy {
    /// Weights are raw probabilities, walked as-is.
    Probability,
    /// Weights are relative and normalized by their sum.
    #[default]
    Weighted,
    /// Weights are walked through an un-normalized prefix-sum table.
    CumulativeProbability,
}

impl SelectionStrategy {
    pub const ALL: [SelectionStrategy; 3] = [
        SelectionStrategy::Probability,
        SelectionStrategy::Weighted,
        SelectionStrategy::CumulativeProbability,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            SelectionStrategy::Probability => "probability",
            SelectionStrategy::Weighted => "weighted",
            SelectionStrategy::CumulativeProbability => "cumulative_probability",
        }
    }

    /// Draw one label.
    ///
    /// # Panics
    ///
    /// Panics if `labels` and `weights` have different lengths.
    pub fn draw<'a, S: RandomSource + ?Sized>(
        self,
        labels: &[&'a str],
        weights: &[f64],
        source: &mut S,
    ) -> Result<&'a str, SelectionError> {
        assert_eq!(
            labels.len(),
            weights.len(),
            "draw: labels and weights must have the same length"
        );
        let i = self.draw_index(weights, source)?;
        Ok(labels[i])
    }

    /// Draw one index into `weights`.
    ///
    /// Consumes exactly one value from `source` on success. Validation errors
    /// are reported before the source is touched.
    pub fn draw_index<S: RandomSource + ?Sized>(
        self,
        weights: &[f64],
        source: &mut S,
    ) -> Result<usize, SelectionError> {
        if weights.is_empty() {
            return Err(SelectionError::EmptyCandidateSet);
        }

        match self {
            SelectionStrategy::Probability => {
                let u = source.next_unit();
                Ok(running_walk(weights, u))
            }
            SelectionStrategy::Weighted => {
                let normalized = normalize(weights)?;
                let u = source.next_unit();
                Ok(running_walk(&normalized, u))
            }
            SelectionStrategy::CumulativeProbability => {
                let table = prefix_sums(weights)?;
                let u = source.next_unit();
                Ok(search_table(&table, u))
            }
        }
    }
}

/// Accumulate as we go; first index with `u <= running`, else the last.
fn running_walk(weights: &[f64], u: f64) -> usize {
    let mut running = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        running += w;
        if u <= running {
            return i;
        }
    }
    weights.len() - 1
}

/// First index whose prefix sum reaches `u`, else the last.
fn search_table(table: &[f64], u: f64) -> usize {
    table
        .iter()
        .position(|&c| u <= c)
        .unwrap_or(table.len() - 1)
}

fn nonzero_total(weights: &[f64]) -> Result<f64, SelectionError> {
    let total: f64 = weights.iter().sum();
    if total == 0.0 {
        return Err(SelectionError::InvalidWeights { total });
    }
    Ok(total)
}

/// Fresh copy of `weights` scaled to sum to one.
///
/// Finite weights whose sum overflows are first rescaled by the largest
/// magnitude so the division stays meaningful.
fn normalize(weights: &[f64]) -> Result<Vec<f64>, SelectionError> {
    let mut total = nonzero_total(weights)?;
    let mut out = weights.to_vec();
    if total.is_infinite() && weights.iter().all(|w| w.is_finite()) {
        let max = weights.iter().fold(0.0_f64, |m, &w| m.max(w.abs()));
        for w in &mut out {
            *w /= max;
        }
        total = out.iter().sum();
    }
    if total != 1.0 {
        for w in &mut out {
            *w /= total;
        }
    }
    Ok(out)
}

fn prefix_sums(weights: &[f64]) -> Result<Vec<f64>, SelectionError> {
    nonzero_total(weights)?;
    let mut table = Vec::with_capacity(weights.len());
    let mut running = 0.0;
    for &w in weights {
        running += w;
        table.push(running);
    }
    Ok(table)
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SelectionStrategy {
    type Err = SelectionError;

    /// Case-insensitive; `-`, `_` and spaces are ignored, so `Weighted`,
    /// `cumulative-probability` and `CumulativeProbability` all parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match key.as_str() {
            "probability" => Ok(SelectionStrategy::Probability),
            "weighted" => Ok(SelectionStrategy::Weighted),
            "cumulativeprobability" | "cumulative" => {
                Ok(SelectionStrategy::CumulativeProbability)
            }
            _ => Err(SelectionError::UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for SelectionStrategy {
    type Error = SelectionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SelectionStrategy> for String {
    fn from(s: SelectionStrategy) -> Self {
        s.name().to_string()
    }
}
