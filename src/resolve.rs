//! Effective-weight resolution.

use crate::candidate::Candidate;

/// Labels and effective weights, in candidate order.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved<'a> {
    pub labels: Vec<&'a str>,
    pub weights: Vec<f64>,
}

impl Resolved<'_> {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Split candidates into parallel label / effective-weight vectors.
///
/// Always allocates a fresh weight vector, so strategies are free to normalize
/// it without touching the caller's candidates.
pub fn resolve(candidates: &[Candidate]) -> Resolved<'_> {
    let mut labels = Vec::with_capacity(candidates.len());
    let mut weights = Vec::with_capacity(candidates.len());
    for c in candidates {
        labels.push(c.label.as_str());
        weights.push(c.effective_weight());
    }
    Resolved { labels, weights }
}
