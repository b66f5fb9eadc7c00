//! Candidate items.

use serde::{Deserialize, Serialize};

/// A named item that can be drawn.
///
/// `base_weight` is read as a raw probability or a relative weight depending on
/// the [`SelectionStrategy`](crate::SelectionStrategy) used for the draw.
/// Weights are expected to be non-negative; negative values are not rejected
/// and give unspecified (but non-panicking) results. The same holds for NaN
/// or infinite weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    #[serde(rename = "weight")]
    pub base_weight: f64,
    #[serde(rename = "pickup", default)]
    pub is_pickup: bool,
    #[serde(default = "default_multiplier")]
    pub pickup_multiplier: f64,
}

fn default_multiplier() -> f64 {
    1.0
}

impl Candidate {
    /// A regular (non-pickup) candidate.
    pub fn new(label: impl Into<String>, base_weight: f64) -> Self {
        Self {
            label: label.into(),
            base_weight,
            is_pickup: false,
            pickup_multiplier: default_multiplier(),
        }
    }

    /// A pickup candidate whose weight is boosted by `multiplier`.
    pub fn pickup(label: impl Into<String>, base_weight: f64, multiplier: f64) -> Self {
        Self::new(label, base_weight).with_pickup(multiplier)
    }

    /// Mark this candidate as pickup-eligible with the given multiplier.
    pub fn with_pickup(mut self, multiplier: f64) -> Self {
        self.is_pickup = true;
        self.pickup_multiplier = multiplier;
        self
    }

    /// Weight actually used for sampling.
    ///
    /// The multiplier only applies when `is_pickup` is set; a non-pickup
    /// candidate keeps its base weight whatever its multiplier says.
    #[inline]
    pub fn effective_weight(&self) -> f64 {
        if self.is_pickup {
            self.base_weight * self.pickup_multiplier
        } else {
            self.base_weight
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pickup_multiplies_base_weight() {
        let c = Candidate::pickup("hero", 2.0, 3.0);
        assert!(c.is_pickup);
        assert_eq!(c.effective_weight(), 6.0);
    }

    #[test]
    fn multiplier_ignored_without_pickup_flag() {
        let mut c = Candidate::new("slime", 4.0);
        c.pickup_multiplier = 10.0;
        assert_eq!(c.effective_weight(), 4.0);
    }

    #[test]
    fn default_multiplier_is_one() {
        let c = Candidate::new("slime", 0.25);
        assert_eq!(c.pickup_multiplier, 1.0);
        assert_eq!(c.with_pickup(1.0).effective_weight(), 0.25);
    }
}
