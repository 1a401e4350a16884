// maturity-core/src/domain/scoring/weights.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::error::DomainError;

/// Accepted deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Scoring weight per dimension. Construction enforces that the weights sum
/// to 1.0 (within [`WEIGHT_SUM_TOLERANCE`]), so holding a value of this type
/// is proof the set was validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct DimensionWeightSet {
    weights: BTreeMap<String, f64>,
}

impl DimensionWeightSet {
    /// Strict constructor: rejects sets that do not sum to 1.0.
    pub fn new(weights: BTreeMap<String, f64>) -> Result<Self, DomainError> {
        if weights.is_empty() {
            return Err(DomainError::EmptyWeightSet);
        }
        for (dimension, &weight) in &weights {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(DomainError::InvalidWeight {
                    dimension: dimension.clone(),
                    weight,
                });
            }
        }
        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(DomainError::InvalidWeightSum { sum });
        }
        Ok(Self { weights })
    }

    /// Opt-in proportional normalisation. Every weight is divided by the sum.
    pub fn rebalanced(weights: BTreeMap<String, f64>) -> Result<Self, DomainError> {
        if weights.is_empty() {
            return Err(DomainError::EmptyWeightSet);
        }
        for (dimension, &weight) in &weights {
            if !weight.is_finite() || weight < 0.0 {
                return Err(DomainError::InvalidWeight {
                    dimension: dimension.clone(),
                    weight,
                });
            }
        }
        let sum: f64 = weights.values().sum();
        if sum <= 0.0 {
            return Err(DomainError::InvalidWeightSum { sum });
        }
        let normalised = weights
            .into_iter()
            .map(|(dimension, weight)| (dimension, weight / sum))
            .collect();
        Ok(Self {
            weights: normalised,
        })
    }

    /// Weight of a configured dimension.
    pub fn weight(&self, dimension: &str) -> Result<f64, DomainError> {
        self.weights
            .get(dimension)
            .copied()
            .ok_or_else(|| DomainError::UnknownDimension(dimension.to_string()))
    }

    pub fn contains(&self, dimension: &str) -> bool {
        self.weights.contains_key(dimension)
    }

    pub fn dimensions(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(d, w)| (d.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.weights.values().sum()
    }
}

impl Default for DimensionWeightSet {
    fn default() -> Self {
        let weights = [
            ("data", 0.25),
            ("process", 0.20),
            ("people", 0.20),
            ("technology", 0.20),
            ("governance", 0.15),
        ]
        .into_iter()
        .map(|(d, w)| (d.to_string(), w))
        .collect();
        Self { weights }
    }
}

impl TryFrom<BTreeMap<String, f64>> for DimensionWeightSet {
    type Error = DomainError;

    fn try_from(weights: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        Self::new(weights)
    }
}

impl From<DimensionWeightSet> for BTreeMap<String, f64> {
    fn from(set: DimensionWeightSet) -> Self {
        set.weights
    }
}
