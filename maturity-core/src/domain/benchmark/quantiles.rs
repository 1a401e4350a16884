// maturity-core/src/domain/benchmark/quantiles.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use validator::{Validate, ValidationError};

use crate::domain::error::DomainError;

/// Score breakpoints of a peer distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_non_decreasing"))]
pub struct Quantiles {
    #[validate(range(min = 0.0, max = 100.0))]
    pub p25: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub p50: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub p75: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub p90: f64,
}

impl Quantiles {
    pub fn new(p25: f64, p50: f64, p75: f64, p90: f64) -> Self {
        Self { p25, p50, p75, p90 }
    }
}

fn validate_non_decreasing(q: &Quantiles) -> Result<(), ValidationError> {
    if q.p25 <= q.p50 && q.p50 <= q.p75 && q.p75 <= q.p90 {
        Ok(())
    } else {
        Err(ValidationError::new("quantiles_not_non_decreasing"))
    }
}

/// Statistical confidence attached to a benchmark segment, by sample size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    SeedEstimate,
    Preliminary,
    Reliable,
    Robust,
}

impl ConfidenceTier {
    pub fn from_sample_size(sample_size: u32) -> Self {
        match sample_size {
            0..=29 => Self::SeedEstimate,
            30..=99 => Self::Preliminary,
            100..=499 => Self::Reliable,
            _ => Self::Robust,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SeedEstimate => "seed_estimate",
            Self::Preliminary => "preliminary",
            Self::Reliable => "reliable",
            Self::Robust => "robust",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Peer distribution for one industry x size segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkQuantiles {
    pub industry: String,
    pub organization_size: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benchmark_period: Option<String>,
    #[serde(default)]
    pub sample_size: u32,
    pub overall: Quantiles,
    #[serde(default)]
    pub dimensions: BTreeMap<String, Quantiles>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence_tier: Option<ConfidenceTier>,
}

impl BenchmarkQuantiles {
    /// Quantiles of a dimension, falling back to the overall distribution.
    pub fn quantiles_for(&self, dimension: &str) -> &Quantiles {
        self.dimensions.get(dimension).unwrap_or(&self.overall)
    }

    /// Declared tier, or the one implied by the sample size.
    pub fn confidence(&self) -> ConfidenceTier {
        self.confidence_tier
            .unwrap_or_else(|| ConfidenceTier::from_sample_size(self.sample_size))
    }

    pub fn has_data(&self) -> bool {
        self.sample_size > 0
    }

    pub fn check(&self) -> Result<(), DomainError> {
        let segment = format!("{} / {}", self.industry, self.organization_size);
        self.overall
            .validate()
            .map_err(|e| DomainError::InvalidBenchmark(format!("{} overall: {}", segment, e)))?;
        for (dimension, quantiles) in &self.dimensions {
            quantiles.validate().map_err(|e| {
                DomainError::InvalidBenchmark(format!("{} {}: {}", segment, dimension, e))
            })?;
        }
        Ok(())
    }
}
