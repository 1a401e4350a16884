// maturity-core/src/domain/benchmark/gap.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, instrument};
use validator::{Validate, ValidationError};

use crate::domain::benchmark::comparator::PeerComparator;
use crate::domain::benchmark::quantiles::{BenchmarkQuantiles, Quantiles};
use crate::domain::numeric::round_to;
use crate::domain::scoring::MaturityLevel;

/// Which peer quantile counts as "best in class".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BestInClassPercentile {
    P50,
    P75,
    #[default]
    P90,
}

impl BestInClassPercentile {
    pub fn pick(&self, q: &Quantiles) -> f64 {
        match self {
            Self::P50 => q.p50,
            Self::P75 => q.p75,
            Self::P90 => q.p90,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GapSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl GapSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for GapSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inclusive lower bounds (in score points) of the severity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_severity_order"))]
pub struct SeverityThresholds {
    #[validate(range(min = 0.0, max = 100.0))]
    pub critical: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub high: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub medium: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            critical: 30.0,
            high: 20.0,
            medium: 10.0,
        }
    }
}

fn validate_severity_order(t: &SeverityThresholds) -> Result<(), ValidationError> {
    if t.medium <= t.high && t.high <= t.critical {
        Ok(())
    } else {
        Err(ValidationError::new("severity_thresholds_out_of_order"))
    }
}

impl SeverityThresholds {
    pub fn classify(&self, gap: f64) -> GapSeverity {
        if gap >= self.critical {
            GapSeverity::Critical
        } else if gap >= self.high {
            GapSeverity::High
        } else if gap >= self.medium {
            GapSeverity::Medium
        } else {
            GapSeverity::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapEntry {
    pub dimension: String,
    pub current_score: f64,
    pub best_in_class_score: f64,
    pub gap_size: f64,
    pub gap_percent: f64,
    pub severity: GapSeverity,
    pub current_maturity_level: MaturityLevel,
    pub target_maturity_level: MaturityLevel,
}

impl PeerComparator {
    /// Distance of every dimension to the best-in-class quantile, largest
    /// gap first. Ties keep dimension order. No benchmark (or an empty
    /// segment) yields an empty list.
    #[instrument(skip_all, fields(dimensions = scores.len()))]
    pub fn analyze_gap_vs_best_in_class(
        &self,
        scores: &BTreeMap<String, f64>,
        benchmark: Option<&BenchmarkQuantiles>,
    ) -> Vec<GapEntry> {
        let Some(benchmark) = benchmark.filter(|b| b.has_data()) else {
            return Vec::new();
        };

        let mut gaps: Vec<GapEntry> = scores
            .iter()
            .map(|(dimension, &score)| {
                let best = self.config.best_in_class.pick(benchmark.quantiles_for(dimension));
                let raw_gap = (best - score).max(0.0);
                let gap_percent = if best > 0.0 {
                    round_to(raw_gap / best * 100.0, 1)
                } else {
                    0.0
                };
                GapEntry {
                    dimension: dimension.clone(),
                    current_score: score,
                    best_in_class_score: best,
                    gap_size: round_to(raw_gap, 2),
                    gap_percent,
                    severity: self.config.severity.classify(raw_gap),
                    current_maturity_level: self.thresholds.level_for(score),
                    target_maturity_level: self.thresholds.level_for(best),
                }
            })
            .collect();

        gaps.sort_by(|a, b| b.gap_size.total_cmp(&a.gap_size));

        info!(
            gaps = gaps.len(),
            largest = gaps.first().map(|g| g.gap_size).unwrap_or(0.0),
            "Gap analysis complete"
        );
        gaps
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::benchmark::comparator::ComparatorConfig;
    use crate::domain::scoring::MaturityThresholds;

    fn benchmark() -> BenchmarkQuantiles {
        let mut dimensions = BTreeMap::new();
        dimensions.insert("data".to_string(), Quantiles::new(30.0, 45.0, 60.0, 80.0));
        dimensions.insert("people".to_string(), Quantiles::new(20.0, 30.0, 40.0, 50.0));
        BenchmarkQuantiles {
            industry: "finance".into(),
            organization_size: "enterprise".into(),
            benchmark_period: None,
            sample_size: 200,
            overall: Quantiles::new(25.0, 40.0, 55.0, 72.0),
            dimensions,
            confidence_tier: None,
        }
    }

    fn scores() -> BTreeMap<String, f64> {
        [("data", 50.0), ("people", 65.0), ("process", 50.0)]
            .iter()
            .map(|(d, s)| (d.to_string(), *s))
            .collect()
    }

    #[test]
    fn test_severity_tiers() {
        let t = SeverityThresholds::default();
        assert_eq!(t.classify(30.0), GapSeverity::Critical);
        assert_eq!(t.classify(29.99), GapSeverity::High);
        assert_eq!(t.classify(20.0), GapSeverity::High);
        assert_eq!(t.classify(10.0), GapSeverity::Medium);
        assert_eq!(t.classify(9.9), GapSeverity::Low);
        assert_eq!(t.classify(0.0), GapSeverity::Low);
    }

    #[test]
    fn test_gaps_are_clamped_and_sorted() {
        let comparator = PeerComparator::default();
        let gaps = comparator.analyze_gap_vs_best_in_class(&scores(), Some(&benchmark()));
        assert_eq!(gaps.len(), 3);
        assert_eq!(gaps[0].dimension, "data");
        assert_eq!(gaps[0].gap_size, 30.0);
        assert_eq!(gaps[0].gap_percent, 37.5);
        assert_eq!(gaps[0].target_maturity_level, MaturityLevel::Optimizing);
        // process falls back to overall p90 = 72
        assert_eq!(gaps[1].dimension, "process");
        assert_eq!(gaps[1].gap_size, 22.0);
        assert_eq!(gaps[1].severity, GapSeverity::High);
        // people is above best-in-class
        assert_eq!(gaps[2].dimension, "people");
        assert_eq!(gaps[2].gap_size, 0.0);
        assert_eq!(gaps[2].severity, GapSeverity::Low);
    }

    #[test]
    fn test_alternate_best_in_class_percentile() {
        let config = ComparatorConfig {
            best_in_class: BestInClassPercentile::P75,
            ..ComparatorConfig::default()
        };
        let comparator = PeerComparator::new(config, MaturityThresholds::default());
        let gaps = comparator.analyze_gap_vs_best_in_class(&scores(), Some(&benchmark()));
        let data = gaps.iter().find(|g| g.dimension == "data").unwrap();
        assert_eq!(data.best_in_class_score, 60.0);
        assert_eq!(data.gap_size, 10.0);
    }

    #[test]
    fn test_severity_uses_unrounded_gap() {
        let comparator = PeerComparator::default();
        let mut near = BTreeMap::new();
        near.insert("data".to_string(), 50.004);
        let gaps = comparator.analyze_gap_vs_best_in_class(&near, Some(&benchmark()));
        // 29.996 is reported as 30.0 but is still below the critical cut
        assert_eq!(gaps[0].gap_size, 30.0);
        assert_eq!(gaps[0].severity, GapSeverity::High);
    }

    #[test]
    fn test_no_benchmark_means_no_gaps() {
        let comparator = PeerComparator::default();
        assert!(comparator.analyze_gap_vs_best_in_class(&scores(), None).is_empty());
    }
}
