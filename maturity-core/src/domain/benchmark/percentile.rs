// maturity-core/src/domain/benchmark/percentile.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{info, instrument, warn};

use crate::domain::benchmark::comparator::PeerComparator;
use crate::domain::benchmark::quantiles::{BenchmarkQuantiles, Quantiles};
use crate::domain::numeric::round_to;
use crate::domain::scoring::MaturityLevel;

/// Percentile reported for every dimension when no peer data exists.
pub const NEUTRAL_PERCENTILE: f64 = 50.0;

const STRENGTH_PERCENTILE: f64 = 75.0;
const AVERAGE_PERCENTILE: f64 = 40.0;

/// Piecewise-linear percentile estimate through (0,0), (p25,25), (p50,50),
/// (p75,75), (p90,90) and (100,100).
///
/// Comparisons are `score <= pN` evaluated bottom-up, so each breakpoint
/// belongs to the segment below it: `score == p90` lands in `(p75, p90]`
/// and yields exactly 90. A degenerate segment (equal bounds) snaps to its
/// lower percentile.
pub fn interpolate_percentile(score: f64, q: &Quantiles) -> f64 {
    let percentile = if score <= q.p25 {
        if q.p25 > 0.0 { 25.0 * score / q.p25 } else { 0.0 }
    } else if score <= q.p50 {
        band(score, q.p25, q.p50, 25.0, 25.0)
    } else if score <= q.p75 {
        band(score, q.p50, q.p75, 50.0, 25.0)
    } else if score <= q.p90 {
        band(score, q.p75, q.p90, 75.0, 15.0)
    } else {
        let span = (100.0 - q.p90).max(1.0);
        90.0 + 10.0 * ((score - q.p90) / span).min(1.0)
    };
    percentile.clamp(0.0, 100.0)
}

fn band(score: f64, low: f64, high: f64, base: f64, width: f64) -> f64 {
    if high > low {
        base + width * (score - low) / (high - low)
    } else {
        base
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    Strength,
    Average,
    Gap,
}

impl Classification {
    pub fn from_percentile(percentile: f64) -> Self {
        if percentile >= STRENGTH_PERCENTILE {
            Self::Strength
        } else if percentile >= AVERAGE_PERCENTILE {
            Self::Average
        } else {
            Self::Gap
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Average => "average",
            Self::Gap => "gap",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionRanking {
    pub score: f64,
    pub percentile: f64,
    pub classification: Classification,
    pub maturity_level: MaturityLevel,
    pub peer_p50: Option<f64>,
    pub vs_median_delta: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileRankings {
    pub overall_score: f64,
    pub overall_percentile: f64,
    pub overall_maturity_level: MaturityLevel,
    pub dimensions: BTreeMap<String, DimensionRanking>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub has_benchmark_data: bool,
    pub peer_sample_size: u32,
    pub benchmark_period: Option<String>,
}

impl PercentileRankings {
    pub fn percentile(&self, dimension: &str) -> Option<f64> {
        self.dimensions.get(dimension).map(|r| r.percentile)
    }
}

impl PeerComparator {
    /// Ranks each dimension score inside the peer distribution. Without a
    /// benchmark, or with an empty segment, every percentile is 50.0.
    #[instrument(skip_all, fields(dimensions = scores.len()))]
    pub fn compute_percentile_rankings(
        &self,
        scores: &BTreeMap<String, f64>,
        benchmark: Option<&BenchmarkQuantiles>,
    ) -> PercentileRankings {
        let benchmark = benchmark.filter(|b| b.has_data());
        if benchmark.is_none() {
            warn!("No peer data, using neutral percentiles");
        }

        let mut dimensions = BTreeMap::new();
        let mut strengths = Vec::new();
        let mut weaknesses = Vec::new();

        for (dimension, &score) in scores {
            let (raw_percentile, peer_p50) = match benchmark {
                Some(b) => {
                    let q = b.quantiles_for(dimension);
                    (interpolate_percentile(score, q), Some(q.p50))
                }
                None => (NEUTRAL_PERCENTILE, None),
            };
            // classify before rounding so 74.95 stays below the strength cut
            let classification = Classification::from_percentile(raw_percentile);
            let percentile = round_to(raw_percentile, 1);
            match classification {
                Classification::Strength => strengths.push(dimension.clone()),
                Classification::Gap => weaknesses.push(dimension.clone()),
                Classification::Average => {}
            }
            dimensions.insert(
                dimension.clone(),
                DimensionRanking {
                    score,
                    percentile,
                    classification,
                    maturity_level: self.thresholds.level_for(score),
                    peer_p50,
                    vs_median_delta: peer_p50.map(|p50| round_to(score - p50, 2)),
                },
            );
        }

        let overall_score = if scores.is_empty() {
            0.0
        } else {
            round_to(scores.values().sum::<f64>() / scores.len() as f64, 2)
        };
        let overall_percentile = match benchmark {
            Some(b) => round_to(interpolate_percentile(overall_score, &b.overall), 1),
            None => NEUTRAL_PERCENTILE,
        };

        info!(
            overall_percentile,
            strengths = strengths.len(),
            weaknesses = weaknesses.len(),
            "Percentile rankings computed"
        );

        PercentileRankings {
            overall_score,
            overall_percentile,
            overall_maturity_level: self.thresholds.level_for(overall_score),
            dimensions,
            strengths,
            weaknesses,
            has_benchmark_data: benchmark.is_some(),
            peer_sample_size: benchmark.map(|b| b.sample_size).unwrap_or(0),
            benchmark_period: benchmark.and_then(|b| b.benchmark_period.clone()),
        }
    }
}
