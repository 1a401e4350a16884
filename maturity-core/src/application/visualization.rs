// maturity-core/src/application/visualization.rs
//
// Chart-ready view of a peer comparison: radar, percentile bars, gap
// waterfall and headline cards. Presentation data only, no scoring logic.

use serde::{Deserialize, Serialize};

use crate::application::assessment::ComparisonReport;
use crate::domain::benchmark::{Classification, GapEntry, GapSeverity, PercentileRankings};
use crate::domain::numeric::round_to;

// ── Chart Structures ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarChart {
    /// Dimension ids, in the order of every series below.
    pub axes: Vec<String>,
    pub score: Vec<f64>,
    /// `None` where the peer group has no data.
    pub peer_median: Vec<Option<f64>>,
    pub best_in_class: Vec<Option<f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PercentileBar {
    pub dimension: String,
    pub percentile: f64,
    pub classification: Classification,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterfallStep {
    pub dimension: String,
    pub gap_size: f64,
    /// Running total before this step.
    pub offset: f64,
    pub severity: GapSeverity,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapWaterfall {
    pub steps: Vec<WaterfallStep>,
    pub total_gap: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryCards {
    pub overall_maturity_level: u8,
    pub overall_maturity_label: String,
    pub overall_percentile: f64,
    pub strength_count: usize,
    pub critical_gap_count: usize,
    pub has_benchmark_data: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonVisualization {
    pub radar: RadarChart,
    pub percentile_bars: Vec<PercentileBar>,
    pub gap_waterfall: GapWaterfall,
    pub summary_cards: SummaryCards,
}

impl ComparisonVisualization {
    pub fn from_report(report: &ComparisonReport) -> Self {
        Self::build(&report.rankings, &report.gaps)
    }

    pub fn build(rankings: &PercentileRankings, gaps: &[GapEntry]) -> Self {
        Self {
            radar: radar(rankings, gaps),
            percentile_bars: rankings
                .dimensions
                .iter()
                .map(|(dimension, r)| PercentileBar {
                    dimension: dimension.clone(),
                    percentile: r.percentile,
                    classification: r.classification,
                })
                .collect(),
            gap_waterfall: waterfall(gaps),
            summary_cards: SummaryCards {
                overall_maturity_level: rankings.overall_maturity_level.as_u8(),
                overall_maturity_label: rankings.overall_maturity_level.label().to_string(),
                overall_percentile: rankings.overall_percentile,
                strength_count: rankings.strengths.len(),
                critical_gap_count: gaps
                    .iter()
                    .filter(|g| g.severity == GapSeverity::Critical)
                    .count(),
                has_benchmark_data: rankings.has_benchmark_data,
            },
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn radar(rankings: &PercentileRankings, gaps: &[GapEntry]) -> RadarChart {
    let mut chart = RadarChart {
        axes: Vec::with_capacity(rankings.dimensions.len()),
        score: Vec::with_capacity(rankings.dimensions.len()),
        peer_median: Vec::with_capacity(rankings.dimensions.len()),
        best_in_class: Vec::with_capacity(rankings.dimensions.len()),
    };
    for (dimension, ranking) in &rankings.dimensions {
        chart.axes.push(dimension.clone());
        chart.score.push(ranking.score);
        chart.peer_median.push(ranking.peer_p50);
        chart.best_in_class.push(
            gaps.iter()
                .find(|g| &g.dimension == dimension)
                .map(|g| g.best_in_class_score),
        );
    }
    chart
}

// Steps follow the gap order (largest first).
fn waterfall(gaps: &[GapEntry]) -> GapWaterfall {
    let mut offset = 0.0;
    let steps = gaps
        .iter()
        .filter(|g| g.gap_size > 0.0)
        .map(|g| {
            let step = WaterfallStep {
                dimension: g.dimension.clone(),
                gap_size: g.gap_size,
                offset: round_to(offset, 2),
                severity: g.severity,
            };
            offset += g.gap_size;
            step
        })
        .collect();
    GapWaterfall {
        steps,
        total_gap: round_to(offset, 2),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::benchmark::{BenchmarkQuantiles, PeerComparator, Quantiles};
    use std::collections::BTreeMap;

    fn scores() -> BTreeMap<String, f64> {
        [("data", 50.0), ("people", 70.0), ("process", 85.0)]
            .into_iter()
            .map(|(d, s)| (d.to_string(), s))
            .collect()
    }

    fn benchmark() -> BenchmarkQuantiles {
        BenchmarkQuantiles {
            industry: "retail".into(),
            organization_size: "smb".into(),
            benchmark_period: None,
            sample_size: 80,
            overall: Quantiles::new(30.0, 45.0, 60.0, 80.0),
            dimensions: BTreeMap::new(),
            confidence_tier: None,
        }
    }

    #[test]
    fn test_waterfall_accumulates_in_gap_order() {
        let comparator = PeerComparator::default();
        let gaps = comparator.analyze_gap_vs_best_in_class(&scores(), Some(&benchmark()));
        let rankings = comparator.compute_percentile_rankings(&scores(), Some(&benchmark()));

        let viz = ComparisonVisualization::build(&rankings, &gaps);

        // process is above p90 and contributes no step
        let dims: Vec<&str> = viz.gap_waterfall.steps.iter().map(|s| s.dimension.as_str()).collect();
        assert_eq!(dims, vec!["data", "people"]);
        assert_eq!(viz.gap_waterfall.steps[1].offset, 30.0);
        assert_eq!(viz.gap_waterfall.total_gap, 40.0);
        assert_eq!(viz.summary_cards.critical_gap_count, 1);
    }

    #[test]
    fn test_radar_series_are_aligned() {
        let comparator = PeerComparator::default();
        let gaps = comparator.analyze_gap_vs_best_in_class(&scores(), Some(&benchmark()));
        let rankings = comparator.compute_percentile_rankings(&scores(), Some(&benchmark()));

        let radar = ComparisonVisualization::build(&rankings, &gaps).radar;

        assert_eq!(radar.axes, vec!["data", "people", "process"]);
        assert_eq!(radar.score, vec![50.0, 70.0, 85.0]);
        assert_eq!(radar.peer_median, vec![Some(45.0); 3]);
        assert_eq!(radar.best_in_class, vec![Some(80.0); 3]);
    }

    #[test]
    fn test_without_benchmark() {
        let comparator = PeerComparator::default();
        let rankings = comparator.compute_percentile_rankings(&scores(), None);

        let viz = ComparisonVisualization::build(&rankings, &[]);

        assert!(!viz.summary_cards.has_benchmark_data);
        assert_eq!(viz.summary_cards.overall_percentile, 50.0);
        assert!(viz.gap_waterfall.steps.is_empty());
        assert_eq!(viz.radar.peer_median, vec![None; 3]);
        assert!(viz.percentile_bars.iter().all(|b| b.percentile == 50.0));
    }
}
