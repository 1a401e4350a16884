// maturity-core/src/domain/benchmark/peer_group.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{info, instrument, warn};

use crate::domain::benchmark::comparator::PeerComparator;
use crate::domain::benchmark::quantiles::{BenchmarkQuantiles, ConfidenceTier};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchQuality {
    Exact,
    IndustryOnly,
    GlobalFallback,
    #[serde(rename = "none")]
    NoData,
}

impl MatchQuality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::IndustryOnly => "industry_only",
            Self::GlobalFallback => "global_fallback",
            Self::NoData => "none",
        }
    }
}

impl fmt::Display for MatchQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeerGroupSelection {
    pub match_quality: MatchQuality,
    pub peer_group_description: String,
    pub sample_size: u32,
    pub benchmark_period: Option<String>,
    pub confidence_tier: Option<ConfidenceTier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub benchmark: Option<BenchmarkQuantiles>,
}

impl PeerGroupSelection {
    fn from_record(record: &BenchmarkQuantiles, quality: MatchQuality, description: String) -> Self {
        Self {
            match_quality: quality,
            peer_group_description: description,
            sample_size: record.sample_size,
            benchmark_period: record.benchmark_period.clone(),
            confidence_tier: Some(record.confidence()),
            benchmark: Some(record.clone()),
        }
    }

    fn no_data() -> Self {
        Self {
            match_quality: MatchQuality::NoData,
            peer_group_description: "No benchmark data available".to_string(),
            sample_size: 0,
            benchmark_period: None,
            confidence_tier: None,
            benchmark: None,
        }
    }
}

/// First record with the largest sample; earlier records win ties.
fn largest_sample<'a>(
    records: impl Iterator<Item = &'a BenchmarkQuantiles>,
) -> Option<&'a BenchmarkQuantiles> {
    records.reduce(|best, candidate| {
        if candidate.sample_size > best.sample_size {
            candidate
        } else {
            best
        }
    })
}

impl PeerComparator {
    /// Three-tier fallback: exact industry x size (sample at least
    /// `peer-group-min-size`), then industry only, then every segment.
    #[instrument(skip(self, available), fields(candidates = available.len()))]
    pub fn select_peer_group(
        &self,
        industry: &str,
        organization_size: &str,
        available: &[BenchmarkQuantiles],
    ) -> PeerGroupSelection {
        let exact = largest_sample(available.iter().filter(|b| {
            b.industry == industry && b.organization_size == organization_size
        }))
        .filter(|b| b.sample_size >= self.config.peer_group_min_size);

        let selection = if let Some(record) = exact {
            PeerGroupSelection::from_record(
                record,
                MatchQuality::Exact,
                format!("{} / {}", industry, organization_size),
            )
        } else if let Some(record) = largest_sample(available.iter().filter(|b| b.industry == industry)) {
            PeerGroupSelection::from_record(
                record,
                MatchQuality::IndustryOnly,
                format!("{} (all sizes)", industry),
            )
        } else if let Some(record) = largest_sample(available.iter()) {
            PeerGroupSelection::from_record(
                record,
                MatchQuality::GlobalFallback,
                "All industries".to_string(),
            )
        } else {
            warn!(industry, organization_size, "No benchmark data available");
            PeerGroupSelection::no_data()
        };

        info!(
            match_quality = %selection.match_quality,
            sample_size = selection.sample_size,
            "Peer group selected"
        );
        selection
    }
}
