// maturity-core/src/domain/benchmark/comparator.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::benchmark::gap::{BestInClassPercentile, SeverityThresholds};
use crate::domain::benchmark::priority::DifficultyTable;
use crate::domain::scoring::MaturityThresholds;

/// Policy knobs of the peer comparator. Every field defaults to the
/// built-in tables so an empty `comparator:` section is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "kebab-case")]
pub struct ComparatorConfig {
    pub best_in_class: BestInClassPercentile,

    /// Minimum sample size for an exact industry x size match to be used.
    #[validate(range(min = 1))]
    pub peer_group_min_size: u32,

    #[validate(nested)]
    pub severity: SeverityThresholds,

    pub difficulty: DifficultyTable,
}

impl Default for ComparatorConfig {
    fn default() -> Self {
        Self {
            best_in_class: BestInClassPercentile::default(),
            peer_group_min_size: 10,
            severity: SeverityThresholds::default(),
            difficulty: DifficultyTable::default(),
        }
    }
}

/// Ranks dimension scores against a peer distribution. The four operations
/// (`select_peer_group`, `compute_percentile_rankings`,
/// `analyze_gap_vs_best_in_class`, `score_improvement_priorities`) live in
/// the sibling modules and are meant to be called in that order.
#[derive(Debug, Clone, Default)]
pub struct PeerComparator {
    pub(crate) config: ComparatorConfig,
    pub(crate) thresholds: MaturityThresholds,
}

impl PeerComparator {
    pub fn new(config: ComparatorConfig, thresholds: MaturityThresholds) -> Self {
        Self { config, thresholds }
    }

    pub fn config(&self) -> &ComparatorConfig {
        &self.config
    }
}
