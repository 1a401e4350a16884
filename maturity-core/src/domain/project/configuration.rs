// maturity-core/src/domain/project/configuration.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::domain::benchmark::{BenchmarkQuantiles, ComparatorConfig};
use crate::domain::error::DomainError;
use crate::domain::roadmap::{ActionLibrary, DependencyTable, GanttPalette, PlannerConfig};
use crate::domain::scoring::{DimensionWeightSet, MaturityThresholds};

/// Segment used to pick the peer group.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Validate)]
pub struct OrganizationProfile {
    #[validate(length(min = 1))]
    pub industry: String,
    #[validate(length(min = 1))]
    pub size: String,
}

impl Default for OrganizationProfile {
    fn default() -> Self {
        Self {
            industry: "general".to_string(),
            size: "mid_market".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Validate)]
pub struct ProjectConfig {
    #[validate(length(min = 1))]
    pub name: String,
    pub version: String,

    #[serde(default)]
    #[validate(nested)]
    pub organization: OrganizationProfile,

    /// Dimension -> weight. Empty means the built-in five-dimension set.
    #[serde(default)]
    pub weights: BTreeMap<String, f64>,

    #[serde(rename = "rebalance-weights", default)]
    pub rebalance_weights: bool,

    #[serde(rename = "config-paths", default)]
    pub config_paths: Vec<String>,

    #[serde(rename = "responses-path", default = "default_responses_path")]
    pub responses_path: String,

    #[serde(rename = "target-path", default = "default_target_path")]
    pub target_path: String,

    #[serde(rename = "clean-targets", default = "default_clean_targets")]
    pub clean_targets: Vec<String>,

    #[serde(default)]
    #[validate(nested)]
    pub scoring: MaturityThresholds,

    #[serde(default)]
    #[validate(nested)]
    pub comparator: ComparatorConfig,

    #[serde(default)]
    #[validate(nested)]
    pub planner: PlannerConfig,

    #[serde(default)]
    pub gantt: GanttPalette,

    // Hydrated from satellite files, or given inline.
    #[serde(default)]
    pub benchmarks: Vec<BenchmarkQuantiles>,

    #[serde(rename = "action-library", default)]
    pub action_library: Option<ActionLibrary>,

    #[serde(default)]
    pub dependencies: Option<DependencyTable>,
}

fn default_responses_path() -> String {
    "responses.yaml".to_string()
}
fn default_target_path() -> String {
    "target".to_string()
}
fn default_clean_targets() -> Vec<String> {
    vec!["target".to_string()]
}

impl ProjectConfig {
    /// Strict unless `rebalance-weights` opts into proportional normalisation.
    pub fn weight_set(&self) -> Result<DimensionWeightSet, DomainError> {
        if self.weights.is_empty() {
            Ok(DimensionWeightSet::default())
        } else if self.rebalance_weights {
            DimensionWeightSet::rebalanced(self.weights.clone())
        } else {
            DimensionWeightSet::new(self.weights.clone())
        }
    }

    pub fn library(&self) -> ActionLibrary {
        self.action_library.clone().unwrap_or_default()
    }

    pub fn dependency_table(&self) -> DependencyTable {
        self.dependencies.clone().unwrap_or_default()
    }
}
