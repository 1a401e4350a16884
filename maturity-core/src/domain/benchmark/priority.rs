// maturity-core/src/domain/benchmark/priority.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, instrument};

use crate::domain::benchmark::comparator::PeerComparator;
use crate::domain::benchmark::gap::{GapEntry, GapSeverity};
use crate::domain::numeric::round_to;

/// Gap (in points) at which impact saturates at 1.0.
const IMPACT_SATURATION_GAP: f64 = 40.0;
const EFFORT_FLOOR: f64 = 0.1;
const QUICK_WIN_MAX_GAP: f64 = 15.0;
const QUICK_WIN_MAX_EFFORT: f64 = 0.40;

/// How structurally hard a dimension is to move, in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct DifficultyTable {
    pub weights: BTreeMap<String, f64>,
    pub default_weight: f64,
}

impl Default for DifficultyTable {
    fn default() -> Self {
        let weights = [
            ("data", 0.6),
            ("process", 0.5),
            ("people", 0.8),
            ("technology", 0.5),
            ("governance", 0.7),
        ]
        .into_iter()
        .map(|(d, w)| (d.to_string(), w))
        .collect();
        Self {
            weights,
            default_weight: 0.6,
        }
    }
}

impl DifficultyTable {
    pub fn weight(&self, dimension: &str) -> f64 {
        self.weights
            .get(dimension)
            .copied()
            .unwrap_or(self.default_weight)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityEntry {
    pub rank: usize,
    pub dimension: String,
    pub current_score: f64,
    pub gap_size: f64,
    pub severity: GapSeverity,
    pub impact_score: f64,
    pub effort_score: f64,
    pub priority_score: f64,
    pub quick_win: bool,
}

impl PeerComparator {
    /// `impact / max(effort, 0.1)` per gap, highest first, ranked from 1.
    /// The current score comes from `scores`, falling back to the gap entry.
    #[instrument(skip_all, fields(gaps = gaps.len()))]
    pub fn score_improvement_priorities(
        &self,
        gaps: &[GapEntry],
        scores: &BTreeMap<String, f64>,
    ) -> Vec<PriorityEntry> {
        let mut entries: Vec<PriorityEntry> = gaps
            .iter()
            .map(|gap| {
                let score = scores
                    .get(&gap.dimension)
                    .copied()
                    .unwrap_or(gap.current_score);
                let impact = (gap.gap_size / IMPACT_SATURATION_GAP).min(1.0);
                let effort = self.config.difficulty.weight(&gap.dimension)
                    * (1.0 - (score / 100.0).min(1.0));
                let priority = impact / effort.max(EFFORT_FLOOR);
                let quick_win = gap.gap_size <= QUICK_WIN_MAX_GAP
                    && effort <= QUICK_WIN_MAX_EFFORT
                    && matches!(gap.severity, GapSeverity::Medium | GapSeverity::Low);

                PriorityEntry {
                    rank: 0,
                    dimension: gap.dimension.clone(),
                    current_score: score,
                    gap_size: gap.gap_size,
                    severity: gap.severity,
                    impact_score: round_to(impact, 4),
                    effort_score: round_to(effort, 4),
                    priority_score: round_to(priority, 4),
                    quick_win,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.priority_score.total_cmp(&a.priority_score));
        for (i, entry) in entries.iter_mut().enumerate() {
            entry.rank = i + 1;
        }

        info!(
            priorities = entries.len(),
            quick_wins = entries.iter().filter(|e| e.quick_win).count(),
            "Improvement priorities scored"
        );
        entries
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::benchmark::gap::SeverityThresholds;
    use crate::domain::scoring::MaturityLevel;

    fn gap(dimension: &str, score: f64, gap_size: f64) -> GapEntry {
        GapEntry {
            dimension: dimension.into(),
            current_score: score,
            best_in_class_score: score + gap_size,
            gap_size,
            gap_percent: 0.0,
            severity: SeverityThresholds::default().classify(gap_size),
            current_maturity_level: MaturityLevel::Defined,
            target_maturity_level: MaturityLevel::Managed,
        }
    }

    #[test]
    fn test_priority_formula() {
        let comparator = PeerComparator::default();
        let gaps = vec![gap("data", 50.0, 30.0)];
        let entries = comparator.score_improvement_priorities(&gaps, &BTreeMap::new());
        let data = &entries[0];
        // impact 30/40, effort 0.6 * 0.5
        assert_eq!(data.impact_score, 0.75);
        assert_eq!(data.effort_score, 0.3);
        assert_eq!(data.priority_score, 2.5);
        assert!(!data.quick_win);
    }

    #[test]
    fn test_effort_floor_and_saturation() {
        let comparator = PeerComparator::default();
        let gaps = vec![gap("technology", 100.0, 60.0)];
        let entries = comparator.score_improvement_priorities(&gaps, &BTreeMap::new());
        assert_eq!(entries[0].impact_score, 1.0);
        assert_eq!(entries[0].effort_score, 0.0);
        assert_eq!(entries[0].priority_score, 10.0);
    }

    #[test]
    fn test_quick_win_rule() {
        let comparator = PeerComparator::default();
        let gaps = vec![
            // effort 0.5 * 0.3 = 0.15, gap 12 (medium)
            gap("process", 70.0, 12.0),
            // effort 0.8 * 0.6 = 0.48 > 0.40
            gap("people", 40.0, 12.0),
        ];
        let entries = comparator.score_improvement_priorities(&gaps, &BTreeMap::new());
        let process = entries.iter().find(|e| e.dimension == "process").unwrap();
        let people = entries.iter().find(|e| e.dimension == "people").unwrap();
        assert!(process.quick_win);
        assert!(!people.quick_win);
    }

    #[test]
    fn test_ranked_descending_from_one() {
        let comparator = PeerComparator::default();
        let gaps = vec![
            gap("people", 20.0, 35.0),
            gap("technology", 60.0, 20.0),
            gap("governance", 55.0, 5.0),
        ];
        let scores: BTreeMap<String, f64> = [("people".to_string(), 20.0)].into_iter().collect();
        let entries = comparator.score_improvement_priorities(&gaps, &scores);
        let ranks: Vec<usize> = entries.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
        assert!(
            entries
                .windows(2)
                .all(|w| w[0].priority_score >= w[1].priority_score)
        );
        assert_eq!(entries[0].dimension, "technology");
    }
}
