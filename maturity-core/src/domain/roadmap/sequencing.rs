// maturity-core/src/domain/roadmap/sequencing.rs

use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

use crate::domain::roadmap::action::Phase;
use crate::domain::roadmap::dependency::DependencyWarning;
use crate::domain::roadmap::mapping::{ActionMapping, RoadmapAction};
use crate::domain::roadmap::planner::RoadmapPlanner;

/// Side information produced while ordering the actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SequencingReport {
    pub quick_wins: Vec<String>,
    pub strategic_initiatives: Vec<String>,
    pub dependency_warnings: Vec<DependencyWarning>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequencedActions {
    pub actions: Vec<RoadmapAction>,
    pub report: SequencingReport,
    pub horizon_months: u32,
}

impl RoadmapPlanner {
    fn is_quick_win(&self, action: &RoadmapAction) -> bool {
        (action.effort_weeks <= self.config.quick_win_effort_weeks
            && action.impact_score >= self.config.quick_win_impact)
            || action.phase == Phase::QuickWins
    }

    /// Orders by phase, then impact descending, then effort ascending. The
    /// sort is stable so equal keys keep mapping order.
    #[instrument(skip_all, fields(actions = mapping.actions.len()))]
    pub fn sequence_by_priority(&self, mapping: ActionMapping) -> SequencedActions {
        let ActionMapping {
            mut actions,
            horizon_months,
            ..
        } = mapping;

        actions.sort_by(|a, b| {
            a.phase
                .cmp(&b.phase)
                .then_with(|| b.impact_score.total_cmp(&a.impact_score))
                .then_with(|| a.effort_weeks.total_cmp(&b.effort_weeks))
        });

        let quick_wins: Vec<String> = actions
            .iter()
            .filter(|a| self.is_quick_win(a))
            .map(|a| a.action_id.clone())
            .collect();

        let strategic_initiatives: Vec<String> = actions
            .iter()
            .filter(|a| a.phase.is_strategic() && !self.is_quick_win(a))
            .map(|a| a.action_id.clone())
            .collect();

        let dependency_warnings = self
            .dependencies
            .detect_order_violations(actions.iter().map(|a| a.dimension.as_str()));
        for w in &dependency_warnings {
            warn!(
                dimension = %w.dimension,
                prerequisite = %w.prerequisite_dimension,
                "Dependent dimension sequenced before its prerequisite"
            );
        }

        info!(
            total = actions.len(),
            quick_wins = quick_wins.len(),
            strategic = strategic_initiatives.len(),
            warnings = dependency_warnings.len(),
            "Actions sequenced"
        );

        SequencedActions {
            actions,
            report: SequencingReport {
                quick_wins,
                strategic_initiatives,
                dependency_warnings,
            },
            horizon_months,
        }
    }
}
