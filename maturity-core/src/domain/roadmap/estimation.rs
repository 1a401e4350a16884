// maturity-core/src/domain/roadmap/estimation.rs

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::numeric::round_to;
use crate::domain::roadmap::mapping::RoadmapAction;
use crate::domain::roadmap::planner::RoadmapPlanner;
use crate::domain::roadmap::sequencing::{SequencedActions, SequencingReport};

/// Weeks of effort a single action is expected to absorb at full load.
const CAPACITY_WEEKS_PER_ACTION: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    /// Short, high-impact actions are the most predictable.
    pub fn assess(effort_weeks: f64, impact_score: f64) -> Self {
        if effort_weeks <= 6.0 && impact_score >= 7.0 {
            Self::High
        } else if effort_weeks <= 14.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedAction {
    #[serde(flatten)]
    pub action: RoadmapAction,
    pub estimated_hours: f64,
    pub estimated_cost_usd: f64,
    pub roi_index: f64,
    pub confidence_level: ConfidenceLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimationTotals {
    pub total_effort_weeks: f64,
    pub total_cost_usd: f64,
    pub total_weighted_impact: f64,
    pub capacity_utilization_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatedActions {
    pub actions: Vec<EstimatedAction>,
    pub totals: EstimationTotals,
    pub sequencing: SequencingReport,
    pub horizon_months: u32,
}

impl RoadmapPlanner {
    /// Hours = effort x weekly capacity x utilisation, cost = hours x rate,
    /// ROI index = impact per thousand dollars (0 when the cost is 0).
    #[instrument(skip_all, fields(actions = sequenced.actions.len()))]
    pub fn estimate_effort_and_impact(&self, sequenced: SequencedActions) -> EstimatedActions {
        let SequencedActions {
            actions,
            report,
            horizon_months,
        } = sequenced;
        let action_count = actions.len();

        let mut total_effort = 0.0;
        let mut total_cost = 0.0;
        let mut total_weighted_impact = 0.0;

        let actions: Vec<EstimatedAction> = actions
            .into_iter()
            .map(|action| {
                let hours = action.effort_weeks
                    * self.config.weekly_capacity_hours
                    * self.config.utilization_factor;
                let cost = hours * self.config.hourly_rate_usd;
                let roi = if cost > 0.0 {
                    action.impact_score / (cost / 1000.0)
                } else {
                    0.0
                };

                total_effort += action.effort_weeks;
                total_cost += cost;
                total_weighted_impact += action.impact_score * (10.0 - action.effort_weeks / 4.0);

                EstimatedAction {
                    confidence_level: ConfidenceLevel::assess(action.effort_weeks, action.impact_score),
                    estimated_hours: round_to(hours, 1),
                    estimated_cost_usd: round_to(cost, 2),
                    roi_index: round_to(roi, 4),
                    action,
                }
            })
            .collect();

        let utilization = if action_count > 0 {
            (total_effort / (action_count as f64 * CAPACITY_WEEKS_PER_ACTION) * 100.0).min(100.0)
        } else {
            0.0
        };

        let totals = EstimationTotals {
            total_effort_weeks: round_to(total_effort, 1),
            total_cost_usd: round_to(total_cost, 2),
            total_weighted_impact: round_to(total_weighted_impact, 2),
            capacity_utilization_percent: round_to(utilization, 1),
        };

        info!(
            actions = actions.len(),
            total_effort_weeks = totals.total_effort_weeks,
            total_cost_usd = totals.total_cost_usd,
            "Effort and impact estimated"
        );

        EstimatedActions {
            actions,
            totals,
            sequencing: report,
            horizon_months,
        }
    }
}
