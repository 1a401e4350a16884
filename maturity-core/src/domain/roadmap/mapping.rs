// maturity-core/src/domain/roadmap/mapping.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument};

use crate::domain::benchmark::GapEntry;
use crate::domain::error::DomainError;
use crate::domain::numeric::round_to;
use crate::domain::roadmap::action::{EffortLabel, ImpactLabel, Phase};
use crate::domain::roadmap::planner::RoadmapPlanner;

/// A template may take up to this share of the horizon beyond its effort.
const HORIZON_SLACK: f64 = 1.2;

/// A library template selected for one dimension's gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapAction {
    #[serde(rename = "id")]
    pub action_id: String,
    pub dimension: String,
    pub title: String,
    pub description: String,
    pub effort_weeks: f64,
    pub effort_label: EffortLabel,
    pub impact_score: f64,
    pub impact_label: ImpactLabel,
    pub phase: Phase,
    pub gap_addressed_points: f64,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionMapping {
    pub actions: Vec<RoadmapAction>,
    pub dimensions_addressed: Vec<String>,
    pub horizon_months: u32,
}

fn action_id(dimension: &str, number: usize) -> String {
    let prefix: String = dimension.chars().take(3).collect();
    format!("act-{}-{:03}", prefix, number)
}

impl RoadmapPlanner {
    /// Selects library templates for every dimension with a positive gap,
    /// largest gap first, until `initiative-cap` actions are chosen.
    /// Templates that cannot finish inside the horizon are skipped unless
    /// they belong to the quick-wins phase.
    #[instrument(skip_all, fields(gaps = gaps.len()))]
    pub fn map_gaps_to_actions(&self, gaps: &[GapEntry]) -> Result<ActionMapping, DomainError> {
        let horizon_weeks = self.config.horizon_weeks();
        let cap = self.config.initiative_cap;

        let mut open_gaps: Vec<&GapEntry> = gaps.iter().filter(|g| g.gap_size > 0.0).collect();
        open_gaps.sort_by(|a, b| b.gap_size.total_cmp(&a.gap_size));

        let mut actions: Vec<RoadmapAction> = Vec::new();

        'dimensions: for gap in open_gaps {
            if actions.len() >= cap {
                break;
            }
            let templates = self.library.templates_for(&gap.dimension)?;
            for template in templates {
                if actions.len() >= cap {
                    break 'dimensions;
                }
                if template.effort_weeks * HORIZON_SLACK > horizon_weeks
                    && template.phase != Phase::QuickWins
                {
                    debug!(title = %template.title, "Template exceeds planning horizon");
                    continue;
                }

                let tags = template
                    .tags
                    .clone()
                    .unwrap_or_else(|| vec![gap.dimension.clone()]);

                actions.push(RoadmapAction {
                    action_id: action_id(&gap.dimension, actions.len() + 1),
                    dimension: gap.dimension.clone(),
                    title: template.title.clone(),
                    description: template.description.clone(),
                    effort_weeks: template.effort_weeks,
                    effort_label: EffortLabel::from_weeks(template.effort_weeks),
                    impact_score: template.impact_score,
                    impact_label: ImpactLabel::from_score(template.impact_score),
                    phase: template.phase,
                    gap_addressed_points: round_to(gap.gap_size, 2),
                    tags,
                });
            }
        }

        let dimensions_addressed: Vec<String> = actions
            .iter()
            .map(|a| a.dimension.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        info!(
            total_actions = actions.len(),
            dimensions = dimensions_addressed.len(),
            horizon_months = self.config.horizon_months,
            "Gaps mapped to actions"
        );

        Ok(ActionMapping {
            actions,
            dimensions_addressed,
            horizon_months: self.config.horizon_months,
        })
    }
}
