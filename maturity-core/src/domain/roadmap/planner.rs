// maturity-core/src/domain/roadmap/planner.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::benchmark::GapEntry;
use crate::domain::error::DomainError;
use crate::domain::roadmap::config::{GanttPalette, PlannerConfig};
use crate::domain::roadmap::dependency::{DependencyAnalysis, DependencyTable, DependencyWarning};
use crate::domain::roadmap::estimation::{EstimatedAction, EstimationTotals};
use crate::domain::roadmap::library::ActionLibrary;
use crate::domain::roadmap::milestones::{Milestone, PhaseCompletion};
use crate::domain::roadmap::sequencing::SequencingReport;
use crate::domain::roadmap::timeline::Timeline;

/// Turns a gap analysis into a scheduled roadmap. The stage methods live
/// next to their output types; `plan` runs them in order.
#[derive(Debug, Clone, Default)]
pub struct RoadmapPlanner {
    pub(crate) config: PlannerConfig,
    pub(crate) library: ActionLibrary,
    pub(crate) dependencies: DependencyTable,
    pub(crate) palette: GanttPalette,
}

impl RoadmapPlanner {
    pub fn new(config: PlannerConfig, library: ActionLibrary, dependencies: DependencyTable) -> Self {
        Self {
            config,
            library,
            dependencies,
            palette: GanttPalette::default(),
        }
    }

    pub fn with_palette(mut self, palette: GanttPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    pub fn library(&self) -> &ActionLibrary {
        &self.library
    }

    pub fn dependency_table(&self) -> &DependencyTable {
        &self.dependencies
    }

    pub fn palette(&self) -> &GanttPalette {
        &self.palette
    }

    /// mapping -> sequencing -> estimation -> timeline -> milestones -> dependencies
    #[instrument(skip_all, fields(gaps = gaps.len(), %start_date))]
    pub fn plan(&self, gaps: &[GapEntry], start_date: NaiveDate) -> Result<PlannedRoadmap, DomainError> {
        self.config.check()?;
        let mapping = self.map_gaps_to_actions(gaps)?;
        let sequenced = self.sequence_by_priority(mapping);
        let estimated = self.estimate_effort_and_impact(sequenced);
        let scheduled = self.generate_timeline(estimated, start_date);
        let milestoned = self.define_milestones(scheduled);
        let planned = self.identify_dependencies(milestoned);

        info!(
            actions = planned.actions.len(),
            duration_weeks = planned.timeline.duration_weeks,
            milestones = planned.milestones.len(),
            "Roadmap planned"
        );
        Ok(planned)
    }
}

/// Output of the last planning stage; input of every exporter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedRoadmap {
    pub horizon_months: u32,
    pub actions: Vec<EstimatedAction>,
    pub totals: EstimationTotals,
    pub sequencing: SequencingReport,
    pub timeline: Timeline,
    pub milestones: Vec<Milestone>,
    pub phase_completions: Vec<PhaseCompletion>,
    pub dependencies: DependencyAnalysis,
}

impl PlannedRoadmap {
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Dimension-order warnings from sequencing, then cross-dimension edges
    /// the timeline breaks.
    pub fn dependency_warnings(&self) -> Vec<DependencyWarning> {
        self.sequencing
            .dependency_warnings
            .iter()
            .chain(&self.dependencies.schedule_warnings)
            .cloned()
            .collect()
    }
}
