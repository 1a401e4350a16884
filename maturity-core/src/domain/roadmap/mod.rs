// maturity-core/src/domain/roadmap/mod.rs
//
// Gap-to-roadmap pipeline. Each stage consumes the previous stage's output
// by value:
//
//   ActionMapping -> SequencedActions -> EstimatedActions
//     -> ScheduledRoadmap -> MilestonedRoadmap -> PlannedRoadmap
//
// and `PlannedRoadmap` is exported as a `RoadmapDocument`, a `GanttExport`
// or Mermaid text.

pub mod action;
pub mod config;
pub mod dependency;
pub mod estimation;
pub mod export;
pub mod library;
pub mod mapping;
pub mod milestones;
pub mod planner;
pub mod sequencing;
pub mod timeline;

pub use action::{ActionTemplate, EffortLabel, ImpactLabel, Phase};
pub use config::{GanttPalette, PlannerConfig, WEEKS_PER_MONTH};
pub use dependency::{
    DependencyAnalysis, DependencyEdge, DependencyKind, DependencyTable, DependencyWarning,
};
pub use estimation::{ConfidenceLevel, EstimatedAction, EstimatedActions, EstimationTotals};
pub use export::{DimensionSummary, GanttExport, RoadmapDocument, RoadmapSummary};
pub use library::ActionLibrary;
pub use mapping::{ActionMapping, RoadmapAction};
pub use milestones::{Milestone, MilestonedRoadmap, PhaseCompletion};
pub use planner::{PlannedRoadmap, RoadmapPlanner};
pub use sequencing::{SequencedActions, SequencingReport};
pub use timeline::{ScheduledRoadmap, Timeline, TimelineEntry};
