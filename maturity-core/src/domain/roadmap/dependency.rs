// maturity-core/src/domain/roadmap/dependency.rs

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use tracing::{info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::graph::GraphSolver;
use crate::domain::roadmap::action::Phase;
use crate::domain::roadmap::estimation::EstimatedActions;
use crate::domain::roadmap::mapping::RoadmapAction;
use crate::domain::roadmap::milestones::MilestonedRoadmap;
use crate::domain::roadmap::planner::{PlannedRoadmap, RoadmapPlanner};
use crate::domain::roadmap::timeline::{ScheduledRoadmap, Timeline, TimelineEntry};

/// Cross-dimension links per prerequisite dimension.
const MAX_CROSS_LINKS: usize = 2;

/// Slack when comparing summed fractional weeks.
const WEEK_TOLERANCE: f64 = 1e-9;

/// Dimension -> dimensions whose work must come first. Must be acyclic;
/// deserialization does not check that, `check()` does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyTable {
    prerequisites: BTreeMap<String, Vec<String>>,
}

impl Default for DependencyTable {
    fn default() -> Self {
        let prerequisites = [
            ("data", vec![]),
            ("people", vec![]),
            ("process", vec!["data"]),
            ("technology", vec!["data"]),
            ("governance", vec!["process"]),
        ]
        .into_iter()
        .map(|(d, prereqs)| {
            (
                d.to_string(),
                prereqs.into_iter().map(str::to_string).collect(),
            )
        })
        .collect();
        Self { prerequisites }
    }
}

impl DependencyTable {
    pub fn new(prerequisites: BTreeMap<String, Vec<String>>) -> Result<Self, DomainError> {
        let table = Self { prerequisites };
        table.check()?;
        Ok(table)
    }

    pub fn prerequisites_of(&self, dimension: &str) -> &[String] {
        self.prerequisites
            .get(dimension)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.prerequisites
            .iter()
            .map(|(d, p)| (d.as_str(), p.as_slice()))
    }

    /// Dimensions grouped so that each layer only depends on earlier ones.
    pub fn layers(&self) -> Result<Vec<Vec<String>>, DomainError> {
        GraphSolver::layers(&self.prerequisites)
    }

    pub fn check(&self) -> Result<(), DomainError> {
        self.layers().map(|_| ())
    }

    /// One warning per (dimension, prerequisite) pair whose first action
    /// appears in `sequence` before the prerequisite's first action.
    pub fn detect_order_violations<'a>(
        &self,
        sequence: impl IntoIterator<Item = &'a str>,
    ) -> Vec<DependencyWarning> {
        let mut first_index: BTreeMap<&str, usize> = BTreeMap::new();
        for (idx, dimension) in sequence.into_iter().enumerate() {
            first_index.entry(dimension).or_insert(idx);
        }

        let mut warnings = Vec::new();
        for (dimension, prereqs) in self.iter() {
            let Some(&dim_first) = first_index.get(dimension) else {
                continue;
            };
            for prereq in prereqs {
                if let Some(&prereq_first) = first_index.get(prereq.as_str()) {
                    if dim_first < prereq_first {
                        warnings.push(DependencyWarning::new(dimension, prereq));
                    }
                }
            }
        }
        warnings
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyWarning {
    pub dimension: String,
    pub prerequisite_dimension: String,
    pub message: String,
    /// Set when the warning is about one scheduled edge rather than
    /// dimension order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_action_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_action_id: Option<String>,
}

impl DependencyWarning {
    fn new(dimension: &str, prerequisite: &str) -> Self {
        Self {
            dimension: dimension.to_string(),
            prerequisite_dimension: prerequisite.to_string(),
            message: format!(
                "'{}' actions start before '{}' foundation is in place; reorder or run '{}' work in a parallel stream first",
                dimension, prerequisite, prerequisite
            ),
            from_action_id: None,
            to_action_id: None,
        }
    }

    fn for_edge(prerequisite: &TimelineEntry, dependent: &TimelineEntry) -> Self {
        Self {
            dimension: dependent.dimension.clone(),
            prerequisite_dimension: prerequisite.dimension.clone(),
            message: format!(
                "{} ({}) starts at week {:.1} but its prerequisite {} ({}) only ends at week {:.1}",
                dependent.action_id,
                dependent.dimension,
                dependent.start_week,
                prerequisite.action_id,
                prerequisite.dimension,
                prerequisite.end_week
            ),
            from_action_id: Some(prerequisite.action_id.clone()),
            to_action_id: Some(dependent.action_id.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    PhaseSequence,
    CrossDimension,
}

impl DependencyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PhaseSequence => "phase_sequence",
            Self::CrossDimension => "cross_dimension",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from_action_id: String,
    pub to_action_id: String,
    #[serde(rename = "dependency_type")]
    pub kind: DependencyKind,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DependencyAnalysis {
    #[serde(rename = "dependencies")]
    pub edges: Vec<DependencyEdge>,
    /// Action id -> ids of the actions it waits for.
    pub predecessors: BTreeMap<String, Vec<String>>,
    /// Actions nothing points to, in sequence order.
    pub orphaned_actions: Vec<String>,
    /// Cross-dimension edges the timeline does not honour.
    #[serde(default)]
    pub schedule_warnings: Vec<DependencyWarning>,
}

impl DependencyAnalysis {
    pub fn edges_of_kind(&self, kind: DependencyKind) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.iter().filter(move |e| e.kind == kind)
    }

    /// One warning per cross-dimension edge whose source ends after its
    /// target starts. Edges touching unscheduled actions are skipped.
    pub fn schedule_violations(&self, timeline: &Timeline) -> Vec<DependencyWarning> {
        self.edges_of_kind(DependencyKind::CrossDimension)
            .filter_map(|edge| {
                let from = timeline.entry(&edge.from_action_id)?;
                let to = timeline.entry(&edge.to_action_id)?;
                (from.end_week > to.start_week + WEEK_TOLERANCE)
                    .then(|| DependencyWarning::for_edge(from, to))
            })
            .collect()
    }

    /// Edges between consecutive phases inside a dimension, then edges from
    /// the early work of each prerequisite dimension to the earliest-phase
    /// action of the dependent dimension.
    pub fn build(actions: &[&RoadmapAction], table: &DependencyTable) -> Self {
        let mut by_dimension: BTreeMap<&str, Vec<&RoadmapAction>> = BTreeMap::new();
        for &action in actions {
            by_dimension
                .entry(action.dimension.as_str())
                .or_default()
                .push(action);
        }

        let mut edges = Vec::new();

        for (dimension, dim_actions) in &by_dimension {
            let mut ordered = dim_actions.clone();
            ordered.sort_by_key(|a| a.phase);
            for pair in ordered.windows(2) {
                let (before, after) = (pair[0], pair[1]);
                if before.phase != after.phase {
                    edges.push(DependencyEdge {
                        from_action_id: before.action_id.clone(),
                        to_action_id: after.action_id.clone(),
                        kind: DependencyKind::PhaseSequence,
                        description: format!(
                            "{} should complete before {} within {}.",
                            before.title, after.title, dimension
                        ),
                    });
                }
            }
        }

        for (dimension, prereqs) in table.iter() {
            let Some(first_dependent) = by_dimension
                .get(dimension)
                .and_then(|dim_actions| dim_actions.iter().min_by_key(|a| a.phase))
            else {
                continue;
            };
            for prereq in prereqs {
                let Some(prereq_actions) = by_dimension.get(prereq.as_str()) else {
                    continue;
                };
                let early: Vec<&RoadmapAction> = prereq_actions
                    .iter()
                    .copied()
                    .filter(|a| matches!(a.phase, Phase::QuickWins | Phase::Foundation))
                    .collect();
                let sources = if early.is_empty() {
                    prereq_actions.iter().copied().take(1).collect()
                } else {
                    early
                };
                for source in sources.into_iter().take(MAX_CROSS_LINKS) {
                    edges.push(DependencyEdge {
                        from_action_id: source.action_id.clone(),
                        to_action_id: first_dependent.action_id.clone(),
                        kind: DependencyKind::CrossDimension,
                        description: format!(
                            "'{}' initiatives build on the '{}' foundation being in place first.",
                            dimension, prereq
                        ),
                    });
                }
            }
        }

        let mut predecessors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for edge in &edges {
            predecessors
                .entry(edge.to_action_id.clone())
                .or_default()
                .push(edge.from_action_id.clone());
        }

        let targets: BTreeSet<&str> = edges.iter().map(|e| e.to_action_id.as_str()).collect();
        let orphaned_actions = actions
            .iter()
            .filter(|a| !targets.contains(a.action_id.as_str()))
            .map(|a| a.action_id.clone())
            .collect();

        Self {
            edges,
            predecessors,
            orphaned_actions,
            schedule_warnings: Vec::new(),
        }
    }
}

impl RoadmapPlanner {
    /// Final stage: attaches the dependency analysis to the milestoned plan.
    #[instrument(skip_all)]
    pub fn identify_dependencies(&self, milestoned: MilestonedRoadmap) -> PlannedRoadmap {
        let MilestonedRoadmap {
            scheduled:
                ScheduledRoadmap {
                    estimated:
                        EstimatedActions {
                            actions,
                            totals,
                            sequencing,
                            horizon_months,
                        },
                    timeline,
                },
            milestones,
            phase_completions,
        } = milestoned;

        let refs: Vec<&RoadmapAction> = actions.iter().map(|a| &a.action).collect();
        let mut dependencies = DependencyAnalysis::build(&refs, &self.dependencies);
        dependencies.schedule_warnings = dependencies.schedule_violations(&timeline);
        for w in &dependencies.schedule_warnings {
            warn!(
                from = ?w.from_action_id,
                to = ?w.to_action_id,
                "Cross-dimension edge broken by the schedule"
            );
        }

        info!(
            total = dependencies.edges.len(),
            cross_dimension = dependencies
                .edges_of_kind(DependencyKind::CrossDimension)
                .count(),
            orphaned = dependencies.orphaned_actions.len(),
            violated = dependencies.schedule_warnings.len(),
            "Dependencies identified"
        );

        PlannedRoadmap {
            horizon_months,
            actions,
            totals,
            sequencing,
            timeline,
            milestones,
            phase_completions,
            dependencies,
        }
    }
}
