// maturity-core/src/domain/roadmap/export.rs
//
// Serialisable views of a planned roadmap: a full document, a Gantt
// task/link/milestone triple and Mermaid gantt text.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{info, instrument};

use crate::domain::numeric::round_to;
use crate::domain::roadmap::action::Phase;
use crate::domain::roadmap::dependency::{DependencyEdge, DependencyKind, DependencyWarning};
use crate::domain::roadmap::estimation::{EstimatedAction, EstimationTotals};
use crate::domain::roadmap::milestones::{Milestone, PhaseCompletion};
use crate::domain::roadmap::planner::{PlannedRoadmap, RoadmapPlanner};
use crate::domain::roadmap::timeline::{TimelineEntry, date_at_week};

pub const SCHEMA_VERSION: &str = "1.0";

// ── Roadmap document ─────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionSummary {
    pub action_count: usize,
    pub total_effort_weeks: f64,
    pub avg_impact_score: f64,
    pub phases: Vec<Phase>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapSummary {
    pub total_actions: usize,
    pub total_duration_weeks: f64,
    pub start_date: NaiveDate,
    pub projected_end_date: NaiveDate,
    pub milestone_count: usize,
    pub dependency_count: usize,
    pub dimension_summary: BTreeMap<String, DimensionSummary>,
    pub estimation: EstimationTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadmapDocument {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    pub metadata: BTreeMap<String, serde_json::Value>,
    pub summary: RoadmapSummary,
    pub actions: Vec<EstimatedAction>,
    pub timeline: Vec<TimelineEntry>,
    pub milestones: Vec<Milestone>,
    pub phase_completions: Vec<PhaseCompletion>,
    pub dependencies: Vec<DependencyEdge>,
    pub dependency_warnings: Vec<DependencyWarning>,
}

impl RoadmapDocument {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn dimension_summary(actions: &[EstimatedAction]) -> BTreeMap<String, DimensionSummary> {
    // (count, effort, impact sum, phases)
    let mut acc: BTreeMap<&str, (usize, f64, f64, BTreeSet<Phase>)> = BTreeMap::new();
    for a in actions.iter().map(|e| &e.action) {
        let entry = acc.entry(a.dimension.as_str()).or_default();
        entry.0 += 1;
        entry.1 += a.effort_weeks;
        entry.2 += a.impact_score;
        entry.3.insert(a.phase);
    }
    acc.into_iter()
        .map(|(dimension, (count, effort, impact, phases))| {
            (
                dimension.to_string(),
                DimensionSummary {
                    action_count: count,
                    total_effort_weeks: round_to(effort, 1),
                    avg_impact_score: round_to(impact / count as f64, 2),
                    phases: phases.into_iter().collect(),
                },
            )
        })
        .collect()
}

// ── Gantt export ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttTask {
    pub id: usize,
    pub action_id: String,
    pub text: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub duration_weeks: f64,
    pub progress: f64,
    pub parent: usize,
    pub phase: Phase,
    pub dimension: String,
    pub color: String,
    pub dimension_color: String,
    pub stream: usize,
    pub open: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttLink {
    pub id: usize,
    pub source: usize,
    pub target: usize,
    pub dependency_type: DependencyKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttMilestone {
    pub id: usize,
    pub text: String,
    pub milestone_id: String,
    pub week: u32,
    pub date: NaiveDate,
    pub actions_completed_count: usize,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttColumn {
    pub name: String,
    pub label: String,
    pub width: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub start_date: NaiveDate,
    pub scale_unit: String,
    pub date_format: String,
    pub columns: Vec<GanttColumn>,
    pub phase_colors: BTreeMap<Phase, String>,
    pub dimension_colors: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GanttExport {
    pub tasks: Vec<GanttTask>,
    pub links: Vec<GanttLink>,
    pub milestones_gantt: Vec<GanttMilestone>,
    pub chart_config: ChartConfig,
}

impl GanttExport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

fn column(name: &str, label: &str, width: u32) -> GanttColumn {
    GanttColumn {
        name: name.to_string(),
        label: label.to_string(),
        width,
    }
}

// ── Exporters ────────────────────────────────────────────────────────

impl RoadmapPlanner {
    /// `exported_at` is supplied by the caller so the export stays a pure
    /// function of the plan.
    #[instrument(skip_all, fields(actions = planned.actions.len()))]
    pub fn export_roadmap_document(
        &self,
        planned: &PlannedRoadmap,
        metadata: BTreeMap<String, serde_json::Value>,
        exported_at: DateTime<Utc>,
    ) -> RoadmapDocument {
        let summary = RoadmapSummary {
            total_actions: planned.actions.len(),
            total_duration_weeks: planned.timeline.duration_weeks,
            start_date: planned.timeline.start_date,
            projected_end_date: planned.timeline.projected_end_date,
            milestone_count: planned.milestones.len(),
            dependency_count: planned.dependencies.edges.len(),
            dimension_summary: dimension_summary(&planned.actions),
            estimation: planned.totals.clone(),
        };

        info!(total_actions = summary.total_actions, %exported_at, "Roadmap document exported");

        RoadmapDocument {
            schema_version: SCHEMA_VERSION.to_string(),
            exported_at,
            metadata,
            summary,
            actions: planned.actions.clone(),
            timeline: planned.timeline.entries.clone(),
            milestones: planned.milestones.clone(),
            phase_completions: planned.phase_completions.clone(),
            dependencies: planned.dependencies.edges.clone(),
            dependency_warnings: planned.dependency_warnings(),
        }
    }

    /// Tasks are numbered from 1 in timeline order; milestone markers
    /// continue the numbering. Links only join scheduled tasks.
    #[instrument(skip_all, fields(entries = planned.timeline.entries.len()))]
    pub fn export_gantt_data(&self, planned: &PlannedRoadmap) -> GanttExport {
        let palette = &self.palette;
        let timeline = &planned.timeline;

        let tasks: Vec<GanttTask> = timeline
            .entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| GanttTask {
                id: idx + 1,
                action_id: entry.action_id.clone(),
                text: entry.title.clone(),
                start_date: entry.start_date,
                end_date: entry.end_date,
                duration_weeks: entry.effort_weeks,
                progress: 0.0,
                parent: 0,
                phase: entry.phase,
                dimension: entry.dimension.clone(),
                color: palette.phase_color(entry.phase).to_string(),
                dimension_color: palette.dimension_color(&entry.dimension).to_string(),
                stream: entry.stream,
                open: true,
            })
            .collect();

        let task_ids: HashMap<&str, usize> = tasks
            .iter()
            .map(|t| (t.action_id.as_str(), t.id))
            .collect();

        let links: Vec<GanttLink> = planned
            .dependencies
            .edges
            .iter()
            .filter_map(|edge| {
                let source = *task_ids.get(edge.from_action_id.as_str())?;
                let target = *task_ids.get(edge.to_action_id.as_str())?;
                Some((source, target, edge.kind))
            })
            .enumerate()
            .map(|(idx, (source, target, kind))| GanttLink {
                id: idx + 1,
                source,
                target,
                dependency_type: kind,
            })
            .collect();

        let milestones_gantt: Vec<GanttMilestone> = planned
            .milestones
            .iter()
            .enumerate()
            .map(|(idx, m)| GanttMilestone {
                id: tasks.len() + idx + 1,
                text: m.label.clone(),
                milestone_id: m.milestone_id.clone(),
                week: m.week,
                date: date_at_week(timeline.start_date, m.week as f64),
                actions_completed_count: m.actions_completed_count,
                color: palette.milestone_color.clone(),
            })
            .collect();

        let chart_config = ChartConfig {
            start_date: timeline.start_date,
            scale_unit: "week".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            columns: vec![
                column("text", "Initiative", 200),
                column("dimension", "Dimension", 100),
                column("phase", "Phase", 90),
                column("duration_weeks", "Weeks", 60),
            ],
            phase_colors: palette.phase_colors.clone(),
            dimension_colors: palette.dimension_colors.clone(),
        };

        info!(
            tasks = tasks.len(),
            links = links.len(),
            milestones = milestones_gantt.len(),
            "Gantt data exported"
        );

        GanttExport {
            tasks,
            links,
            milestones_gantt,
            chart_config,
        }
    }
}

// ── Mermaid ──────────────────────────────────────────────────────────

/// Mermaid reserves ':' and '#' in task names.
fn mermaid_text(s: &str) -> String {
    s.replace([':', '#'], " ")
}

impl PlannedRoadmap {
    /// `gantt` diagram with one section per phase and a milestone section.
    pub fn to_mermaid(&self, title: &str) -> String {
        let mut lines = vec![
            "gantt".to_string(),
            format!("    title {}", mermaid_text(title)),
            "    dateFormat YYYY-MM-DD".to_string(),
        ];

        for phase in Phase::ALL {
            let entries: Vec<&TimelineEntry> = self
                .timeline
                .entries
                .iter()
                .filter(|e| e.phase == phase)
                .collect();
            if entries.is_empty() {
                continue;
            }
            lines.push(format!("    section {}", phase.title()));
            for e in entries {
                let days = (e.end_date - e.start_date).num_days();
                lines.push(format!(
                    "    {} :{}, {}, {}d",
                    mermaid_text(&e.title),
                    e.action_id,
                    e.start_date,
                    days
                ));
            }
        }

        if !self.milestones.is_empty() {
            lines.push("    section Milestones".to_string());
            for m in &self.milestones {
                lines.push(format!(
                    "    {} :milestone, {}, {}, 0d",
                    m.label,
                    m.milestone_id,
                    date_at_week(self.timeline.start_date, m.week as f64)
                ));
            }
        }

        lines.join("\n")
    }
}
