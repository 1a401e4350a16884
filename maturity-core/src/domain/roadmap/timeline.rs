// maturity-core/src/domain/roadmap/timeline.rs

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

use crate::domain::numeric::round_to;
use crate::domain::roadmap::action::Phase;
use crate::domain::roadmap::estimation::EstimatedActions;
use crate::domain::roadmap::planner::RoadmapPlanner;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub action_id: String,
    pub title: String,
    pub dimension: String,
    pub phase: Phase,
    /// 1-based stream number.
    pub stream: usize,
    pub start_week: f64,
    pub end_week: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub effort_weeks: f64,
    pub estimated_cost_usd: f64,
    pub roi_index: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    pub entries: Vec<TimelineEntry>,
    pub start_date: NaiveDate,
    pub projected_end_date: NaiveDate,
    pub duration_weeks: f64,
    pub parallel_streams: usize,
}

impl Timeline {
    pub fn entry(&self, action_id: &str) -> Option<&TimelineEntry> {
        self.entries.iter().find(|e| e.action_id == action_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledRoadmap {
    pub estimated: EstimatedActions,
    pub timeline: Timeline,
}

/// Calendar date of a fractional week offset, whole days rounded down.
pub fn date_at_week(start: NaiveDate, week: f64) -> NaiveDate {
    let days = (week.max(0.0) * 7.0).floor() as u64;
    start.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

impl RoadmapPlanner {
    /// Greedy list scheduling over `parallel-streams` lanes.
    ///
    /// Actions are taken in sequence order. Each one may not start before
    /// every prerequisite dimension scheduled so far has finished, and goes
    /// to the lane where it can start earliest (lowest lane on ties). This
    /// is a deterministic approximation, not an optimal resource-constrained
    /// schedule: an early long action can delay a later short one that would
    /// have fit elsewhere.
    ///
    /// Zero lanes yield an empty timeline.
    #[instrument(skip_all, fields(actions = estimated.actions.len(), streams = self.config.parallel_streams))]
    pub fn generate_timeline(&self, estimated: EstimatedActions, start_date: NaiveDate) -> ScheduledRoadmap {
        let streams = self.config.parallel_streams;
        if streams == 0 && !estimated.actions.is_empty() {
            warn!("No parallel streams configured; timeline left empty");
        }

        let mut cursors: Vec<f64> = vec![0.0; streams];
        let mut dimension_completion: BTreeMap<String, f64> = BTreeMap::new();
        let mut entries = Vec::with_capacity(if streams == 0 { 0 } else { estimated.actions.len() });

        if streams > 0 {
            for estimated_action in &estimated.actions {
                let action = &estimated_action.action;

                let earliest = self
                    .dependencies
                    .prerequisites_of(&action.dimension)
                    .iter()
                    .filter_map(|p| dimension_completion.get(p).copied())
                    .fold(0.0, f64::max);

                let mut lane = 0;
                let mut start = f64::INFINITY;
                for (idx, &cursor) in cursors.iter().enumerate() {
                    let candidate = cursor.max(earliest);
                    if candidate < start {
                        start = candidate;
                        lane = idx;
                    }
                }
                let end = start + action.effort_weeks;
                cursors[lane] = end;

                let completion = dimension_completion
                    .entry(action.dimension.clone())
                    .or_insert(0.0);
                *completion = completion.max(end);

                debug!(action = %action.action_id, stream = lane + 1, start, end, "Action scheduled");

                entries.push(TimelineEntry {
                    action_id: action.action_id.clone(),
                    title: action.title.clone(),
                    dimension: action.dimension.clone(),
                    phase: action.phase,
                    stream: lane + 1,
                    start_week: start,
                    end_week: end,
                    start_date: date_at_week(start_date, start),
                    end_date: date_at_week(start_date, end),
                    effort_weeks: action.effort_weeks,
                    estimated_cost_usd: estimated_action.estimated_cost_usd,
                    roi_index: estimated_action.roi_index,
                });
            }
        }

        let duration = cursors.iter().copied().fold(0.0, f64::max);
        let timeline = Timeline {
            entries,
            start_date,
            projected_end_date: date_at_week(start_date, duration),
            duration_weeks: round_to(duration, 1),
            parallel_streams: streams,
        };

        info!(
            scheduled = timeline.entries.len(),
            duration_weeks = timeline.duration_weeks,
            projected_end = %timeline.projected_end_date,
            "Timeline generated"
        );

        ScheduledRoadmap { estimated, timeline }
    }
}
