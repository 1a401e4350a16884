// maturity-core/src/domain/roadmap/milestones.rs

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::domain::numeric::round_to;
use crate::domain::roadmap::action::Phase;
use crate::domain::roadmap::config::WEEKS_PER_MONTH;
use crate::domain::roadmap::planner::RoadmapPlanner;
use crate::domain::roadmap::timeline::{ScheduledRoadmap, TimelineEntry};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedAction {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub milestone_id: String,
    pub week: u32,
    pub label: String,
    pub actions_completed_count: usize,
    pub actions_completed: Vec<CompletedAction>,
    pub cumulative_actions_completed: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseCompletion {
    pub phase: Phase,
    pub completion_week: f64,
    pub action_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MilestonedRoadmap {
    pub scheduled: ScheduledRoadmap,
    pub milestones: Vec<Milestone>,
    pub phase_completions: Vec<PhaseCompletion>,
}

fn phase_completions(entries: &[TimelineEntry]) -> Vec<PhaseCompletion> {
    Phase::ALL
        .into_iter()
        .filter_map(|phase| {
            let in_phase: Vec<&TimelineEntry> = entries.iter().filter(|e| e.phase == phase).collect();
            let completion = in_phase.iter().map(|e| e.end_week).reduce(f64::max)?;
            Some(PhaseCompletion {
                phase,
                completion_week: round_to(completion, 1),
                action_count: in_phase.len(),
            })
        })
        .collect()
}

impl RoadmapPlanner {
    /// Checkpoints every `milestone-cadence-weeks`. Each covers the actions
    /// ending in `[week - cadence, week)`. Checkpoints inside the horizon are
    /// always emitted; one past the horizon only when something completes in
    /// its interval, and never beyond `horizon + cadence`.
    #[instrument(skip_all, fields(entries = scheduled.timeline.entries.len()))]
    pub fn define_milestones(&self, scheduled: ScheduledRoadmap) -> MilestonedRoadmap {
        let cadence = self.config.milestone_cadence_weeks;
        let total_weeks = scheduled.estimated.horizon_months as f64 * WEEKS_PER_MONTH;
        let entries = &scheduled.timeline.entries;

        let mut milestones = Vec::new();
        if cadence > 0 {
            let mut cursor = cadence;
            while cursor as f64 <= total_weeks + cadence as f64 {
                let week = cursor as f64;
                let window_start = week - cadence as f64;
                let completed: Vec<CompletedAction> = entries
                    .iter()
                    .filter(|e| window_start <= e.end_week && e.end_week < week)
                    .map(|e| CompletedAction {
                        id: e.action_id.clone(),
                        title: e.title.clone(),
                    })
                    .collect();

                if !completed.is_empty() || week <= total_weeks {
                    milestones.push(Milestone {
                        milestone_id: format!("M{:02}", milestones.len() + 1),
                        week: cursor,
                        label: format!("Week {} Checkpoint", cursor),
                        actions_completed_count: completed.len(),
                        actions_completed: completed,
                        cumulative_actions_completed: entries
                            .iter()
                            .filter(|e| e.end_week <= week)
                            .count(),
                    });
                }
                cursor += cadence;
            }
        }

        let phase_completions = phase_completions(entries);

        info!(
            milestones = milestones.len(),
            phase_completions = phase_completions.len(),
            "Milestones defined"
        );

        MilestonedRoadmap {
            scheduled,
            milestones,
            phase_completions,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::roadmap::action::ActionTemplate;
    use crate::domain::roadmap::config::PlannerConfig;
    use crate::domain::roadmap::dependency::DependencyTable;
    use crate::domain::roadmap::library::ActionLibrary;
    use crate::domain::roadmap::mapping::tests::gap;
    use anyhow::Result;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn milestoned(templates: Vec<ActionTemplate>) -> Result<MilestonedRoadmap> {
        let mut library = BTreeMap::new();
        library.insert("people".to_string(), templates);
        let planner = RoadmapPlanner::new(
            PlannerConfig {
                parallel_streams: 1,
                ..PlannerConfig::default()
            },
            ActionLibrary::new(library)?,
            DependencyTable::default(),
        );
        let mapping = planner.map_gaps_to_actions(&[gap("people", 25.0)])?;
        let estimated = planner.estimate_effort_and_impact(planner.sequence_by_priority(mapping));
        let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
        Ok(planner.define_milestones(planner.generate_timeline(estimated, start)))
    }

    #[test]
    fn test_checkpoints_within_horizon() -> Result<()> {
        let m = milestoned(vec![
            ActionTemplate::new("First", "", 8.0, 9.0, Phase::QuickWins, &[]),
            ActionTemplate::new("Second", "", 10.0, 8.0, Phase::Foundation, &[]),
        ])?;
        // 12 months = 51.96 weeks: 8, 16, .., 48
        let weeks: Vec<u32> = m.milestones.iter().map(|x| x.week).collect();
        assert_eq!(weeks, vec![8, 16, 24, 32, 40, 48]);
        assert_eq!(m.milestones[0].milestone_id, "M01");
        assert_eq!(m.milestones[0].label, "Week 8 Checkpoint");

        // First ends at 8: outside [0, 8), inside [8, 16)
        assert_eq!(m.milestones[0].actions_completed_count, 0);
        assert_eq!(m.milestones[0].cumulative_actions_completed, 1);
        assert_eq!(m.milestones[1].actions_completed_count, 1);
        // Second ends at 18
        assert_eq!(m.milestones[2].actions_completed[0].title, "Second");
        assert_eq!(m.milestones[5].cumulative_actions_completed, 2);
        Ok(())
    }

    #[test]
    fn test_overflow_checkpoint_only_when_something_completes() -> Result<()> {
        let m = milestoned(vec![ActionTemplate::new("Marathon", "", 50.0, 9.0, Phase::QuickWins, &[])])?;
        let last = m.milestones.last().unwrap();
        assert_eq!(last.week, 56);
        assert_eq!(last.milestone_id, "M07");
        assert_eq!(last.actions_completed_count, 1);
        assert!(last.week as f64 <= 12.0 * WEEKS_PER_MONTH + 8.0);
        Ok(())
    }

    #[test]
    fn test_phase_completions_in_phase_order() -> Result<()> {
        let m = milestoned(vec![
            ActionTemplate::new("Later", "", 6.0, 8.0, Phase::Scale, &[]),
            ActionTemplate::new("Now", "", 2.0, 9.0, Phase::QuickWins, &[]),
            ActionTemplate::new("Also now", "", 3.0, 7.0, Phase::QuickWins, &[]),
        ])?;
        let phases: Vec<(Phase, f64, usize)> = m
            .phase_completions
            .iter()
            .map(|p| (p.phase, p.completion_week, p.action_count))
            .collect();
        assert_eq!(phases, vec![(Phase::QuickWins, 5.0, 2), (Phase::Scale, 11.0, 1)]);
        Ok(())
    }

    #[test]
    fn test_empty_timeline_still_has_checkpoints() -> Result<()> {
        let m = milestoned(vec![])?;
        assert_eq!(m.milestones.len(), 6);
        assert!(m.milestones.iter().all(|x| x.cumulative_actions_completed == 0));
        assert!(m.phase_completions.is_empty());
        Ok(())
    }
}
