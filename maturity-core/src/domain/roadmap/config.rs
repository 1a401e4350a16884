// maturity-core/src/domain/roadmap/config.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::roadmap::action::Phase;

/// Planning calendar month.
pub const WEEKS_PER_MONTH: f64 = 4.33;

/// Scheduling and estimation policy of the roadmap planner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "kebab-case")]
pub struct PlannerConfig {
    #[validate(range(min = 1, max = 120))]
    pub horizon_months: u32,

    /// Zero is accepted and yields an empty timeline.
    #[validate(range(max = 64))]
    pub parallel_streams: usize,

    /// Upper bound on actions selected from the library.
    pub initiative_cap: usize,

    #[validate(range(min = 1, max = 52))]
    pub milestone_cadence_weeks: u32,

    #[validate(range(exclusive_min = 0.0))]
    pub quick_win_effort_weeks: f64,

    #[validate(range(min = 0.0, max = 10.0))]
    pub quick_win_impact: f64,

    /// Share of weekly capacity actually spent on an action.
    #[validate(range(exclusive_min = 0.0, max = 1.0))]
    pub utilization_factor: f64,

    #[validate(range(min = 0.0))]
    pub weekly_capacity_hours: f64,

    #[validate(range(min = 0.0))]
    pub hourly_rate_usd: f64,

    /// Kick-off date. The caller supplies today when absent.
    pub start_date: Option<NaiveDate>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            horizon_months: 12,
            parallel_streams: 2,
            initiative_cap: 20,
            milestone_cadence_weeks: 8,
            quick_win_effort_weeks: 6.0,
            quick_win_impact: 6.5,
            utilization_factor: 0.60,
            weekly_capacity_hours: 40.0,
            hourly_rate_usd: 150.0,
            start_date: None,
        }
    }
}

impl PlannerConfig {
    pub fn horizon_weeks(&self) -> f64 {
        self.horizon_months as f64 * WEEKS_PER_MONTH
    }

    /// Range validation for configs built in code rather than loaded.
    pub fn check(&self) -> Result<(), DomainError> {
        let rates = [
            self.quick_win_effort_weeks,
            self.quick_win_impact,
            self.utilization_factor,
            self.weekly_capacity_hours,
            self.hourly_rate_usd,
        ];
        if rates.iter().any(|v| !v.is_finite()) {
            return Err(DomainError::InvalidPlannerConfig(
                "rates and thresholds must be finite numbers".to_string(),
            ));
        }
        self.validate()
            .map_err(|e| DomainError::InvalidPlannerConfig(e.to_string()))
    }
}

const FALLBACK_COLOR: &str = "#64748b";

/// Presentation colours for the Gantt export. Not part of the plan itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct GanttPalette {
    pub phase_colors: BTreeMap<Phase, String>,
    pub dimension_colors: BTreeMap<String, String>,
    pub milestone_color: String,
    pub fallback_color: String,
}

impl Default for GanttPalette {
    fn default() -> Self {
        let phase_colors = [
            (Phase::QuickWins, "#22c55e"),
            (Phase::Foundation, "#3b82f6"),
            (Phase::Scale, "#f59e0b"),
            (Phase::Optimize, "#8b5cf6"),
        ]
        .into_iter()
        .map(|(p, c)| (p, c.to_string()))
        .collect();

        let dimension_colors = [
            ("data", "#06b6d4"),
            ("process", "#10b981"),
            ("people", "#f97316"),
            ("technology", "#6366f1"),
            ("governance", "#ec4899"),
        ]
        .into_iter()
        .map(|(d, c)| (d.to_string(), c.to_string()))
        .collect();

        Self {
            phase_colors,
            dimension_colors,
            milestone_color: "#f43f5e".to_string(),
            fallback_color: FALLBACK_COLOR.to_string(),
        }
    }
}

impl GanttPalette {
    pub fn phase_color(&self, phase: Phase) -> &str {
        self.phase_colors
            .get(&phase)
            .map(String::as_str)
            .unwrap_or(self.fallback_color.as_str())
    }

    pub fn dimension_color(&self, dimension: &str) -> &str {
        self.dimension_colors
            .get(dimension)
            .map(String::as_str)
            .unwrap_or(self.fallback_color.as_str())
    }
}
