// maturity-core/src/domain/roadmap/action.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::domain::error::DomainError;

/// Delivery phase. Declaration order is the scheduling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    QuickWins,
    #[default]
    Foundation,
    Scale,
    Optimize,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::QuickWins, Phase::Foundation, Phase::Scale, Phase::Optimize];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::QuickWins => "quick_wins",
            Self::Foundation => "foundation",
            Self::Scale => "scale",
            Self::Optimize => "optimize",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::QuickWins => "Quick Wins",
            Self::Foundation => "Foundation",
            Self::Scale => "Scale",
            Self::Optimize => "Optimize",
        }
    }

    pub fn is_strategic(&self) -> bool {
        matches!(self, Self::Scale | Self::Optimize)
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Phase::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Unknown phase: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortLabel {
    QuickWin,
    ShortTerm,
    MediumTerm,
    LongTerm,
}

impl EffortLabel {
    pub fn from_weeks(effort_weeks: f64) -> Self {
        if effort_weeks <= 4.0 {
            Self::QuickWin
        } else if effort_weeks <= 8.0 {
            Self::ShortTerm
        } else if effort_weeks <= 16.0 {
            Self::MediumTerm
        } else {
            Self::LongTerm
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactLabel {
    Transformational,
    Significant,
    Moderate,
    Incremental,
}

impl ImpactLabel {
    pub fn from_score(impact_score: f64) -> Self {
        if impact_score >= 8.0 {
            Self::Transformational
        } else if impact_score >= 6.0 {
            Self::Significant
        } else if impact_score >= 4.0 {
            Self::Moderate
        } else {
            Self::Incremental
        }
    }
}

/// One candidate initiative in the action library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ActionTemplate {
    #[validate(length(min = 1))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(exclusive_min = 0.0))]
    pub effort_weeks: f64,
    #[validate(range(min = 0.0, max = 10.0))]
    pub impact_score: f64,
    #[serde(default)]
    pub phase: Phase,
    /// `None` falls back to the dimension name; an explicit empty list stays empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ActionTemplate {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        effort_weeks: f64,
        impact_score: f64,
        phase: Phase,
        tags: &[&str],
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            effort_weeks,
            impact_score,
            phase,
            tags: (!tags.is_empty()).then(|| tags.iter().map(|t| t.to_string()).collect()),
        }
    }

    pub fn check(&self) -> Result<(), DomainError> {
        if !self.effort_weeks.is_finite() || !self.impact_score.is_finite() {
            return Err(DomainError::InvalidActionTemplate {
                title: self.title.clone(),
                reason: "effort and impact must be finite numbers".to_string(),
            });
        }
        self.validate()
            .map_err(|e| DomainError::InvalidActionTemplate {
                title: self.title.clone(),
                reason: e.to_string(),
            })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_order_and_names() {
        assert!(Phase::QuickWins < Phase::Foundation);
        assert!(Phase::Scale < Phase::Optimize);
        assert_eq!("scale".parse::<Phase>().unwrap(), Phase::Scale);
        assert!("later".parse::<Phase>().is_err());
        assert_eq!(serde_json::to_string(&Phase::QuickWins).unwrap(), "\"quick_wins\"");
    }

    #[test]
    fn test_labels() {
        assert_eq!(EffortLabel::from_weeks(4.0), EffortLabel::QuickWin);
        assert_eq!(EffortLabel::from_weeks(8.0), EffortLabel::ShortTerm);
        assert_eq!(EffortLabel::from_weeks(16.0), EffortLabel::MediumTerm);
        assert_eq!(EffortLabel::from_weeks(16.5), EffortLabel::LongTerm);
        assert_eq!(ImpactLabel::from_score(8.0), ImpactLabel::Transformational);
        assert_eq!(ImpactLabel::from_score(6.5), ImpactLabel::Significant);
        assert_eq!(ImpactLabel::from_score(4.0), ImpactLabel::Moderate);
        assert_eq!(ImpactLabel::from_score(3.9), ImpactLabel::Incremental);
    }

    #[test]
    fn test_template_check() {
        let ok = ActionTemplate::new("Catalogue", "", 8.0, 8.0, Phase::Foundation, &["data"]);
        assert!(ok.check().is_ok());

        let zero_effort = ActionTemplate::new("Nothing", "", 0.0, 5.0, Phase::Scale, &[]);
        assert!(matches!(
            zero_effort.check(),
            Err(DomainError::InvalidActionTemplate { .. })
        ));

        let loud = ActionTemplate::new("Too loud", "", 2.0, 11.0, Phase::Scale, &[]);
        assert!(loud.check().is_err());
    }

    #[test]
    fn test_phase_defaults_to_foundation() {
        let yaml = "title: Thing\neffort_weeks: 3\nimpact_score: 5\n";
        let t: ActionTemplate = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(t.phase, Phase::Foundation);
        assert!(t.tags.is_none());

        let untagged: ActionTemplate =
            serde_yaml::from_str("title: Thing\neffort_weeks: 3\nimpact_score: 5\ntags: []\n").unwrap();
        assert_eq!(untagged.tags, Some(vec![]));
    }
}
