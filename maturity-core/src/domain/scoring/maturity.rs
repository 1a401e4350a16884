// maturity-core/src/domain/scoring/maturity.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

// Discriminants follow the ordinal level (Initial = 1 .. Optimizing = 5), so
// levels compare naturally with `<` / `>=`.

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MaturityLevel {
    Initial = 1,
    Developing = 2,
    Defined = 3,
    Managed = 4,
    Optimizing = 5,
}

impl MaturityLevel {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Initial => "Initial",
            Self::Developing => "Developing",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimizing => "Optimizing",
        }
    }
}

impl fmt::Display for MaturityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.label())
    }
}

impl From<MaturityLevel> for u8 {
    fn from(level: MaturityLevel) -> Self {
        level.as_u8()
    }
}

impl TryFrom<u8> for MaturityLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Initial),
            2 => Ok(Self::Developing),
            3 => Ok(Self::Defined),
            4 => Ok(Self::Managed),
            5 => Ok(Self::Optimizing),
            other => Err(format!("Unknown maturity level: {}", other)),
        }
    }
}

/// Inclusive lower bounds of levels 2..=5. Anything below `developing` is level 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[validate(schema(function = "validate_threshold_order"))]
pub struct MaturityThresholds {
    #[validate(range(min = 0.0, max = 100.0))]
    pub developing: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub defined: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub managed: f64,
    #[validate(range(min = 0.0, max = 100.0))]
    pub optimizing: f64,
}

impl Default for MaturityThresholds {
    fn default() -> Self {
        Self {
            developing: 20.0,
            defined: 40.0,
            managed: 60.0,
            optimizing: 80.0,
        }
    }
}

impl MaturityThresholds {
    /// Monotonic mapping from a 0-100 score to a level.
    pub fn level_for(&self, score: f64) -> MaturityLevel {
        if score >= self.optimizing {
            MaturityLevel::Optimizing
        } else if score >= self.managed {
            MaturityLevel::Managed
        } else if score >= self.defined {
            MaturityLevel::Defined
        } else if score >= self.developing {
            MaturityLevel::Developing
        } else {
            MaturityLevel::Initial
        }
    }
}

fn validate_threshold_order(t: &MaturityThresholds) -> Result<(), ValidationError> {
    if t.developing <= t.defined && t.defined <= t.managed && t.managed <= t.optimizing {
        Ok(())
    } else {
        Err(ValidationError::new("maturity_thresholds_not_ascending"))
    }
}
