// maturity-core/src/domain/scoring/response.rs

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::error::DomainError;

// (answer - 1) * 25 maps 1 -> 0, 3 -> 50, 5 -> 100
const LIKERT_SCALE_FACTOR: f64 = 25.0;

/// Normalises a 1-5 Likert answer to the 0-100 scale.
pub fn likert_to_score(answer: u8) -> Result<f64, DomainError> {
    if !(1..=5).contains(&answer) {
        return Err(DomainError::InvalidLikertAnswer(answer));
    }
    Ok(f64::from(answer - 1) * LIKERT_SCALE_FACTOR)
}

/// One answered question, already normalised to 0-100.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct ResponseRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,

    #[validate(length(min = 1, message = "Dimension cannot be empty"))]
    pub dimension: String,

    #[validate(range(min = 0.0, max = 100.0, message = "Score must be within [0, 100]"))]
    pub numeric_score: f64,

    #[validate(range(min = 0.0, message = "Weight cannot be negative"))]
    #[serde(default = "default_weight")]
    pub weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl ResponseRecord {
    pub fn new(
        dimension: impl Into<String>,
        numeric_score: f64,
        weight: f64,
    ) -> Result<Self, DomainError> {
        let record = Self {
            question_id: None,
            dimension: dimension.into(),
            numeric_score,
            weight,
        };
        record.check()?;
        Ok(record)
    }

    pub fn from_likert(
        dimension: impl Into<String>,
        answer: u8,
        weight: f64,
    ) -> Result<Self, DomainError> {
        Self::new(dimension, likert_to_score(answer)?, weight)
    }

    pub fn with_question_id(mut self, question_id: impl Into<String>) -> Self {
        self.question_id = Some(question_id.into());
        self
    }

    /// Field validation plus a finiteness guard (range checks let NaN through).
    pub fn check(&self) -> Result<(), DomainError> {
        if !self.numeric_score.is_finite() || !self.weight.is_finite() {
            return Err(DomainError::InvalidResponse(format!(
                "non-finite score or weight for dimension '{}'",
                self.dimension
            )));
        }
        self.validate()
            .map_err(|e| DomainError::InvalidResponse(e.to_string()))
    }
}
