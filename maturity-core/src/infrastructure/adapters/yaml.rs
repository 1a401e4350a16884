// maturity-core/src/infrastructure/adapters/yaml.rs

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::ports::ResponseSource;
use crate::domain::scoring::ResponseRecord;
use crate::infrastructure::config::load_fragment;

fn source_error(path: &Path, err: impl std::fmt::Display) -> DomainError {
    DomainError::SourceError(format!("{}: {}", path.display(), err))
}

// ── Responses ──────────────────────────────────────────────────────

/// One answer as written by a respondent: either a Likert `answer` (1-5)
/// or an already normalised `numeric_score`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResponse {
    #[serde(default)]
    question_id: Option<String>,
    dimension: String,
    #[serde(default)]
    answer: Option<u8>,
    #[serde(default)]
    numeric_score: Option<f64>,
    #[serde(default = "default_weight")]
    weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl RawResponse {
    fn into_record(self) -> Result<ResponseRecord, DomainError> {
        let record = match (self.answer, self.numeric_score) {
            (Some(answer), None) => ResponseRecord::from_likert(self.dimension, answer, self.weight)?,
            (None, Some(score)) => ResponseRecord::new(self.dimension, score, self.weight)?,
            (Some(_), Some(_)) => {
                return Err(DomainError::InvalidResponse(format!(
                    "'{}' has both answer and numeric_score",
                    self.dimension
                )));
            }
            (None, None) => {
                return Err(DomainError::InvalidResponse(format!(
                    "'{}' has neither answer nor numeric_score",
                    self.dimension
                )));
            }
        };
        Ok(match self.question_id {
            Some(id) => record.with_question_id(id),
            None => record,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ResponsesFile {
    responses: Vec<RawResponse>,
}

/// `responses.yaml` reader.
#[derive(Debug, Clone)]
pub struct YamlResponses {
    path: PathBuf,
}

impl YamlResponses {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResponseSource for YamlResponses {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load_responses(&self) -> Result<Vec<ResponseRecord>, DomainError> {
        let file: ResponsesFile =
            load_fragment(&self.path).map_err(|e| source_error(&self.path, e))?;
        let records = file
            .responses
            .into_iter()
            .map(RawResponse::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        info!(count = records.len(), "Responses loaded");
        Ok(records)
    }
}
