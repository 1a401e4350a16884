// maturity-core/src/domain/scoring/engine.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument, warn};

use crate::domain::numeric::round_to;
use crate::domain::scoring::maturity::{MaturityLevel, MaturityThresholds};
use crate::domain::scoring::response::ResponseRecord;
use crate::domain::scoring::weights::DimensionWeightSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub overall_score: f64,
    pub maturity_level: MaturityLevel,
    pub maturity_label: String,
    pub dimension_scores: BTreeMap<String, f64>,
    pub response_count: usize,
}

impl ScoreResult {
    pub fn dimension_score(&self, dimension: &str) -> f64 {
        self.dimension_scores.get(dimension).copied().unwrap_or(0.0)
    }
}

/// Turns normalised responses into per-dimension scores, a weighted overall
/// score and a maturity level. Pure: no I/O, no shared state.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    thresholds: MaturityThresholds,
}

impl ScoringEngine {
    pub fn new(thresholds: MaturityThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &MaturityThresholds {
        &self.thresholds
    }

    pub fn maturity_level(&self, score: f64) -> MaturityLevel {
        self.thresholds.level_for(score)
    }

    /// Weighted mean per dimension, then `Σ dimension_score * dimension_weight`
    /// over every configured dimension. A dimension without responses (or with
    /// zero total weight) scores 0.0.
    #[instrument(skip_all, fields(responses = responses.len(), dimensions = weights.len()))]
    pub fn compute_scores(
        &self,
        responses: &[ResponseRecord],
        weights: &DimensionWeightSet,
    ) -> ScoreResult {
        // (Σ score * weight, Σ weight) per dimension
        let mut accumulators: BTreeMap<&str, (f64, f64)> =
            weights.dimensions().map(|d| (d, (0.0, 0.0))).collect();

        for response in responses {
            match accumulators.get_mut(response.dimension.as_str()) {
                Some((weighted_sum, total_weight)) => {
                    *weighted_sum += response.numeric_score * response.weight;
                    *total_weight += response.weight;
                }
                None => {
                    warn!(dimension = %response.dimension, "Ignoring response for unconfigured dimension");
                }
            }
        }

        let dimension_scores: BTreeMap<String, f64> = accumulators
            .into_iter()
            .map(|(dimension, (weighted_sum, total_weight))| {
                let score = if total_weight > 0.0 {
                    round_to(weighted_sum / total_weight, 2)
                } else {
                    0.0
                };
                (dimension.to_string(), score)
            })
            .collect();

        let overall: f64 = weights
            .iter()
            .map(|(dimension, weight)| {
                dimension_scores.get(dimension).copied().unwrap_or(0.0) * weight
            })
            .sum();
        let overall_score = round_to(overall, 2);
        let maturity_level = self.thresholds.level_for(overall_score);

        debug!(
            overall_score,
            maturity_level = maturity_level.as_u8(),
            "Maturity scores computed"
        );

        ScoreResult {
            overall_score,
            maturity_level,
            maturity_label: maturity_level.label().to_string(),
            dimension_scores,
            response_count: responses.len(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::scoring::response::likert_to_score;
    use anyhow::Result;

    const DIMENSIONS: [&str; 5] = ["data", "process", "people", "technology", "governance"];

    fn uniform_answers(answer: u8, per_dimension: usize) -> Result<Vec<ResponseRecord>> {
        let mut out = Vec::new();
        for dimension in DIMENSIONS {
            for _ in 0..per_dimension {
                out.push(ResponseRecord::from_likert(dimension, answer, 1.0)?);
            }
        }
        Ok(out)
    }

    #[test]
    fn test_all_ones_is_zero_and_level_one() -> Result<()> {
        let engine = ScoringEngine::default();
        let result = engine.compute_scores(&uniform_answers(1, 3)?, &DimensionWeightSet::default());
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.maturity_level, MaturityLevel::Initial);
        Ok(())
    }

    #[test]
    fn test_all_fives_is_hundred_and_level_five() -> Result<()> {
        let engine = ScoringEngine::default();
        let result = engine.compute_scores(&uniform_answers(5, 3)?, &DimensionWeightSet::default());
        assert_eq!(result.overall_score, 100.0);
        assert_eq!(result.maturity_level, MaturityLevel::Optimizing);
        Ok(())
    }

    #[test]
    fn test_all_threes_is_defined() -> Result<()> {
        let engine = ScoringEngine::default();
        let result = engine.compute_scores(&uniform_answers(3, 4)?, &DimensionWeightSet::default());
        assert_eq!(result.overall_score, 50.0);
        assert_eq!(result.maturity_level, MaturityLevel::Defined);
        assert_eq!(result.maturity_label, "Defined");
        Ok(())
    }

    #[test]
    fn test_weighted_average_per_dimension() -> Result<()> {
        let engine = ScoringEngine::default();
        let responses = vec![
            ResponseRecord::new("data", 80.0, 3.0)?,
            ResponseRecord::new("data", 40.0, 1.0)?,
        ];
        let result = engine.compute_scores(&responses, &DimensionWeightSet::default());
        // (80*3 + 40*1) / 4 = 70
        assert_eq!(result.dimension_score("data"), 70.0);
        // 70 * 0.25
        assert_eq!(result.overall_score, 17.5);
        Ok(())
    }

    #[test]
    fn test_missing_dimension_scores_zero() -> Result<()> {
        let engine = ScoringEngine::default();
        let responses = vec![ResponseRecord::new("data", 100.0, 1.0)?];
        let result = engine.compute_scores(&responses, &DimensionWeightSet::default());
        assert_eq!(result.dimension_score("people"), 0.0);
        assert_eq!(result.dimension_scores.len(), 5);
        Ok(())
    }

    #[test]
    fn test_zero_total_weight_scores_zero() -> Result<()> {
        let engine = ScoringEngine::default();
        let responses = vec![ResponseRecord::new("data", 90.0, 0.0)?];
        let result = engine.compute_scores(&responses, &DimensionWeightSet::default());
        assert_eq!(result.dimension_score("data"), 0.0);
        Ok(())
    }

    #[test]
    fn test_unconfigured_dimension_is_ignored() -> Result<()> {
        let engine = ScoringEngine::default();
        let responses = vec![
            ResponseRecord::new("finance", 100.0, 1.0)?,
            ResponseRecord::new("data", 60.0, 1.0)?,
        ];
        let result = engine.compute_scores(&responses, &DimensionWeightSet::default());
        assert!(!result.dimension_scores.contains_key("finance"));
        assert_eq!(result.overall_score, 15.0);
        Ok(())
    }

    #[test]
    fn test_empty_responses() {
        let engine = ScoringEngine::default();
        let result = engine.compute_scores(&[], &DimensionWeightSet::default());
        assert_eq!(result.overall_score, 0.0);
        assert_eq!(result.response_count, 0);
    }

    #[test]
    fn test_higher_answer_gives_higher_dimension_score() -> Result<()> {
        let engine = ScoringEngine::default();
        let weights = DimensionWeightSet::default();
        let mut previous = -1.0;
        for answer in 1..=5u8 {
            let responses = vec![ResponseRecord::new("process", likert_to_score(answer)?, 1.0)?];
            let score = engine.compute_scores(&responses, &weights).dimension_score("process");
            assert!(score > previous);
            previous = score;
        }
        Ok(())
    }
}
