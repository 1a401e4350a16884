// maturity-core/src/domain/scoring/mod.rs

pub mod engine;
pub mod maturity;
pub mod response;
pub mod weights;

pub use engine::{ScoreResult, ScoringEngine};
pub use maturity::{MaturityLevel, MaturityThresholds};
pub use response::{ResponseRecord, likert_to_score};
pub use weights::{DimensionWeightSet, WEIGHT_SUM_TOLERANCE};
