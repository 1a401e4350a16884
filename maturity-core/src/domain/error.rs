// maturity-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Dimension weights must sum to 1.0, got {sum:.3}")]
    #[diagnostic(
        code(maturity::domain::weights),
        help("Fix the weights or set 'rebalance-weights: true' to normalise them proportionally.")
    )]
    InvalidWeightSum { sum: f64 },

    #[error("Weight for dimension '{dimension}' must be within [0, 1], got {weight}")]
    #[diagnostic(code(maturity::domain::weights))]
    InvalidWeight { dimension: String, weight: f64 },

    #[error("Dimension weight set is empty")]
    #[diagnostic(code(maturity::domain::weights))]
    EmptyWeightSet,

    #[error("Unknown dimension '{0}'")]
    #[diagnostic(
        code(maturity::domain::unknown_dimension),
        help("The dimension is not configured in the weight set or the action library.")
    )]
    UnknownDimension(String),

    #[error("Invalid response record: {0}")]
    #[diagnostic(code(maturity::domain::response))]
    InvalidResponse(String),

    #[error("Likert answer must be between 1 and 5, got {0}")]
    #[diagnostic(code(maturity::domain::likert))]
    InvalidLikertAnswer(u8),

    #[error("Invalid benchmark record: {0}")]
    #[diagnostic(
        code(maturity::domain::benchmark),
        help("Quantiles must be non-decreasing: p25 <= p50 <= p75 <= p90.")
    )]
    InvalidBenchmark(String),

    #[error("Invalid action template '{title}': {reason}")]
    #[diagnostic(code(maturity::domain::action_template))]
    InvalidActionTemplate { title: String, reason: String },

    #[error("Circular dependency detected involving: {0}")]
    #[diagnostic(
        code(maturity::domain::cycle),
        help("Check the prerequisite lists in dependencies.yml.")
    )]
    CircularDependency(String),

    #[error("Invalid planner configuration: {0}")]
    #[diagnostic(code(maturity::domain::planner))]
    InvalidPlannerConfig(String),

    #[error("Failed to load input: {0}")]
    #[diagnostic(code(maturity::domain::port))]
    SourceError(String),
}
