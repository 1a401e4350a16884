// maturity-core/src/application/mod.rs

pub mod assessment;
pub mod clean;
pub mod visualization;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use maturity_core::application::{run_assessment, clean_project};`

pub use assessment::{
    AssessmentReport, AssessmentSources, ComparisonReport, run_assessment, run_comparison,
    run_scoring,
};
pub use clean::clean_project;
pub use visualization::ComparisonVisualization;
