use crate::domain::benchmark::BenchmarkQuantiles;
use crate::domain::error::DomainError;
use crate::domain::roadmap::ActionLibrary;
use crate::domain::scoring::ResponseRecord;

/// Answered questions for one assessment.
pub trait ResponseSource: Send + Sync {
    fn load_responses(&self) -> Result<Vec<ResponseRecord>, DomainError>;
}

/// Every benchmark segment available for peer selection.
pub trait BenchmarkSource: Send + Sync {
    fn load_benchmarks(&self) -> Result<Vec<BenchmarkQuantiles>, DomainError>;
}

pub trait ActionLibrarySource: Send + Sync {
    fn load_library(&self) -> Result<ActionLibrary, DomainError>;
}
