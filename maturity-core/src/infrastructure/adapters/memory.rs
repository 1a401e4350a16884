// maturity-core/src/infrastructure/adapters/memory.rs

//! In-memory sources, used when the data already sits in the project config.

use crate::domain::benchmark::BenchmarkQuantiles;
use crate::domain::error::DomainError;
use crate::domain::ports::{ActionLibrarySource, BenchmarkSource, ResponseSource};
use crate::domain::roadmap::ActionLibrary;
use crate::domain::scoring::ResponseRecord;

#[derive(Debug, Clone, Default)]
pub struct StaticResponses(pub Vec<ResponseRecord>);

impl ResponseSource for StaticResponses {
    fn load_responses(&self) -> Result<Vec<ResponseRecord>, DomainError> {
        for record in &self.0 {
            record.check()?;
        }
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticBenchmarks(pub Vec<BenchmarkQuantiles>);

impl BenchmarkSource for StaticBenchmarks {
    fn load_benchmarks(&self) -> Result<Vec<BenchmarkQuantiles>, DomainError> {
        Ok(self.0.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct StaticLibrary(pub ActionLibrary);

impl ActionLibrarySource for StaticLibrary {
    fn load_library(&self) -> Result<ActionLibrary, DomainError> {
        Ok(self.0.clone())
    }
}
