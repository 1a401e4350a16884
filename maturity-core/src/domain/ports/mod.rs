// maturity-core/src/domain/ports/mod.rs

pub mod sources;

pub use sources::{ActionLibrarySource, BenchmarkSource, ResponseSource};
