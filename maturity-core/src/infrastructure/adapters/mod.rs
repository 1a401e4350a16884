// maturity-core/src/infrastructure/adapters/mod.rs

pub mod memory;
pub mod yaml;

pub use memory::{StaticBenchmarks, StaticLibrary, StaticResponses};
pub use yaml::YamlResponses;
