// maturity-core/src/infrastructure/mod.rs

pub mod adapters;
pub mod config;
pub mod error;
pub mod fs;

pub use adapters::{StaticBenchmarks, StaticLibrary, YamlResponses};
pub use config::load_project_config;
pub use error::InfrastructureError;
