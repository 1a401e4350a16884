pub mod benchmark;
pub mod error;
pub mod graph;
pub mod numeric;
pub mod ports;
pub mod project;
pub mod roadmap;
pub mod scoring;

// Re-exports for shorter imports elsewhere
pub use error::DomainError;
