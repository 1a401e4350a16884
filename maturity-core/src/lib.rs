// maturity-core/src/lib.rs

#![allow(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Domain (pure computation)
// Scoring, peer comparison, roadmap planning, dependency graph.
// Depends on nothing else (no infra, no app). Ports live in domain::ports.
pub mod domain;

// 2. Infrastructure (Adapters)
// YAML/JSON sources, project configuration, file output.
pub mod infrastructure;

// 3. Application (Use Cases)
// Assessment pipeline, comparison visualization, cleanup.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use error::MaturityError;
