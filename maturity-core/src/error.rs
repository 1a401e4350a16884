// maturity-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaturityError {
    // --- DOMAIN ERRORS (weights, dimensions, templates, cycles) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing, Validation) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    #[error("Unsafe path traversal detected: {0}")]
    UnsafePath(String),
}

impl From<std::io::Error> for MaturityError {
    fn from(err: std::io::Error) -> Self {
        MaturityError::Infrastructure(InfrastructureError::Io(err))
    }
}
