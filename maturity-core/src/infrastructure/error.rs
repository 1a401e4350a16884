// maturity-core/src/infrastructure/error.rs

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::error::DomainError;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(maturity::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path:?}: {source}")]
    #[diagnostic(code(maturity::infra::io))]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(maturity::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse YAML at {path:?}: {source}")]
    #[diagnostic(
        code(maturity::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    ParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("JSON Serialization Error: {0}")]
    #[diagnostic(code(maturity::infra::json))]
    JsonError(#[from] serde_json::Error),

    #[error("Configuration validation failed: {0}")]
    #[diagnostic(
        code(maturity::infra::validation),
        help("A value in maturity.yaml is out of its allowed range.")
    )]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    #[diagnostic(transparent)]
    InvalidConfig(#[from] DomainError),

    #[error("Configuration Error: {0}")]
    ConfigError(String),

    #[error("Project configuration not found at '{0}'")]
    #[diagnostic(code(maturity::infra::config_missing))]
    ConfigNotFound(String),
}
