// maturity-core/src/application/clean.rs

use std::fs;
use std::path::{Component, Path};
use tracing::{info, instrument};

use crate::domain::project::ProjectConfig;
use crate::error::MaturityError;

/// Removes the configured output artefacts and returns the ones deleted.
/// Only plain relative paths inside `project_dir` are accepted.
#[instrument(skip(config))]
pub fn clean_project(project_dir: &Path, config: &ProjectConfig) -> Result<Vec<String>, MaturityError> {
    info!("🧹 Initializing cleanup sequence...");

    let targets = if config.clean_targets.is_empty() {
        vec![config.target_path.clone()]
    } else {
        config.clean_targets.clone()
    };

    // Check every target before deleting anything.
    for target in &targets {
        if !is_contained(Path::new(target)) {
            return Err(MaturityError::UnsafePath(target.clone()));
        }
    }

    let mut removed = Vec::new();
    for target in targets {
        let full_path = project_dir.join(&target);
        if !full_path.exists() {
            continue;
        }
        if full_path.is_dir() {
            fs::remove_dir_all(&full_path)?;
        } else {
            fs::remove_file(&full_path)?;
        }
        info!(path = %target, "🗑️  Artifact removed");
        removed.push(target);
    }

    Ok(removed)
}

// Zero-trust guard: no root, prefix or `..` component.
fn is_contained(path: &Path) -> bool {
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
