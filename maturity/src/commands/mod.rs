// maturity/src/commands/mod.rs

pub mod clean;
pub mod compare;
pub mod plan;
pub mod score;
pub mod validate;

use anyhow::Context;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use std::path::Path;

use maturity_core::domain::project::ProjectConfig;
use maturity_core::infrastructure::adapters::{StaticBenchmarks, StaticLibrary, YamlResponses};
use maturity_core::infrastructure::load_project_config;

/// Config plus the adapters every assessment command reads through.
pub struct Project {
    pub config: ProjectConfig,
    pub responses: YamlResponses,
    pub benchmarks: StaticBenchmarks,
    pub library: StaticLibrary,
}

pub fn load_project(project_dir: &Path) -> anyhow::Result<Project> {
    eprintln!("⚙️  Loading configuration...");
    let config = load_project_config(project_dir)
        .with_context(|| format!("Cannot load project in {}", project_dir.display()))?;
    eprintln!("   Project: {} (v{})", config.name, config.version);

    Ok(Project {
        responses: YamlResponses::new(project_dir.join(&config.responses_path)),
        benchmarks: StaticBenchmarks(config.benchmarks.clone()),
        library: StaticLibrary(config.library()),
        config,
    })
}

pub fn new_table(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.to_vec());
    table
}
