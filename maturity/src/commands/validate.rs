// maturity/src/commands/validate.rs
//
// USE CASE: Configuration check. Loading already validates ranges, weights,
// benchmarks, the action library and dependency acyclicity.

use anyhow::Context;
use std::path::PathBuf;

use maturity_core::domain::ports::ResponseSource;

use crate::commands::load_project;

pub fn execute(project_dir: PathBuf) -> anyhow::Result<()> {
    let project = load_project(&project_dir)?;
    let config = &project.config;

    let weights = config.weight_set()?;
    let layers = config
        .dependency_table()
        .layers()
        .context("Dimension prerequisites are inconsistent")?;
    let library = config.library();
    for dimension in weights.dimensions() {
        if library.templates_for(dimension).is_err() {
            eprintln!("   ⚠️  No action templates for dimension '{}'", dimension);
        }
    }
    let responses = project
        .responses
        .load_responses()
        .context("Responses file is invalid")?;

    println!("   Dimensions: {}", weights.len());
    println!("   Responses: {}", responses.len());
    println!("   Benchmark segments: {}", config.benchmarks.len());
    println!("   Action templates: {}", library.template_count());
    println!(
        "   Prerequisite layers: {}",
        layers
            .iter()
            .map(|layer| layer.join(", "))
            .collect::<Vec<_>>()
            .join(" → ")
    );
    println!("✅ Configuration is valid.");
    Ok(())
}
