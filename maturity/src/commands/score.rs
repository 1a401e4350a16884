// maturity/src/commands/score.rs
//
// USE CASE: Score the recorded responses.

use std::path::PathBuf;

use maturity_core::application::run_scoring;

use crate::cli::OutputFormat;
use crate::commands::{load_project, new_table};

pub fn execute(project_dir: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let project = load_project(&project_dir)?;
    let result = run_scoring(&project.config, &project.responses)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Table => {
            let weights = project.config.weight_set()?;
            let mut table = new_table(&["Dimension", "Weight", "Score"]);
            for (dimension, weight) in weights.iter() {
                table.add_row(vec![
                    dimension.to_string(),
                    format!("{:.2}", weight),
                    format!("{:.2}", result.dimension_score(dimension)),
                ]);
            }
            println!("{table}");
            println!(
                "\n📏 Overall score: {:.2} → level {}",
                result.overall_score, result.maturity_level
            );
            println!("   Responses: {}", result.response_count);
        }
    }
    Ok(())
}
