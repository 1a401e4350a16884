// maturity/src/commands/plan.rs
//
// USE CASE: Full assessment, roadmap planning and export.

use anyhow::Context;
use chrono::{NaiveDate, Utc};
use std::path::PathBuf;

use maturity_core::application::{AssessmentSources, run_assessment};
use maturity_core::infrastructure::fs::{atomic_write, write_json};

use crate::commands::{load_project, new_table};

pub fn execute(project_dir: PathBuf, start_date: Option<NaiveDate>, mermaid: bool) -> anyhow::Result<()> {
    let start = std::time::Instant::now();
    let mut project = load_project(&project_dir)?;
    if start_date.is_some() {
        project.config.planner.start_date = start_date;
    }

    let sources = AssessmentSources {
        responses: &project.responses,
        benchmarks: &project.benchmarks,
        library: &project.library,
    };
    let now = Utc::now();
    let report = run_assessment(&project.config, &sources, now.date_naive(), now)?;

    // Outputs
    let target_dir = project_dir.join(&project.config.target_path);
    write_json(target_dir.join("roadmap.json"), &report.document)
        .context("Failed to write roadmap.json")?;
    write_json(target_dir.join("gantt.json"), &report.gantt).context("Failed to write gantt.json")?;
    let chart = report.roadmap.to_mermaid(&project.config.name);
    atomic_write(target_dir.join("roadmap.mmd"), &chart).context("Failed to write roadmap.mmd")?;

    let summary = &report.document.summary;
    if summary.total_actions == 0 {
        println!("\n✅ No gap to close: the roadmap is empty.");
    } else {
        let mut table = new_table(&["Dimension", "Actions", "Effort (weeks)", "Avg impact"]);
        for (dimension, s) in &summary.dimension_summary {
            table.add_row(vec![
                dimension.clone(),
                s.action_count.to_string(),
                format!("{:.1}", s.total_effort_weeks),
                format!("{:.1}", s.avg_impact_score),
            ]);
        }
        println!("{table}");
        println!(
            "\n🗺️  {} actions over {:.1} weeks ({} → {}), {} milestones",
            summary.total_actions,
            summary.total_duration_weeks,
            summary.start_date,
            summary.projected_end_date,
            summary.milestone_count
        );
        println!("   Estimated cost: ${:.0}", summary.estimation.total_cost_usd);
    }

    for warning in &report.document.dependency_warnings {
        eprintln!("   ⚠️  {}", warning.message);
    }

    if mermaid {
        println!("\n```mermaid");
        println!("{}", chart);
        println!("```\n");
    }

    println!("📄 Exports written to {}", target_dir.display());
    println!("✨ Done in {:.2?}", start.elapsed());
    Ok(())
}
