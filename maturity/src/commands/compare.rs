// maturity/src/commands/compare.rs
//
// USE CASE: Peer comparison (percentiles, gaps, improvement priorities).

use std::path::PathBuf;

use maturity_core::application::{ComparisonVisualization, run_comparison};
use maturity_core::domain::benchmark::MatchQuality;

use crate::cli::OutputFormat;
use crate::commands::{load_project, new_table};

pub fn execute(project_dir: PathBuf, format: OutputFormat) -> anyhow::Result<()> {
    let project = load_project(&project_dir)?;
    let report = run_comparison(&project.config, &project.responses, &project.benchmarks)?;

    if format == OutputFormat::Json {
        let payload = serde_json::json!({
            "comparison": report,
            "visualization": ComparisonVisualization::from_report(&report),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    let peer = &report.peer_group;
    println!(
        "\n👥 Peer group: {} [{}] n={}",
        peer.peer_group_description, peer.match_quality, peer.sample_size
    );
    if peer.match_quality == MatchQuality::NoData {
        println!("   ⚠️  No benchmark data, percentiles default to 50.");
    }

    let mut rankings = new_table(&["Dimension", "Score", "Percentile", "Peer median", "Class"]);
    for (dimension, r) in &report.rankings.dimensions {
        rankings.add_row(vec![
            dimension.clone(),
            format!("{:.2}", r.score),
            format!("{:.1}", r.percentile),
            r.peer_p50.map(|p| format!("{:.1}", p)).unwrap_or_else(|| "-".to_string()),
            r.classification.to_string(),
        ]);
    }
    println!("{rankings}");

    if !report.priorities.is_empty() {
        let mut priorities = new_table(&["#", "Dimension", "Gap", "Severity", "Priority", "Quick win"]);
        for p in &report.priorities {
            priorities.add_row(vec![
                p.rank.to_string(),
                p.dimension.clone(),
                format!("{:.2}", p.gap_size),
                p.severity.to_string(),
                format!("{:.2}", p.priority_score),
                if p.quick_win { "yes" } else { "" }.to_string(),
            ]);
        }
        println!("{priorities}");
    }

    println!(
        "\n📊 Overall percentile: {:.1} ({} strengths, {} weaknesses)",
        report.rankings.overall_percentile,
        report.rankings.strengths.len(),
        report.rankings.weaknesses.len()
    );
    Ok(())
}
