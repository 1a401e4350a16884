// maturity/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "maturity")]
#[command(about = "Operational maturity scoring, peer benchmarking and roadmap planning", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 📏 Scores the recorded responses (per dimension + overall level)
    Score {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 📊 Compares the scores against the best matching peer group
    Compare {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 🗺️  Runs the full assessment and writes the roadmap exports
    Plan {
        /// Project directory
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Kick-off date (YYYY-MM-DD). Defaults to the planner config, then today.
        #[arg(long)]
        start_date: Option<NaiveDate>,

        /// Also print the Mermaid gantt chart
        #[arg(long)]
        mermaid: bool,
    },

    /// ✅ Checks the project configuration (weights, tables, benchmarks)
    Validate {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },

    /// 🧹 Cleans generated artifacts (target/ folder)
    Clean {
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
}
