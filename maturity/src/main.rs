// maturity/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            project_dir,
            format,
        } => commands::score::execute(project_dir, format),
        Commands::Compare {
            project_dir,
            format,
        } => commands::compare::execute(project_dir, format),
        Commands::Plan {
            project_dir,
            start_date,
            mermaid,
        } => commands::plan::execute(project_dir, start_date, mermaid),
        Commands::Validate { project_dir } => commands::validate::execute(project_dir),
        Commands::Clean { project_dir } => commands::clean::execute(project_dir),
    }
}
