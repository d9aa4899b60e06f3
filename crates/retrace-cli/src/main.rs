//! Retrace CLI
//!
//! Command-line interface for comparing document snapshots

use clap::{Parser, Subcommand};
use retrace_core::logging::{init, profile_from_env};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "retrace")]
#[command(about = "Retrace - Semantic version-history diffing", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Compare two snapshot files and report the changes
    Diff(commands::diff::DiffArgs),
}

fn main() {
    init(profile_from_env());

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
