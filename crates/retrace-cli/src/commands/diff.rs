//! Snapshot diff command

use clap::{Args, ValueEnum};
use retrace_core::{compute_semantic_diff, render_change_report};
use retrace_history::compute_raw_diff;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct DiffArgs {
    /// Older snapshot file (JSON)
    pub old: PathBuf,

    /// Newer snapshot file (JSON)
    pub new: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered change report
    Text,
    /// Structured semantic change list
    Json,
}

pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let old = load_snapshot(&args.old)?;
    let new = load_snapshot(&args.new)?;

    let raw = compute_raw_diff(&old, &new);
    let changes = compute_semantic_diff(&raw, &old, &new);

    match args.format {
        OutputFormat::Text => print!("{}", render_change_report(&changes)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&changes)?),
    }

    Ok(())
}

fn load_snapshot(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
    let value = serde_json::from_str(&text)
        .map_err(|e| format!("{} is not valid JSON: {}", path.display(), e))?;
    Ok(value)
}
