//! Command-line entry point for pitchscan.
//!
//! Usage:
//!   cargo run -- scan --input sample_data.csv
//!   cargo run -- scan --input sample_data.csv --output annotated.csv --quiet
//!   cargo run -- terms

use anyhow::Result;
use clap::{Parser, Subcommand};
use pitchscan::config::Config;
use pitchscan::tactics::TacticDetector;
use pitchscan::{ingest, report};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "pitchscan")]
#[command(about = "Marketing tactic scanner for statement CSVs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a statement CSV and write an annotated copy
    Scan {
        /// Input CSV file
        #[arg(long)]
        input: PathBuf,
        /// Output path; defaults to the input stem plus the configured suffix
        #[arg(long)]
        output: Option<PathBuf>,
        /// Statement column name override
        #[arg(long)]
        column: Option<String>,
        /// Suppress per-statement hit lines
        #[arg(long)]
        quiet: bool,
        /// Print the summary as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Print the compiled-in tactic dictionaries
    Terms,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("PITCH_LOG").unwrap_or_else(|_| "pitchscan=info".to_string()))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            input,
            output,
            column,
            quiet,
            json,
        } => scan(input, output, column, quiet, json),
        Commands::Terms => terms(),
    }
}

fn scan(
    input: PathBuf,
    output: Option<PathBuf>,
    column: Option<String>,
    quiet: bool,
    json: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(column) = column {
        config.scan.statement_column = column;
    }

    let outcome = ingest::scan_file(&input, &config)?;
    let out_path = output.unwrap_or_else(|| annotated_path(&input, &config.scan.output_suffix));
    ingest::tabular::write_annotated(&out_path, &outcome)?;

    if !quiet && config.runtime.report_hits {
        report::print_hits(&outcome);
    }
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.stats)?);
    } else {
        report::summary_table(&outcome.stats).printstd();
    }
    info!("annotated output written to {}", out_path.display());
    Ok(())
}

fn annotated_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}{suffix}.csv"))
}

fn terms() -> Result<()> {
    let detector = TacticDetector::new();
    for category in detector.categories() {
        println!("{} ({} terms):", category.name, category.terms().len());
        for term in category.terms() {
            println!("  {term}");
        }
    }
    Ok(())
}
