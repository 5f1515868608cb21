//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tarnish: reproducible defect injection for tabular datasets
#[derive(Parser)]
#[command(name = "tarnish")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the corrupted working dataset from a raw CSV
    Generate {
        /// Path to the raw CSV file
        #[arg(value_name = "RAW_FILE")]
        file: PathBuf,

        /// Output path for the working CSV (default: <stem>_working.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the defect-injection generator
        #[arg(long, default_value_t = tarnish::DEFAULT_SEED)]
        seed: u64,

        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the shape and per-column null counts of a CSV file
    Inspect {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
