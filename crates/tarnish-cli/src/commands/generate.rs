//! Generate command - derive the working dataset from the raw CSV.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tarnish::{Generator, GeneratorConfig};

pub fn run(
    file: PathBuf,
    output: Option<PathBuf>,
    seed: u64,
    json: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = output.unwrap_or_else(|| default_output_path(&file));

    let config = GeneratorConfig {
        seed,
        ..GeneratorConfig::default()
    };
    let report = Generator::with_config(config).generate(&file, &output_path)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} shape=({}, {})",
        "Raw transfers:".cyan().bold(),
        report.source.path.display(),
        report.raw_shape.0,
        report.raw_shape.1
    );
    println!(
        "{} {} shape=({}, {})",
        "Working transfers:".cyan().bold(),
        report.output_path.display(),
        report.working_shape.0,
        report.working_shape.1
    );
    println!("{}", "Missing counts (working):".cyan().bold());
    println!(
        "  transfer_fee_eur   {}",
        report.missing_fee_count.to_string().yellow()
    );
    println!(
        "  market_value_eur   {}",
        report.missing_value_count.to_string().yellow()
    );

    if verbose {
        println!();
        println!("Seed: {}", report.seed);
        println!("Source hash: {}", report.source.hash);
    }

    Ok(())
}

/// `transfers_raw.csv` becomes `transfers_working.csv`; any other name just
/// gets the `_working` suffix.
fn default_output_path(raw: &Path) -> PathBuf {
    let stem = raw.file_stem().unwrap_or_default().to_string_lossy();
    let base = stem.strip_suffix("_raw").unwrap_or(&stem);
    raw.with_file_name(format!("{}_working.csv", base))
}
