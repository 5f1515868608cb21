//! Inspect command - shape and per-column null counts of a CSV file.

use std::path::PathBuf;

use colored::Colorize;
use tarnish::Parser;

pub fn run(file: PathBuf, json: bool, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let (table, metadata) = Parser::new().parse_file(&file)?;

    if json {
        let null_counts: serde_json::Map<String, serde_json::Value> = table
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), serde_json::Value::from(table.null_count(i))))
            .collect();
        let summary = serde_json::json!({
            "file": metadata.file,
            "hash": metadata.hash,
            "rows": table.row_count(),
            "columns": table.column_count(),
            "null_counts": null_counts,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!(
        "{} {} shape=({}, {})",
        "File:".cyan().bold(),
        metadata.file,
        table.row_count(),
        table.column_count()
    );

    println!("{}", "Null counts:".cyan().bold());
    for (i, header) in table.headers.iter().enumerate() {
        let nulls = table.null_count(i);
        if nulls > 0 {
            println!("  {:<28} {}", header, nulls.to_string().yellow());
        } else {
            println!("  {:<28} {}", header, nulls);
        }
    }

    if verbose {
        println!();
        println!("Size: {} bytes", metadata.size_bytes);
        println!("Hash: {}", metadata.hash);
    }

    Ok(())
}
