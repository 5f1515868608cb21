//! CSV persistence for the working table.

use std::fs;
use std::path::Path;

use crate::error::{Result, TarnishError};
use crate::schema::{TransferRow, TransferTable, FROM_CLUB_NAME, TRANSFER_DATE};

/// Write the working table as a CSV file with a header row.
///
/// The destination's parent directory is created if it does not exist.
/// Column order is the table's fixed header order; absent values are
/// written as empty fields.
pub fn write_working_csv(table: &TransferTable, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TarnishError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }

    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(table.headers())?;

    let has_date = table.has_source_column(TRANSFER_DATE);
    for row in &table.rows {
        writer.write_record(render_row(table, row, has_date))?;
    }

    writer.flush().map_err(|e| TarnishError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Render one row in header order.
fn render_row(table: &TransferTable, row: &TransferRow, has_date: bool) -> Vec<String> {
    let mut record: Vec<String> = table
        .source_columns
        .iter()
        .map(|name| render_source_cell(row, name))
        .collect();

    record.push(render_number(row.transfer_fee_eur));
    record.push(render_number(row.market_value_eur));
    if has_date {
        record.push(row.transfer_year.map(|y| y.to_string()).unwrap_or_default());
    }
    record.push(row.fee_missing.to_string());
    record.push(row.value_missing.to_string());
    record.push(
        row.fee_bucket
            .map(|b| b.label().to_string())
            .unwrap_or_default(),
    );

    record
}

/// Render a source-column cell: typed-in-place columns from their typed
/// fields, everything else from the passthrough set.
fn render_source_cell(row: &TransferRow, name: &str) -> String {
    match name {
        TRANSFER_DATE => row
            .transfer_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        FROM_CLUB_NAME => row.from_club_name.clone().unwrap_or_default(),
        _ => row.extra.get(name).cloned().unwrap_or_default(),
    }
}

fn render_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
