//! Loader/Normalizer: raw string table to typed transfer table.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::DataTable;
use crate::schema::{
    TransferRow, TransferTable, FROM_CLUB_NAME, MARKET_VALUE_RAW, TRANSFER_DATE, TRANSFER_FEE_RAW,
};

// Date patterns compiled once on first use, each paired with the chrono
// format that parses the matched prefix.
static DATE_FORMATS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"^\d{4}-\d{2}-\d{2}").unwrap(), "%Y-%m-%d"), // ISO, optional time suffix
        (Regex::new(r"^\d{2}/\d{2}/\d{4}").unwrap(), "%m/%d/%Y"), // US date
        (Regex::new(r"^\d{2}-\d{2}-\d{4}").unwrap(), "%d-%m-%Y"), // European date
        (Regex::new(r"^\d{4}/\d{2}/\d{2}").unwrap(), "%Y/%m/%d"), // Alt ISO
    ]
});

/// Turns a parsed raw table into a typed [`TransferTable`].
///
/// Deterministic and infallible: values that cannot be parsed become absent,
/// and columns missing from the source simply stay absent downstream.
pub struct Normalizer;

impl Normalizer {
    /// Create a new normalizer.
    pub fn new() -> Self {
        Self
    }

    /// Normalize a raw table.
    pub fn normalize(&self, raw: &DataTable) -> TransferTable {
        let date_idx = raw.column_index(TRANSFER_DATE);
        let fee_idx = raw.column_index(TRANSFER_FEE_RAW);
        let value_idx = raw.column_index(MARKET_VALUE_RAW);
        let club_idx = raw.column_index(FROM_CLUB_NAME);

        let mut rows = Vec::with_capacity(raw.row_count());
        for raw_row in &raw.rows {
            let mut row = TransferRow::new();

            if let Some(i) = date_idx {
                row.transfer_date = parse_date(&raw_row[i]);
            }
            if let Some(i) = fee_idx {
                row.transfer_fee_eur = parse_number(&raw_row[i]);
            }
            if let Some(i) = value_idx {
                row.market_value_eur = parse_number(&raw_row[i]);
            }
            if let Some(i) = club_idx {
                let value = raw_row[i].trim();
                if !DataTable::is_null_value(value) {
                    row.from_club_name = Some(value.to_string());
                }
            }

            // Carry every other source column through untouched. The raw
            // fee and market value text stays next to its numeric twin.
            for (col, header) in raw.headers.iter().enumerate() {
                if Some(col) == date_idx || Some(col) == club_idx {
                    continue;
                }
                row.extra.insert(header.clone(), raw_row[col].clone());
            }

            rows.push(row);
        }

        let mut table = TransferTable::new(raw.headers.clone(), rows);
        scrub_negatives(&mut table);
        table
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a raw date cell. Unparseable text is absent, never an error.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if DataTable::is_null_value(trimmed) {
        return None;
    }

    for (pattern, format) in DATE_FORMATS.iter() {
        if let Some(m) = pattern.find(trimmed) {
            if let Ok(date) = NaiveDate::parse_from_str(m.as_str(), format) {
                return Some(date);
            }
        }
    }

    None
}

/// Parse a raw numeric cell. Non-numeric or non-finite text is absent.
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if DataTable::is_null_value(trimmed) {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Negative fees and market values are invalid; they become absent, never
/// zero. The source should not contain any, but the raw dump is not trusted.
fn scrub_negatives(table: &mut TransferTable) {
    for row in &mut table.rows {
        if row.transfer_fee_eur.is_some_and(|v| v < 0.0) {
            row.transfer_fee_eur = None;
        }
        if row.market_value_eur.is_some_and(|v| v < 0.0) {
            row.market_value_eur = None;
        }
    }
}
