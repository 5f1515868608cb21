//! Typed transfer table: the value passed between pipeline stages.

use super::record::TransferRow;

/// Source column holding the raw transfer date.
pub const TRANSFER_DATE: &str = "transfer_date";
/// Source column holding the raw transfer fee.
pub const TRANSFER_FEE_RAW: &str = "transfer_fee";
/// Source column holding the raw market value.
pub const MARKET_VALUE_RAW: &str = "market_value_in_eur";
/// Source column holding the selling club name.
pub const FROM_CLUB_NAME: &str = "from_club_name";
/// Derived numeric fee column.
pub const TRANSFER_FEE_EUR: &str = "transfer_fee_eur";
/// Derived numeric market value column.
pub const MARKET_VALUE_EUR: &str = "market_value_eur";
/// Derived year column.
pub const TRANSFER_YEAR: &str = "transfer_year";
/// Derived fee-absence indicator column.
pub const FEE_MISSING: &str = "fee_missing";
/// Derived value-absence indicator column.
pub const VALUE_MISSING: &str = "value_missing";
/// Derived fee bucket column.
pub const FEE_BUCKET: &str = "fee_bucket";

/// An ordered sequence of typed transfer rows.
///
/// Each pipeline stage consumes a table and produces a new one; the table is
/// a plain value with no I/O attached.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferTable {
    /// Column names of the raw source, in their original order.
    pub source_columns: Vec<String>,
    /// The rows, in order. Order is meaningful: the corruptor shuffles it.
    pub rows: Vec<TransferRow>,
}

impl TransferTable {
    /// Create a table from source headers and rows.
    pub fn new(source_columns: Vec<String>, rows: Vec<TransferRow>) -> Self {
        Self {
            source_columns,
            rows,
        }
    }

    /// Whether the raw source had a column with this name.
    pub fn has_source_column(&self, name: &str) -> bool {
        self.source_columns.iter().any(|c| c == name)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Output header row: source columns first, then the derived columns in
    /// the order they are created by the pipeline. `transfer_year` only
    /// exists when the source carried a date column to derive it from.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = self.source_columns.clone();
        headers.push(TRANSFER_FEE_EUR.to_string());
        headers.push(MARKET_VALUE_EUR.to_string());
        if self.has_source_column(TRANSFER_DATE) {
            headers.push(TRANSFER_YEAR.to_string());
        }
        headers.push(FEE_MISSING.to_string());
        headers.push(VALUE_MISSING.to_string());
        headers.push(FEE_BUCKET.to_string());
        headers
    }

    /// Shape as (rows, columns), counting derived columns.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.headers().len())
    }

    /// Count rows with an absent `transfer_fee_eur`.
    pub fn missing_fee_count(&self) -> usize {
        self.rows.iter().filter(|r| r.transfer_fee_eur.is_none()).count()
    }

    /// Count rows with an absent `market_value_eur`.
    pub fn missing_value_count(&self) -> usize {
        self.rows.iter().filter(|r| r.market_value_eur.is_none()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_without_date_column() {
        let table = TransferTable::new(vec!["player_name".to_string()], Vec::new());
        let headers = table.headers();

        assert!(!headers.contains(&TRANSFER_YEAR.to_string()));
        assert_eq!(
            headers,
            vec![
                "player_name",
                TRANSFER_FEE_EUR,
                MARKET_VALUE_EUR,
                FEE_MISSING,
                VALUE_MISSING,
                FEE_BUCKET
            ]
        );
    }

    #[test]
    fn test_headers_with_date_column() {
        let table = TransferTable::new(
            vec!["player_name".to_string(), TRANSFER_DATE.to_string()],
            Vec::new(),
        );
        let headers = table.headers();

        let year_pos = headers.iter().position(|h| h == TRANSFER_YEAR).unwrap();
        let value_pos = headers.iter().position(|h| h == MARKET_VALUE_EUR).unwrap();
        assert!(year_pos > value_pos);
        assert_eq!(table.shape(), (0, 8));
    }

    #[test]
    fn test_missing_counts() {
        let mut with_fee = TransferRow::new();
        with_fee.transfer_fee_eur = Some(1000.0);
        let empty = TransferRow::new();

        let table = TransferTable::new(Vec::new(), vec![with_fee, empty]);

        assert_eq!(table.missing_fee_count(), 1);
        assert_eq!(table.missing_value_count(), 2);
    }
}
