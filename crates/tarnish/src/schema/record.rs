//! A single typed row of the transfer table.

use chrono::NaiveDate;
use indexmap::IndexMap;

use super::bucket::FeeBucket;

/// One transfer, with the columns the pipeline operates on parsed into
/// typed fields and everything else carried through as raw text.
///
/// `None` means the value is absent (missing in the source, unparseable,
/// or nulled during defect injection). Absence is never encoded as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRow {
    /// Parsed transfer date; absent if unparseable.
    pub transfer_date: Option<NaiveDate>,
    /// Selling club name, passed through from the source.
    pub from_club_name: Option<String>,
    /// Numeric transfer fee in EUR, never negative.
    pub transfer_fee_eur: Option<f64>,
    /// Numeric market value in EUR, never negative.
    pub market_value_eur: Option<f64>,
    /// Year component of `transfer_date`.
    pub transfer_year: Option<i32>,
    /// Whether `transfer_fee_eur` is absent.
    pub fee_missing: bool,
    /// Whether `market_value_eur` is absent.
    pub value_missing: bool,
    /// Fee bucket, absent iff the fee was absent when buckets were assigned.
    pub fee_bucket: Option<FeeBucket>,
    /// All other source columns, untouched, keyed by header name in
    /// original column order.
    pub extra: IndexMap<String, String>,
}

impl TransferRow {
    /// Create an empty row with no values set.
    pub fn new() -> Self {
        Self {
            transfer_date: None,
            from_club_name: None,
            transfer_fee_eur: None,
            market_value_eur: None,
            transfer_year: None,
            fee_missing: false,
            value_missing: false,
            fee_bucket: None,
            extra: IndexMap::new(),
        }
    }
}

impl Default for TransferRow {
    fn default() -> Self {
        Self::new()
    }
}
