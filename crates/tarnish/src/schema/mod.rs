//! Typed table model for the transfer dataset.

mod bucket;
mod record;
mod table;

pub use bucket::{FeeBucket, FEE_BUCKET_EDGES};
pub use record::TransferRow;
pub use table::{
    TransferTable, FEE_BUCKET, FEE_MISSING, FROM_CLUB_NAME, MARKET_VALUE_EUR, MARKET_VALUE_RAW,
    TRANSFER_DATE, TRANSFER_FEE_EUR, TRANSFER_FEE_RAW, TRANSFER_YEAR, VALUE_MISSING,
};
