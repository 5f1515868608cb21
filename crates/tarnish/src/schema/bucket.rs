//! Fee discretization into fixed, labeled buckets.

use serde::{Deserialize, Serialize};

/// Upper bin edges for fee discretization, in EUR.
///
/// The implied intervals are `[0, 1m]`, `(1m, 5m]`, `(5m, 20m]`,
/// `(20m, 100m]` and `(100m, inf)`: right-inclusive, with the lowest
/// edge also inclusive so a zero fee lands in the first bucket.
pub const FEE_BUCKET_EDGES: [f64; 4] = [1_000_000.0, 5_000_000.0, 20_000_000.0, 100_000_000.0];

/// Categorical fee bucket derived from `transfer_fee_eur`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeeBucket {
    #[serde(rename = "<=1m")]
    AtMost1M,
    #[serde(rename = "1-5m")]
    From1To5M,
    #[serde(rename = "5-20m")]
    From5To20M,
    #[serde(rename = "20-100m")]
    From20To100M,
    #[serde(rename = ">100m")]
    Above100M,
}

impl FeeBucket {
    /// Classify a fee into its bucket.
    ///
    /// Returns `None` for non-finite or negative fees; absent fees have no
    /// bucket at all, which the caller models with `Option<FeeBucket>`.
    pub fn from_fee(fee_eur: f64) -> Option<Self> {
        if !fee_eur.is_finite() || fee_eur < 0.0 {
            return None;
        }

        let [edge_1m, edge_5m, edge_20m, edge_100m] = FEE_BUCKET_EDGES;
        Some(if fee_eur <= edge_1m {
            FeeBucket::AtMost1M
        } else if fee_eur <= edge_5m {
            FeeBucket::From1To5M
        } else if fee_eur <= edge_20m {
            FeeBucket::From5To20M
        } else if fee_eur <= edge_100m {
            FeeBucket::From20To100M
        } else {
            FeeBucket::Above100M
        })
    }

    /// The label used in serialized output.
    pub fn label(&self) -> &'static str {
        match self {
            FeeBucket::AtMost1M => "<=1m",
            FeeBucket::From1To5M => "1-5m",
            FeeBucket::From5To20M => "5-20m",
            FeeBucket::From20To100M => "20-100m",
            FeeBucket::Above100M => ">100m",
        }
    }
}

impl std::fmt::Display for FeeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
