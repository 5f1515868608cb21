//! Corruptor: deterministic defect injection into a normalized table.

use chrono::Datelike;

use crate::schema::{FeeBucket, TransferTable, FROM_CLUB_NAME};

use super::sampling::sample_without_replacement;

/// Tunables for defect injection.
///
/// The floors keep the injected defects visible on small datasets; the rates
/// keep them from dominating large ones.
#[derive(Debug, Clone)]
pub struct InjectorConfig {
    /// Minimum number of market values to blank.
    pub missing_value_floor: usize,
    /// Fraction of eligible market values to blank.
    pub missing_value_rate: f64,
    /// Minimum number of club names to blank.
    pub missing_club_floor: usize,
    /// Fraction of eligible club names to blank.
    pub missing_club_rate: f64,
    /// Maximum number of fee outliers to create.
    pub outlier_cap: usize,
    /// Multiplier applied to outlier fees.
    pub outlier_factor: f64,
    /// Maximum number of duplicate rows to append.
    pub duplicate_cap: usize,
}

impl Default for InjectorConfig {
    fn default() -> Self {
        Self {
            missing_value_floor: 30,
            missing_value_rate: 0.01,
            missing_club_floor: 20,
            missing_club_rate: 0.005,
            outlier_cap: 25,
            outlier_factor: 8.0,
            duplicate_cap: 200,
        }
    }
}

/// Injects reproducible data-quality defects into a transfer table.
///
/// Every call constructs its own seeded generator, so identical input and
/// seed always yield an identical output table, independent of call order
/// or anything else in the process. The generator is consumed in a fixed
/// step order; that order is part of the reproducibility contract.
pub struct DefectInjector {
    config: InjectorConfig,
}

impl DefectInjector {
    /// Create an injector with default tunables.
    pub fn new() -> Self {
        Self::with_config(InjectorConfig::default())
    }

    /// Create an injector with custom tunables.
    pub fn with_config(config: InjectorConfig) -> Self {
        Self { config }
    }

    /// Produce the corrupted working table.
    ///
    /// Steps run in a fixed order: derive the year column, compute the
    /// initial missing flags, assign fee buckets, blank market values,
    /// blank club names, scale fee outliers, append duplicate rows,
    /// shuffle, then recompute the missing flags against the injected
    /// state. Buckets are assigned before outlier scaling and keep the
    /// pre-scaling label.
    pub fn inject(&self, table: &TransferTable, seed: u64) -> TransferTable {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut table = table.clone();

        derive_year(&mut table);
        refresh_missing_flags(&mut table);
        assign_buckets(&mut table);

        self.blank_market_values(&mut table, &mut rng);
        self.blank_club_names(&mut table, &mut rng);
        self.scale_fee_outliers(&mut table, &mut rng);
        self.append_duplicates(&mut table, &mut rng);

        rng.shuffle(&mut table.rows);
        refresh_missing_flags(&mut table);

        table
    }

    /// Blank a small sample of present market values.
    fn blank_market_values(&self, table: &mut TransferTable, rng: &mut fastrand::Rng) {
        let eligible: Vec<usize> = table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.market_value_eur.is_some())
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return;
        }

        let count = scaled_count(
            eligible.len(),
            self.config.missing_value_rate,
            self.config.missing_value_floor,
        );
        for idx in sample_without_replacement(rng, &eligible, count) {
            table.rows[idx].market_value_eur = None;
        }
    }

    /// Blank a small sample of present club names, if the source had any.
    fn blank_club_names(&self, table: &mut TransferTable, rng: &mut fastrand::Rng) {
        if !table.has_source_column(FROM_CLUB_NAME) {
            return;
        }

        let eligible: Vec<usize> = table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.from_club_name.is_some())
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return;
        }

        let count = scaled_count(
            eligible.len(),
            self.config.missing_club_rate,
            self.config.missing_club_floor,
        );
        for idx in sample_without_replacement(rng, &eligible, count) {
            table.rows[idx].from_club_name = None;
        }
    }

    /// Multiply a few strictly positive fees into extreme spikes.
    fn scale_fee_outliers(&self, table: &mut TransferTable, rng: &mut fastrand::Rng) {
        let eligible: Vec<usize> = table
            .rows
            .iter()
            .enumerate()
            .filter(|(_, r)| r.transfer_fee_eur.is_some_and(|fee| fee > 0.0))
            .map(|(i, _)| i)
            .collect();
        if eligible.is_empty() {
            return;
        }

        let count = self.config.outlier_cap.min(eligible.len());
        for idx in sample_without_replacement(rng, &eligible, count) {
            if let Some(fee) = table.rows[idx].transfer_fee_eur {
                table.rows[idx].transfer_fee_eur = Some(fee * self.config.outlier_factor);
            }
        }
    }

    /// Append exact copies of a sample of existing rows.
    fn append_duplicates(&self, table: &mut TransferTable, rng: &mut fastrand::Rng) {
        let count = self.config.duplicate_cap.min(table.row_count());
        if count == 0 {
            return;
        }

        let pool: Vec<usize> = (0..table.row_count()).collect();
        let picked = sample_without_replacement(rng, &pool, count);
        let copies: Vec<_> = picked.iter().map(|&i| table.rows[i].clone()).collect();
        table.rows.extend(copies);
    }
}

impl Default for DefectInjector {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample size for a rate with a floor, capped at the eligible count.
fn scaled_count(eligible: usize, rate: f64, floor: usize) -> usize {
    let scaled = (rate * eligible as f64).round() as usize;
    scaled.max(floor).min(eligible)
}

/// Fill `transfer_year` from the parsed date.
fn derive_year(table: &mut TransferTable) {
    for row in &mut table.rows {
        row.transfer_year = row.transfer_date.map(|d| d.year());
    }
}

/// Point the missing flags at the current absence state.
fn refresh_missing_flags(table: &mut TransferTable) {
    for row in &mut table.rows {
        row.fee_missing = row.transfer_fee_eur.is_none();
        row.value_missing = row.market_value_eur.is_none();
    }
}

/// Assign fee buckets from the current fees.
fn assign_buckets(table: &mut TransferTable) {
    for row in &mut table.rows {
        row.fee_bucket = row.transfer_fee_eur.and_then(FeeBucket::from_fee);
    }
}
