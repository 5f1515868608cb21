//! Main generator struct and public API.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::Result;
use crate::inject::{DefectInjector, InjectorConfig};
use crate::input::{DataTable, Parser, ParserConfig, SourceMetadata};
use crate::normalize::Normalizer;
use crate::output::write_working_csv;
use crate::schema::TransferTable;

/// Default seed for the working dataset committed alongside the raw one.
pub const DEFAULT_SEED: u64 = 42;

/// Configuration for working-dataset generation.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Parser configuration.
    pub parser: ParserConfig,
    /// Injector tunables.
    pub injector: InjectorConfig,
    /// Seed for the defect-injection generator.
    pub seed: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parser: ParserConfig::default(),
            injector: InjectorConfig::default(),
            seed: DEFAULT_SEED,
        }
    }
}

/// What a generation run produced, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Metadata about the raw source file.
    pub source: SourceMetadata,
    /// Shape of the raw table as (rows, columns).
    pub raw_shape: (usize, usize),
    /// Shape of the working table as (rows, columns).
    pub working_shape: (usize, usize),
    /// Absent `transfer_fee_eur` values in the working table.
    pub missing_fee_count: usize,
    /// Absent `market_value_eur` values in the working table.
    pub missing_value_count: usize,
    /// Seed the defects were drawn with.
    pub seed: u64,
    /// Where the working file was written.
    pub output_path: PathBuf,
}

/// The working-dataset generator: parse, normalize, inject, write.
pub struct Generator {
    config: GeneratorConfig,
    parser: Parser,
    normalizer: Normalizer,
    injector: DefectInjector,
}

impl Generator {
    /// Create a generator with default configuration.
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        let parser = Parser::with_config(config.parser.clone());
        let injector = DefectInjector::with_config(config.injector.clone());

        Self {
            config,
            parser,
            normalizer: Normalizer::new(),
            injector,
        }
    }

    /// Generate the working dataset from a raw CSV file and persist it.
    pub fn generate(
        &self,
        raw_path: impl AsRef<Path>,
        output_path: impl AsRef<Path>,
    ) -> Result<GenerationReport> {
        let output_path = output_path.as_ref();

        let (raw, source) = self.parser.parse_file(raw_path)?;
        let working = self.build_working_table(&raw);
        write_working_csv(&working, output_path)?;

        Ok(GenerationReport {
            raw_shape: raw.shape(),
            working_shape: working.shape(),
            missing_fee_count: working.missing_fee_count(),
            missing_value_count: working.missing_value_count(),
            seed: self.config.seed,
            output_path: output_path.to_path_buf(),
            source,
        })
    }

    /// Normalize and corrupt a raw table without touching the filesystem.
    pub fn build_working_table(&self, raw: &DataTable) -> TransferTable {
        let normalized = self.normalizer.normalize(raw);
        self.injector.inject(&normalized, self.config.seed)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}
