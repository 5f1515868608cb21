//! Tarnish: reproducible data-quality defect injection for tabular datasets.
//!
//! Tarnish takes a clean "raw" CSV and derives a "working" copy with
//! controlled, seeded corruption (missing values, duplicate rows, fee
//! outliers) plus derived and bucketed columns, so a data-cleaning exercise
//! has something realistic to fix.
//!
//! # Core Principles
//!
//! - **Reproducible**: every random choice comes from a generator seeded per
//!   call; the same raw file and seed always produce the same working file
//! - **Lenient on input**: unparseable dates and non-numeric fees become
//!   absent values, never errors
//! - **Pure core**: the pipeline is table-in, table-out; file I/O sits at
//!   the edges
//!
//! # Example
//!
//! ```no_run
//! use tarnish::Generator;
//!
//! let generator = Generator::new();
//! let report = generator
//!     .generate("data/transfers_raw.csv", "data/transfers_working.csv")
//!     .unwrap();
//!
//! println!("Raw shape: {:?}", report.raw_shape);
//! println!("Working shape: {:?}", report.working_shape);
//! ```

pub mod error;
pub mod generator;
pub mod inject;
pub mod input;
pub mod normalize;
pub mod output;
pub mod schema;

pub use error::{Result, TarnishError};
pub use generator::{GenerationReport, Generator, GeneratorConfig, DEFAULT_SEED};
pub use inject::{DefectInjector, InjectorConfig};
pub use input::{DataTable, Parser, ParserConfig, SourceMetadata};
pub use normalize::Normalizer;
pub use output::write_working_csv;
pub use schema::{FeeBucket, TransferRow, TransferTable};
