//! tabeda: EDA summaries and heuristic data-quality flags for tabular
//! (CSV) datasets.
//!
//! The core is the quality-heuristics engine in [`quality`]: a fixed set
//! of statistical rules over a per-column summary and a missingness table,
//! aggregated into boolean flags and a scalar score in `[0, 1]`. Everything
//! else (CSV loading, descriptive helpers) is supporting glue around it.
//!
//! # Design
//!
//! - All results are fixed-schema values built in one analysis pass and
//!   owned by the caller; nothing is shared or mutated afterwards.
//! - The engine is a total function: malformed-but-well-typed input yields
//!   flags, never errors. Input validation happens in [`input`] before the
//!   engine is reached.
//! - The library performs no logging; adapters decide what to report.
//!
//! # Example
//!
//! ```no_run
//! use tabeda::Analyzer;
//!
//! let analyzer = Analyzer::new();
//! let report = analyzer.analyze_path("data.csv").unwrap();
//!
//! println!("rows: {}", report.analysis.summary.n_rows);
//! println!("score: {:.2}", report.analysis.flags.quality_score);
//! ```

pub mod describe;
pub mod error;
pub mod input;
pub mod quality;
pub mod summary;

mod analyzer;

pub use analyzer::{Analysis, AnalysisReport, Analyzer, AnalyzerConfig};
pub use describe::{correlation_matrix, top_categories, CorrelationMatrix, TopCategories};
pub use error::{Result, TabedaError};
pub use input::{CsvReader, DataTable, ReaderConfig, SourceMetadata};
pub use quality::{compute_quality_flags, shape_quality, QualityFlags, ShapeQuality};
pub use summary::{
    missing_table, summarize_dataset, ColumnSummary, DatasetSummary, DtypeKind, MissingTable,
    NumericSummary,
};
