//! CLI command implementations.

pub mod overview;
pub mod report;
pub mod serve;

use tabeda::{Analyzer, AnalyzerConfig, ReaderConfig};

use crate::cli::parse_delimiter;

/// Build an analyzer from the shared `--sep`/`--encoding` flags.
pub fn build_analyzer(sep: &str, encoding: &str) -> Result<Analyzer, Box<dyn std::error::Error>> {
    let delimiter = parse_delimiter(sep)?;

    Ok(Analyzer::with_config(AnalyzerConfig {
        reader: ReaderConfig {
            delimiter: Some(delimiter),
            encoding: encoding.to_string(),
            ..ReaderConfig::default()
        },
    }))
}
