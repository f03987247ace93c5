//! Analyzer: the explicitly constructed service that ties reading,
//! summarizing, and quality flagging together.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::input::{CsvReader, DataTable, ReaderConfig, SourceMetadata};
use crate::quality::{compute_quality_flags, QualityFlags};
use crate::summary::{missing_table, summarize_dataset, DatasetSummary, MissingTable};

/// Configuration for an [`Analyzer`].
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Reader configuration (delimiter, encoding, header handling).
    pub reader: ReaderConfig,
}

/// Summary, missingness, and quality flags for one dataset.
///
/// All parts are computed in a single pass over the same table, so the
/// summary/missing-table pair always satisfies the engine's contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    pub summary: DatasetSummary,
    pub missing: MissingTable,
    pub flags: QualityFlags,
}

/// An [`Analysis`] together with source file provenance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub source: SourceMetadata,
    #[serde(flatten)]
    pub analysis: Analysis,
}

/// Stateless analysis service. Safe to share across threads; every call
/// is independent and side-effect-free.
pub struct Analyzer {
    reader: CsvReader,
}

impl Analyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self::with_config(AnalyzerConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: AnalyzerConfig) -> Self {
        Self {
            reader: CsvReader::with_config(config.reader),
        }
    }

    /// Read a dataset from disk.
    pub fn read_table(&self, path: impl AsRef<Path>) -> Result<(DataTable, SourceMetadata)> {
        self.reader.read_path(path)
    }

    /// Read a dataset from raw bytes (e.g. an HTTP upload).
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<DataTable> {
        self.reader.read_bytes(bytes)
    }

    /// Summarize a table and apply the quality heuristics.
    pub fn analyze_table(&self, table: &DataTable) -> Analysis {
        let summary = summarize_dataset(table);
        let missing = missing_table(table);
        let flags = compute_quality_flags(&summary, &missing);

        Analysis {
            summary,
            missing,
            flags,
        }
    }

    /// Read raw bytes and analyze them.
    pub fn analyze_bytes(&self, bytes: &[u8]) -> Result<Analysis> {
        let table = self.read_bytes(bytes)?;
        Ok(self.analyze_table(&table))
    }

    /// Read a file and analyze it, with source provenance attached.
    pub fn analyze_path(&self, path: impl AsRef<Path>) -> Result<AnalysisReport> {
        let (table, source) = self.read_table(path)?;
        let analysis = self.analyze_table(&table);

        Ok(AnalysisReport { source, analysis })
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_analyze_path() {
        let file = create_test_file("age,city\n10,A\n20,B\n30,A\n");
        let analyzer = Analyzer::new();
        let report = analyzer.analyze_path(file.path()).unwrap();

        assert_eq!(report.source.row_count, 3);
        assert_eq!(report.source.column_count, 2);
        assert_eq!(report.source.format, "csv");
        assert!(report.source.hash.starts_with("sha256:"));
        assert_eq!(report.analysis.summary.n_rows, 3);
        assert!((0.0..=1.0).contains(&report.analysis.flags.quality_score));
    }

    #[test]
    fn test_analyze_bytes_matches_table() {
        let analyzer = Analyzer::new();
        let analysis = analyzer.analyze_bytes(b"a,b\n1,x\n2,y\n").unwrap();
        assert_eq!(analysis.summary.n_cols, 2);
        assert_eq!(analysis.missing.len(), 2);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let analyzer = Analyzer::new();
        let err = analyzer.analyze_path("/no/such/file.csv").unwrap_err();
        assert!(matches!(err, crate::TabedaError::Io { .. }));
    }
}
