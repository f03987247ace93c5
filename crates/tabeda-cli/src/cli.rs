//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// tabeda: EDA summaries and data-quality heuristics for CSV datasets
#[derive(Parser)]
#[command(name = "tabeda")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print dataset shape and a per-column summary table
    Overview {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Field separator (single character; "\t" or "tab" for tabs)
        #[arg(long, default_value = ",")]
        sep: String,

        /// Text encoding of the file
        #[arg(long, default_value = "utf-8")]
        encoding: String,
    },

    /// Generate a full EDA report (tables, markdown, charts)
    Report {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output directory for report artifacts
        #[arg(long, default_value = "reports")]
        out_dir: PathBuf,

        /// Field separator (single character; "\t" or "tab" for tabs)
        #[arg(long, default_value = ",")]
        sep: String,

        /// Text encoding of the file
        #[arg(long, default_value = "utf-8")]
        encoding: String,

        /// Maximum numeric columns to draw histograms for
        #[arg(long, default_value_t = 6)]
        max_hist_columns: usize,

        /// How many top categories to keep per categorical column
        #[arg(long, default_value_t = 10)]
        top_k_categories: usize,

        /// Report title
        #[arg(long, default_value = "EDA Report")]
        title: String,

        /// Missing share at which a column is listed as problematic
        #[arg(long, default_value_t = 0.5)]
        min_missing_share: f64,
    },

    /// Run the HTTP quality API
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, default_value_t = 8000)]
        port: u16,
    },
}

/// Parse a `--sep` argument into a single-byte delimiter.
pub fn parse_delimiter(sep: &str) -> Result<u8, String> {
    match sep {
        "\\t" | "\t" | "tab" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        s => Err(format!(
            "Invalid separator '{}': expected a single ASCII character",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("").is_err());
    }
}
