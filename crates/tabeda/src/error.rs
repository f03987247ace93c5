//! Error types for the tabeda library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tabeda operations.
///
/// All variants describe input-side failures (reading, decoding, parsing).
/// Summarization and quality flagging are total functions and never fail.
#[derive(Debug, Error)]
pub enum TabedaError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The requested text encoding label is not recognized.
    #[error("Unknown encoding: {0}")]
    UnknownEncoding(String),

    /// The input bytes are not valid in the requested encoding.
    #[error("Could not decode input as {0}")]
    Decode(String),

    /// Invalid delimiter detected or specified.
    #[error("Invalid delimiter: {0}")]
    InvalidDelimiter(String),

    /// No columns or no parseable content at all.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tabeda operations.
pub type Result<T> = std::result::Result<T, TabedaError>;
