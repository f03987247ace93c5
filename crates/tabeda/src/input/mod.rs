//! Dataset input: CSV/TSV reading, decoding, and the in-memory table.

mod reader;
mod source;

pub use reader::{CsvReader, ReaderConfig};
pub use source::{DataTable, SourceMetadata};
