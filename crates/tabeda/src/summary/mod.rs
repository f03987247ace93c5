//! Per-column descriptive summaries and the missingness table.

mod column;
mod missing;

pub use column::{summarize_dataset, ColumnSummary, DatasetSummary, DtypeKind, NumericSummary};
pub use missing::{missing_table, MissingEntry, MissingTable};
