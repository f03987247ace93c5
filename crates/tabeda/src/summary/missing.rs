//! Missingness table: per-column missing counts and shares.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// Missingness statistics for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MissingEntry {
    /// Count of missing-marker values.
    pub missing_count: usize,
    /// `missing_count / n_rows`, 0 when the table has no rows.
    pub missing_share: f64,
}

/// Per-column missingness, keyed by column name in table order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MissingTable(IndexMap<String, MissingEntry>);

impl MissingTable {
    /// Look up the entry for a column.
    pub fn get(&self, column: &str) -> Option<&MissingEntry> {
        self.0.get(column)
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &MissingEntry)> {
        self.0.iter()
    }

    /// Number of columns tracked.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the table had zero columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The maximum missing share across all columns (0 when empty).
    pub fn max_missing_share(&self) -> f64 {
        self.0
            .values()
            .map(|e| e.missing_share)
            .fold(0.0, f64::max)
    }

    /// Column names whose missing share is at least `threshold`.
    pub fn columns_above(&self, threshold: f64) -> Vec<&str> {
        self.0
            .iter()
            .filter(|(_, e)| e.missing_share >= threshold)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// Compute the missingness table for a dataset.
///
/// Empty if the table has zero columns. Missing counts here always agree
/// with [`summarize_dataset`](super::summarize_dataset) for the same input:
/// both count [`DataTable::is_missing_value`] markers per column.
pub fn missing_table(table: &DataTable) -> MissingTable {
    let n_rows = table.row_count();
    let mut entries = IndexMap::with_capacity(table.column_count());

    for (idx, name) in table.headers.iter().enumerate() {
        let missing_count = table
            .column_values(idx)
            .filter(|v| DataTable::is_missing_value(v))
            .count();
        let missing_share = if n_rows == 0 {
            0.0
        } else {
            missing_count as f64 / n_rows as f64
        };
        entries.insert(
            name.clone(),
            MissingEntry {
                missing_count,
                missing_share,
            },
        );
    }

    MissingTable(entries)
}
