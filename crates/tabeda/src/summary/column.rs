//! Column summarizer: per-column type classification and basic statistics.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::input::DataTable;

/// Broad type classification for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DtypeKind {
    /// Every non-missing value parses as a number.
    Numeric,
    /// At least one non-missing value is not numeric.
    Categorical,
    /// No non-missing values to classify.
    Other,
}

impl DtypeKind {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            DtypeKind::Numeric => "numeric",
            DtypeKind::Categorical => "categorical",
            DtypeKind::Other => "other",
        }
    }
}

impl std::fmt::Display for DtypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Basic statistics over the non-missing values of a numeric column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericSummary {
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    /// Count of exactly-zero values; feeds the mostly-zero quality rule.
    pub zero_count: usize,
}

/// Summary of a single column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSummary {
    /// Column name (unique within a dataset).
    pub name: String,
    /// Type classification.
    pub dtype: DtypeKind,
    /// Count of missing-marker values.
    pub missing_count: usize,
    /// Count of distinct non-missing values.
    pub unique_count: usize,
    /// Numeric statistics, present only for numeric columns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numeric: Option<NumericSummary>,
}

impl ColumnSummary {
    /// Count of non-missing values, given the dataset row count.
    pub fn non_missing_count(&self, n_rows: usize) -> usize {
        n_rows.saturating_sub(self.missing_count)
    }
}

/// Summary of an entire dataset. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub n_rows: usize,
    pub n_cols: usize,
    /// One entry per column, in table order.
    pub columns: Vec<ColumnSummary>,
}

impl DatasetSummary {
    /// Look up a column summary by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSummary> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Names of numeric columns, in table order.
    pub fn numeric_columns(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.columns.iter().filter(|c| c.dtype == DtypeKind::Numeric)
    }

    /// Names of categorical columns, in table order.
    pub fn categorical_columns(&self) -> impl Iterator<Item = &ColumnSummary> {
        self.columns
            .iter()
            .filter(|c| c.dtype == DtypeKind::Categorical)
    }
}

/// Compute per-column summaries for a table.
///
/// Never fails: an empty table yields `n_rows = 0` with all derived
/// statistics degraded to zero/absent.
pub fn summarize_dataset(table: &DataTable) -> DatasetSummary {
    let n_rows = table.row_count();
    let n_cols = table.column_count();

    let columns = (0..n_cols)
        .map(|idx| summarize_column(table, idx))
        .collect();

    DatasetSummary {
        n_rows,
        n_cols,
        columns,
    }
}

fn summarize_column(table: &DataTable, index: usize) -> ColumnSummary {
    let name = table.headers[index].clone();

    let mut missing_count = 0;
    let mut distinct: HashSet<&str> = HashSet::new();
    let mut parsed: Vec<f64> = Vec::new();
    let mut all_numeric = true;

    for value in table.column_values(index) {
        if DataTable::is_missing_value(value) {
            missing_count += 1;
            continue;
        }
        distinct.insert(value);
        if all_numeric {
            match value.trim().parse::<f64>() {
                Ok(v) => parsed.push(v),
                Err(_) => all_numeric = false,
            }
        }
    }

    let unique_count = distinct.len();
    let non_missing = table.row_count() - missing_count;

    let dtype = if non_missing == 0 {
        DtypeKind::Other
    } else if all_numeric {
        DtypeKind::Numeric
    } else {
        DtypeKind::Categorical
    };

    let numeric = if dtype == DtypeKind::Numeric {
        let count = parsed.len();
        let sum: f64 = parsed.iter().sum();
        let min = parsed.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = parsed.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        let zero_count = parsed.iter().filter(|v| **v == 0.0).count();

        Some(NumericSummary {
            mean: sum / count as f64,
            min,
            max,
            zero_count,
        })
    } else {
        None
    };

    ColumnSummary {
        name,
        dtype,
        missing_count,
        unique_count,
        numeric,
    }
}
