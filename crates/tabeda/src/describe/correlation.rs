//! Pairwise Pearson correlation over numeric columns.

use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::summary::DatasetSummary;

/// Square correlation matrix over the dataset's numeric columns.
///
/// Empty when the dataset has fewer than two numeric columns. Cells with
/// no overlapping observations or zero variance are `NaN`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    /// Numeric column names, in table order.
    pub columns: Vec<String>,
    /// Row-major coefficients, `values[i][j]` pairing `columns[i]` with
    /// `columns[j]`.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// An empty matrix.
    pub fn empty() -> Self {
        Self {
            columns: Vec::new(),
            values: Vec::new(),
        }
    }

    /// True when there was nothing to correlate.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Coefficient for a pair of column indices.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i).and_then(|row| row.get(j)).copied()
    }
}

/// Compute the pairwise Pearson correlation matrix for numeric columns.
///
/// Each pair is correlated over the rows where both values are present
/// and parseable, mirroring pairwise-complete-observations semantics.
pub fn correlation_matrix(table: &DataTable, summary: &DatasetSummary) -> CorrelationMatrix {
    let numeric: Vec<(usize, String)> = summary
        .columns
        .iter()
        .enumerate()
        .filter(|(_, c)| c.numeric.is_some())
        .map(|(idx, c)| (idx, c.name.clone()))
        .collect();

    if numeric.len() < 2 {
        return CorrelationMatrix::empty();
    }

    // Parse each numeric column once; None marks missing/unparseable cells.
    let parsed: Vec<Vec<Option<f64>>> = numeric
        .iter()
        .map(|(idx, _)| {
            table
                .column_values(*idx)
                .map(|v| {
                    if DataTable::is_missing_value(v) {
                        None
                    } else {
                        v.trim().parse::<f64>().ok()
                    }
                })
                .collect()
        })
        .collect();

    let n = numeric.len();
    let mut values = vec![vec![f64::NAN; n]; n];

    for i in 0..n {
        for j in i..n {
            let r = pearson(&parsed[i], &parsed[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    CorrelationMatrix {
        columns: numeric.into_iter().map(|(_, name)| name).collect(),
        values,
    }
}

/// Pearson coefficient over indices where both series have a value.
fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> f64 {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys.iter())
        .filter_map(|(x, y)| Some((((*x)?), ((*y)?))))
        .collect();

    if pairs.len() < 2 {
        return f64::NAN;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in &pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    if var_x == 0.0 || var_y == 0.0 {
        return f64::NAN;
    }

    cov / (var_x.sqrt() * var_y.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::summarize_dataset;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> DataTable {
        DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        )
    }

    #[test]
    fn test_perfect_positive_correlation() {
        let table = make_table(
            vec!["age", "height", "city"],
            vec![
                vec!["10", "140", "A"],
                vec!["20", "150", "B"],
                vec!["30", "160", "A"],
                vec!["", "170", ""],
            ],
        );
        let summary = summarize_dataset(&table);
        let corr = correlation_matrix(&table, &summary);

        assert_eq!(corr.columns, vec!["age", "height"]);
        // age/height move together on the three overlapping rows.
        assert!((corr.get(0, 1).unwrap() - 1.0).abs() < 1e-9);
        assert!((corr.get(0, 0).unwrap() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_correlation() {
        let table = make_table(
            vec!["x", "y"],
            vec![vec!["1", "3"], vec!["2", "2"], vec!["3", "1"]],
        );
        let summary = summarize_dataset(&table);
        let corr = correlation_matrix(&table, &summary);
        assert!((corr.get(0, 1).unwrap() + 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_numeric_column_is_empty() {
        let table = make_table(vec!["x", "c"], vec![vec!["1", "A"], vec!["2", "B"]]);
        let summary = summarize_dataset(&table);
        let corr = correlation_matrix(&table, &summary);
        assert!(corr.is_empty());
    }

    #[test]
    fn test_constant_column_gives_nan() {
        let table = make_table(
            vec!["x", "k"],
            vec![vec!["1", "5"], vec!["2", "5"], vec!["3", "5"]],
        );
        let summary = summarize_dataset(&table);
        let corr = correlation_matrix(&table, &summary);
        assert!(corr.get(0, 1).unwrap().is_nan());
    }
}
