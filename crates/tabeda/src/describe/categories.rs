//! Top-k most frequent values per categorical column.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::input::DataTable;
use crate::summary::{DatasetSummary, DtypeKind};

/// One category value and how often it occurs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub value: String,
    pub count: usize,
}

/// Top categories per categorical column, keyed by column name in table
/// order. Values are sorted by descending count, ties by first appearance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopCategories(IndexMap<String, Vec<CategoryCount>>);

impl TopCategories {
    /// Top values for a column.
    pub fn get(&self, column: &str) -> Option<&[CategoryCount]> {
        self.0.get(column).map(|v| v.as_slice())
    }

    /// Iterate columns in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<CategoryCount>)> {
        self.0.iter()
    }

    /// True when the dataset had no categorical columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of categorical columns covered.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

/// Count the top-k most frequent non-missing values of each categorical
/// column.
pub fn top_categories(table: &DataTable, summary: &DatasetSummary, top_k: usize) -> TopCategories {
    let mut result = IndexMap::new();

    for (idx, col) in summary.columns.iter().enumerate() {
        if col.dtype != DtypeKind::Categorical {
            continue;
        }

        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for value in table.column_values(idx) {
            if DataTable::is_missing_value(value) {
                continue;
            }
            *counts.entry(value).or_insert(0) += 1;
        }

        let mut entries: Vec<CategoryCount> = counts
            .into_iter()
            .map(|(value, count)| CategoryCount {
                value: value.to_string(),
                count,
            })
            .collect();
        // Stable sort keeps first-appearance order among equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));
        entries.truncate(top_k);

        result.insert(col.name.clone(), entries);
    }

    TopCategories(result)
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
    fn test_top_categories_basic() {
        let table = make_table(
            vec!["age", "city"],
            vec![
                vec!["10", "A"],
                vec!["20", "B"],
                vec!["30", "A"],
                vec!["", ""],
            ],
        );
        let summary = summarize_dataset(&table);
        let cats = top_categories(&table, &summary, 2);

        assert_eq!(cats.len(), 1);
        let city = cats.get("city").unwrap();
        assert!(city.len() <= 2);
        assert_eq!(city[0].value, "A");
        assert_eq!(city[0].count, 2);
        assert_eq!(city[1].value, "B");
    }

    #[test]
    fn test_top_k_truncates() {
        let table = make_table(
            vec!["c"],
            vec![vec!["x"], vec!["y"], vec!["z"], vec!["x"], vec!["w"]],
        );
        let summary = summarize_dataset(&table);
        let cats = top_categories(&table, &summary, 2);
        let c = cats.get("c").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c[0].value, "x");
    }

    #[test]
    fn test_no_categorical_columns() {
        let table = make_table(vec!["x"], vec![vec!["1"], vec!["2"]]);
        let summary = summarize_dataset(&table);
        let cats = top_categories(&table, &summary, 5);
        assert!(cats.is_empty());
    }
}
