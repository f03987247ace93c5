//! The quality heuristics engine.
//!
//! A total function over a [`DatasetSummary`] and its [`MissingTable`]:
//! every failure condition is expressed as a flag, never an error. The
//! caller must pass a summary/missing-table pair computed from the same
//! dataset; the engine does not re-validate that they match.

use once_cell::sync::Lazy;
use regex::Regex;

use super::flags::{QualityFlags, ShapeQuality};
use crate::summary::{DatasetSummary, DtypeKind, MissingTable};

/// Tunable rule thresholds and score penalties.
///
/// The values are heuristic defaults, not calibrated constants; they are
/// grouped here so tuning stays a one-file change.
pub mod thresholds {
    /// Datasets with fewer rows are flagged `too_few_rows`.
    pub const MIN_ROWS: usize = 100;
    /// Datasets with more columns are flagged `too_many_columns`.
    pub const MAX_COLUMNS: usize = 100;
    /// A column missing more than this share triggers `too_many_missing`.
    pub const MISSING_SHARE_LIMIT: f64 = 0.5;
    /// Unique-to-rows ratio at which a categorical column counts as
    /// high-cardinality.
    pub const HIGH_CARDINALITY_SHARE: f64 = 0.9;
    /// Zero share at which a numeric column counts as mostly-zero.
    pub const ZERO_SHARE_LIMIT: f64 = 0.5;
    /// Mean-to-max ratio below which a mostly-zero column is not considered
    /// legitimately zero-centered.
    pub const ZERO_MEAN_MAX_RATIO: f64 = 0.3;
    /// Score penalty when `too_few_rows` fires.
    pub const FEW_ROWS_PENALTY: f64 = 0.2;
    /// Score penalty when `too_many_columns` fires.
    pub const MANY_COLUMNS_PENALTY: f64 = 0.1;
}

use thresholds::*;

// Identifier-like column names: "id" as the whole name (any case), a
// "_id"/"_ID" suffix, or a camelCase "Id" suffix.
static ID_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i:^id$)|(?i:_id$)|Id$").unwrap());

/// Whether a column name declares an identifier.
fn looks_like_identifier(name: &str) -> bool {
    ID_NAME_PATTERN.is_match(name.trim())
}

/// Apply the quality heuristics to a summarized dataset.
pub fn compute_quality_flags(summary: &DatasetSummary, missing: &MissingTable) -> QualityFlags {
    let n_rows = summary.n_rows;

    // Structural flags from shape and missingness alone.
    let too_few_rows = n_rows < MIN_ROWS;
    let too_many_columns = summary.n_cols > MAX_COLUMNS;
    let max_missing_share = missing.max_missing_share();
    let too_many_missing = max_missing_share > MISSING_SHARE_LIMIT;

    // Per-column content heuristics. Columns with no non-missing values
    // carry too little information and are skipped.
    let mut constant_columns = Vec::new();
    let mut high_cardinality_categorical_columns = Vec::new();
    let mut suspicious_id_duplicate_columns = Vec::new();
    let mut many_zero_value_columns = Vec::new();

    for col in &summary.columns {
        let non_missing = col.non_missing_count(n_rows);

        if non_missing > 0 && col.unique_count == 1 {
            constant_columns.push(col.name.clone());
        }

        if n_rows > 0
            && non_missing > 0
            && col.dtype == DtypeKind::Categorical
            && col.unique_count as f64 / n_rows as f64 >= HIGH_CARDINALITY_SHARE
        {
            high_cardinality_categorical_columns.push(col.name.clone());
        }

        if looks_like_identifier(&col.name) && col.unique_count < n_rows {
            suspicious_id_duplicate_columns.push(col.name.clone());
        }

        if let Some(stats) = &col.numeric {
            if non_missing > 0 {
                let zero_share = stats.zero_count as f64 / non_missing as f64;
                // A zero max means every value is zero; the mean-to-max
                // guard is then vacuously satisfied.
                let mean_is_small = stats.max == 0.0
                    || (stats.mean / stats.max).abs() < ZERO_MEAN_MAX_RATIO;
                if zero_share >= ZERO_SHARE_LIMIT && mean_is_small {
                    many_zero_value_columns.push(col.name.clone());
                }
            }
        }
    }

    // Score: structural flags subtract fixed penalties, missingness
    // subtracts its max share, then clamp into [0, 1].
    let mut score = 1.0 - max_missing_share;
    if too_few_rows {
        score -= FEW_ROWS_PENALTY;
    }
    if too_many_columns {
        score -= MANY_COLUMNS_PENALTY;
    }
    let quality_score = score.clamp(0.0, 1.0);

    QualityFlags {
        quality_score,
        max_missing_share,
        too_few_rows,
        too_many_columns,
        too_many_missing,
        has_constant_columns: !constant_columns.is_empty(),
        constant_columns,
        has_high_cardinality_categoricals: !high_cardinality_categorical_columns.is_empty(),
        high_cardinality_categorical_columns,
        has_suspicious_id_duplicates: !suspicious_id_duplicate_columns.is_empty(),
        suspicious_id_duplicate_columns,
        has_many_zero_values: !many_zero_value_columns.is_empty(),
        many_zero_value_columns,
    }
}

/// Structural quality from shape counts alone.
///
/// Serves requests that carry only `n_rows`/`n_cols`/`missing_count`;
/// per-column heuristics are impossible without real data. A table with
/// zero cells scores a clean 1.0.
pub fn shape_quality(n_rows: usize, n_cols: usize, missing_count: usize) -> ShapeQuality {
    let total_cells = n_rows * n_cols;
    let too_few_rows = n_rows < MIN_ROWS;
    let too_many_columns = n_cols > MAX_COLUMNS;

    if total_cells == 0 {
        return ShapeQuality {
            quality_score: 1.0,
            too_few_rows,
            too_many_columns,
            too_many_missing: false,
        };
    }

    let missing_share = missing_count as f64 / total_cells as f64;
    let too_many_missing = missing_share > MISSING_SHARE_LIMIT;

    let mut score = 1.0 - missing_share;
    if too_few_rows {
        score -= FEW_ROWS_PENALTY;
    }
    if too_many_columns {
        score -= MANY_COLUMNS_PENALTY;
    }

    ShapeQuality {
        quality_score: score.clamp(0.0, 1.0),
        too_few_rows,
        too_many_columns,
        too_many_missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::DataTable;
    use crate::summary::{missing_table, summarize_dataset};

    fn analyze(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> QualityFlags {
        let table = DataTable::new(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
            b',',
        );
        let summary = summarize_dataset(&table);
        let missing = missing_table(&table);
        compute_quality_flags(&summary, &missing)
    }

    #[test]
    fn test_looks_like_identifier() {
        assert!(looks_like_identifier("id"));
        assert!(looks_like_identifier("ID"));
        assert!(looks_like_identifier("user_id"));
        assert!(looks_like_identifier("SAMPLE_ID"));
        assert!(looks_like_identifier("userId"));
        assert!(!looks_like_identifier("idea"));
        assert!(!looks_like_identifier("paid"));
        assert!(!looks_like_identifier("height"));
    }

    #[test]
    fn test_constant_column_flagged() {
        let flags = analyze(
            vec!["age", "const_col"],
            vec![
                vec!["10", "same"],
                vec!["20", "same"],
                vec!["30", "same"],
                vec!["40", "same"],
            ],
        );
        assert!(flags.has_constant_columns);
        assert_eq!(flags.constant_columns, vec!["const_col"]);
    }

    #[test]
    fn test_high_cardinality_categorical_flagged() {
        let flags = analyze(
            vec!["normal_cat", "high_card_cat"],
            vec![
                vec!["A", "value_0"],
                vec!["B", "value_1"],
                vec!["C", "value_2"],
                vec!["A", "value_3"],
            ],
        );
        assert!(flags.has_high_cardinality_categoricals);
        assert_eq!(
            flags.high_cardinality_categorical_columns,
            vec!["high_card_cat"]
        );
    }

    #[test]
    fn test_suspicious_id_duplicates_flagged() {
        let flags = analyze(
            vec!["user_id", "height"],
            vec![
                vec!["1", "140"],
                vec!["2", "150"],
                vec!["3", "160"],
                vec!["2", "170"],
            ],
        );
        assert!(flags.has_suspicious_id_duplicates);
        assert_eq!(flags.suspicious_id_duplicate_columns, vec!["user_id"]);
    }

    #[test]
    fn test_unique_id_not_flagged() {
        let flags = analyze(
            vec!["user_id"],
            vec![vec!["1"], vec!["2"], vec!["3"], vec!["4"]],
        );
        assert!(!flags.has_suspicious_id_duplicates);
    }

    #[test]
    fn test_mostly_zero_column_flagged() {
        // 75% zeros, mean 0.25, max 1 => ratio 0.25 < 0.3
        let flags = analyze(
            vec!["mostly_zero", "normal"],
            vec![
                vec!["0", "1"],
                vec!["0", "2"],
                vec!["0", "3"],
                vec!["1", "4"],
            ],
        );
        assert!(flags.has_many_zero_values);
        assert_eq!(flags.many_zero_value_columns, vec!["mostly_zero"]);
    }

    #[test]
    fn test_zero_centered_column_not_flagged() {
        // Half zeros but mean/max = 0.5, above the ratio guard.
        let flags = analyze(
            vec!["v"],
            vec![vec!["0"], vec!["0"], vec!["10"], vec!["10"]],
        );
        assert!(!flags.has_many_zero_values);
    }

    #[test]
    fn test_too_many_missing() {
        let flags = analyze(
            vec!["a", "b"],
            vec![
                vec!["", "1"],
                vec!["", "2"],
                vec!["", "3"],
                vec!["4", "4"],
            ],
        );
        assert!(flags.too_many_missing);
        assert!((flags.max_missing_share - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_empty_dataset_never_panics() {
        let flags = analyze(vec!["a", "b"], vec![]);
        assert!(flags.too_few_rows);
        assert!(!flags.too_many_missing);
        assert!(!flags.has_constant_columns);
        assert!(!flags.has_high_cardinality_categoricals);
        assert!(!flags.has_suspicious_id_duplicates);
        assert!(!flags.has_many_zero_values);
        assert!((0.0..=1.0).contains(&flags.quality_score));
    }

    #[test]
    fn test_all_missing_column_excluded_from_content_rules() {
        let flags = analyze(
            vec!["empty_col"],
            vec![vec![""], vec!["NA"], vec!["null"]],
        );
        assert!(!flags.has_constant_columns);
        assert!(!flags.has_high_cardinality_categoricals);
        assert!(!flags.has_many_zero_values);
    }

    #[test]
    fn test_score_penalties() {
        // Small clean dataset: only the few-rows penalty applies.
        let flags = analyze(
            vec!["a"],
            vec![vec!["1"], vec!["2"], vec!["3"], vec!["4"]],
        );
        assert!(flags.too_few_rows);
        assert!((flags.quality_score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_shape_quality_zero_cells() {
        let q = shape_quality(0, 0, 0);
        assert_eq!(q.quality_score, 1.0);
        assert!(q.too_few_rows);
        assert!(!q.too_many_missing);
    }

    #[test]
    fn test_shape_quality_penalties() {
        let q = shape_quality(50, 200, 0);
        assert!(q.too_few_rows);
        assert!(q.too_many_columns);
        assert!((q.quality_score - 0.7).abs() < 1e-9);

        let q = shape_quality(1000, 10, 6000);
        assert!(q.too_many_missing);
        assert!((q.quality_score - 0.4).abs() < 1e-9);
    }
}
