//! Property-based tests for the quality heuristics engine.
//!
//! These verify the invariants the engine promises for arbitrary inputs:
//! no panics, score always in [0, 1], and agreement between the column
//! summarizer and the missingness table.
//!
//! Run with more cases:
//!
//! ```bash
//! PROPTEST_CASES=10000 cargo test -p tabeda --test property_tests
//! ```

use proptest::prelude::*;

use tabeda::{
    compute_quality_flags, missing_table, shape_quality, summarize_dataset, DataTable,
};

// =============================================================================
// Test Strategies
// =============================================================================

/// Generate a cell value: numbers, short text, or missing markers.
fn cell_value() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => (-1000i64..1000).prop_map(|v| v.to_string()),
        2 => (-100.0f64..100.0).prop_map(|v| format!("{v:.3}")),
        2 => "[a-z]{1,8}",
        1 => prop_oneof![Just(String::new()), Just("NA".into()), Just("null".into())],
        1 => Just("0".to_string()),
    ]
}

/// Generate a small random table (possibly zero rows).
fn arbitrary_table() -> impl Strategy<Value = DataTable> {
    (1usize..6, 0usize..30).prop_flat_map(|(n_cols, n_rows)| {
        let headers: Vec<String> = (0..n_cols).map(|i| format!("col_{i}")).collect();
        proptest::collection::vec(
            proptest::collection::vec(cell_value(), n_cols..=n_cols),
            n_rows..=n_rows,
        )
        .prop_map(move |rows| DataTable::new(headers.clone(), rows, b','))
    })
}

// =============================================================================
// Invariants
// =============================================================================

proptest! {
    #[test]
    fn quality_score_always_in_unit_interval(table in arbitrary_table()) {
        let summary = summarize_dataset(&table);
        let missing = missing_table(&table);
        let flags = compute_quality_flags(&summary, &missing);

        prop_assert!((0.0..=1.0).contains(&flags.quality_score));
        prop_assert!((0.0..=1.0).contains(&flags.max_missing_share));
    }

    #[test]
    fn missing_counts_agree_between_builders(table in arbitrary_table()) {
        let summary = summarize_dataset(&table);
        let missing = missing_table(&table);

        prop_assert_eq!(missing.len(), summary.n_cols);
        for col in &summary.columns {
            let entry = missing.get(&col.name).expect("column missing from table");
            prop_assert_eq!(entry.missing_count, col.missing_count);
        }
    }

    #[test]
    fn flags_match_their_column_lists(table in arbitrary_table()) {
        let summary = summarize_dataset(&table);
        let missing = missing_table(&table);
        let flags = compute_quality_flags(&summary, &missing);

        prop_assert_eq!(flags.has_constant_columns, !flags.constant_columns.is_empty());
        prop_assert_eq!(
            flags.has_high_cardinality_categoricals,
            !flags.high_cardinality_categorical_columns.is_empty()
        );
        prop_assert_eq!(
            flags.has_suspicious_id_duplicates,
            !flags.suspicious_id_duplicate_columns.is_empty()
        );
        prop_assert_eq!(
            flags.has_many_zero_values,
            !flags.many_zero_value_columns.is_empty()
        );
    }

    #[test]
    fn engine_is_deterministic(table in arbitrary_table()) {
        let summary = summarize_dataset(&table);
        let missing = missing_table(&table);

        let a = compute_quality_flags(&summary, &missing);
        let b = compute_quality_flags(&summary, &missing);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn shape_quality_score_in_unit_interval(
        n_rows in 0usize..100_000,
        n_cols in 0usize..1_000,
        missing in 0usize..1_000_000,
    ) {
        let q = shape_quality(n_rows, n_cols, missing);
        prop_assert!((0.0..=1.0).contains(&q.quality_score));
    }
}
