//! Fixed-schema result records for the quality heuristics.

use serde::{Deserialize, Serialize};

/// Heuristic quality assessment of a dataset.
///
/// Constructed fresh per analysis call and read-only downstream. Every
/// `has_*` flag has a companion `*_columns` list naming the offending
/// columns; a flag is set iff its list is non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityFlags {
    /// Scalar quality score in `[0, 1]`; 1 means no detected issues.
    pub quality_score: f64,
    /// Maximum missing share across all columns.
    pub max_missing_share: f64,

    /// Fewer rows than the minimum considered usable.
    pub too_few_rows: bool,
    /// More columns than the maximum considered manageable.
    pub too_many_columns: bool,
    /// Some column is missing more than half its values.
    pub too_many_missing: bool,

    /// Some column holds a single distinct non-missing value.
    pub has_constant_columns: bool,
    pub constant_columns: Vec<String>,

    /// Some categorical column has near-unique values per row,
    /// suggesting an identifier-like free-text field.
    pub has_high_cardinality_categoricals: bool,
    pub high_cardinality_categorical_columns: Vec<String>,

    /// Some identifier-named column contains duplicate values.
    pub has_suspicious_id_duplicates: bool,
    pub suspicious_id_duplicate_columns: Vec<String>,

    /// Some numeric column is mostly zeros with a mean far below its max.
    pub has_many_zero_values: bool,
    pub many_zero_value_columns: Vec<String>,
}

impl QualityFlags {
    /// The boolean flags as `(name, value)` pairs, in schema order.
    ///
    /// Presentation adapters use this to render the flag set without
    /// re-listing field names.
    pub fn boolean_flags(&self) -> [(&'static str, bool); 7] {
        [
            ("too_few_rows", self.too_few_rows),
            ("too_many_columns", self.too_many_columns),
            ("too_many_missing", self.too_many_missing),
            ("has_constant_columns", self.has_constant_columns),
            (
                "has_high_cardinality_categoricals",
                self.has_high_cardinality_categoricals,
            ),
            (
                "has_suspicious_id_duplicates",
                self.has_suspicious_id_duplicates,
            ),
            ("has_many_zero_values", self.has_many_zero_values),
        ]
    }

    /// True when no heuristic fired.
    pub fn is_clean(&self) -> bool {
        self.boolean_flags().iter().all(|(_, v)| !v)
    }
}

/// Structural quality computed from table shape and a total missing count
/// alone, without per-column data. Used by the counts-only HTTP endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeQuality {
    pub quality_score: f64,
    pub too_few_rows: bool,
    pub too_many_columns: bool,
    pub too_many_missing: bool,
}
