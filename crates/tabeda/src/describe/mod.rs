//! Auxiliary descriptive outputs: correlation matrix and top categories.
//!
//! These feed presentation only and never influence the quality flags.

mod categories;
mod correlation;

pub use categories::{top_categories, CategoryCount, TopCategories};
pub use correlation::{correlation_matrix, CorrelationMatrix};
