//! Quality heuristics: fixed statistical rules over a dataset summary and
//! its missingness table, aggregated into flags and a scalar score.

mod engine;
mod flags;

pub use engine::{compute_quality_flags, shape_quality, thresholds};
pub use flags::{QualityFlags, ShapeQuality};
