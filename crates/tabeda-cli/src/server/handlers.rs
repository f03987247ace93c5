//! HTTP handlers for the quality API.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tabeda::{shape_quality, QualityFlags};

use super::error::ApiError;
use super::state::AppState;

/// `GET /health` - liveness probe.
pub async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Counts-only quality
// =============================================================================

#[derive(Deserialize)]
pub struct ShapeParams {
    pub n_rows: usize,
    pub n_cols: usize,
    pub missing_count: usize,
}

#[derive(Serialize)]
pub struct StructuralFlags {
    pub too_few_rows: bool,
    pub too_many_columns: bool,
    pub too_many_missing: bool,
}

#[derive(Serialize)]
pub struct ShapeQualityResponse {
    pub quality_score: f64,
    pub flags: StructuralFlags,
}

/// `POST /quality` - structural score from shape counts alone. Per-column
/// heuristics need real data and are not available here.
pub async fn quality(Query(params): Query<ShapeParams>) -> Json<ShapeQualityResponse> {
    tracing::info!(
        n_rows = params.n_rows,
        n_cols = params.n_cols,
        missing_count = params.missing_count,
        "quality check requested"
    );

    let q = shape_quality(params.n_rows, params.n_cols, params.missing_count);

    Json(ShapeQualityResponse {
        quality_score: q.quality_score,
        flags: StructuralFlags {
            too_few_rows: q.too_few_rows,
            too_many_columns: q.too_many_columns,
            too_many_missing: q.too_many_missing,
        },
    })
}

// =============================================================================
// CSV uploads
// =============================================================================

#[derive(Serialize)]
pub struct ScoreResponse {
    pub quality_score: f64,
}

#[derive(Serialize)]
pub struct FlagSet {
    pub too_few_rows: bool,
    pub too_many_columns: bool,
    pub too_many_missing: bool,
    pub has_constant_columns: bool,
    pub has_high_cardinality_categoricals: bool,
    pub has_suspicious_id_duplicates: bool,
    pub has_many_zero_values: bool,
}

impl From<&QualityFlags> for FlagSet {
    fn from(flags: &QualityFlags) -> Self {
        Self {
            too_few_rows: flags.too_few_rows,
            too_many_columns: flags.too_many_columns,
            too_many_missing: flags.too_many_missing,
            has_constant_columns: flags.has_constant_columns,
            has_high_cardinality_categoricals: flags.has_high_cardinality_categoricals,
            has_suspicious_id_duplicates: flags.has_suspicious_id_duplicates,
            has_many_zero_values: flags.has_many_zero_values,
        }
    }
}

#[derive(Serialize)]
pub struct FlagsResponse {
    pub flags: FlagSet,
}

/// Pull the uploaded file bytes out of a multipart body.
async fn read_upload(multipart: &mut Multipart) -> Result<Vec<u8>, ApiError> {
    let field = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
        .ok_or_else(|| ApiError::BadRequest("Missing file field".to_string()))?;

    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Could not read upload: {}", e)))?;

    Ok(data.to_vec())
}

/// `POST /quality-from-csv` - full engine, score only.
pub async fn quality_from_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResponse>, ApiError> {
    let data = read_upload(&mut multipart).await?;
    tracing::info!(bytes = data.len(), "quality from CSV requested");

    let analysis = state.analyzer.analyze_bytes(&data)?;

    tracing::info!(score = analysis.flags.quality_score, "quality score computed");
    Ok(Json(ScoreResponse {
        quality_score: analysis.flags.quality_score,
    }))
}

/// `POST /quality-flags-from-csv` - full engine, all boolean flags.
pub async fn quality_flags_from_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<FlagsResponse>, ApiError> {
    let data = read_upload(&mut multipart).await?;
    tracing::info!(bytes = data.len(), "quality flags from CSV requested");

    let analysis = state.analyzer.analyze_bytes(&data)?;

    Ok(Json(FlagsResponse {
        flags: FlagSet::from(&analysis.flags),
    }))
}
