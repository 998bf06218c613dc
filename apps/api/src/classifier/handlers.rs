//! Axum route handlers for the Classification API.

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    Json,
};
use tracing::info;

use crate::classifier::assembler::assemble;
use crate::errors::AppError;
use crate::models::classify::{ClassifyParams, ClassifyRequest, ClassifyResponse, MAX_QUERY_CHARS};
use crate::state::AppState;

/// POST /api/v1/classify
///
/// Classifies a query into a Talent Management topic and returns the topic's help links.
/// Pass `?include_pipeline=true` to get orchestration diagnostics in the response.
pub async fn handle_classify(
    State(state): State<AppState>,
    Query(params): Query<ClassifyParams>,
    payload: Result<Json<ClassifyRequest>, JsonRejection>,
) -> Result<Json<ClassifyResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let length = request.query.chars().count();
    if length == 0 || length > MAX_QUERY_CHARS {
        return Err(AppError::Validation(format!(
            "query must be between 1 and {MAX_QUERY_CHARS} characters"
        )));
    }

    let classification = state
        .classifier
        .classify(&request.query, params.include_pipeline)
        .await
        .map_err(|e| AppError::Classification(e.to_string()))?;

    let mut response = assemble(&classification.verdict, &state.catalog);
    response.pipeline = classification.pipeline;

    info!(
        "Classified query: backend={} topic={:?} confidence={:.2}",
        state.classifier.backend(),
        response.topic,
        response.confidence
    );

    Ok(Json(response))
}
