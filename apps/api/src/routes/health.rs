use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::models::classify::HealthResponse;
use crate::state::AppState;

pub const SERVICE_NAME: &str = "tm-intent-classifier";

/// GET /health
/// Returns service identity, version and the active classifier backend.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
        classifier_backend: state.classifier.backend(),
    })
}

/// GET /
/// Lists the service's endpoints.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "service": "Talent Management Intent Classifier API",
        "version": env!("CARGO_PKG_VERSION"),
        "health": "/health",
        "classify": "/api/v1/classify"
    }))
}
