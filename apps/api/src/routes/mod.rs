pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::classifier::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/classify", post(handlers::handle_classify))
        .with_state(state)
}
