use std::sync::Arc;

use crate::catalog::TopicCatalog;
use crate::classifier::IntentClassifier;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<TopicCatalog>,
    /// Classification backend. Keyword matcher or remote, chosen via CLASSIFIER_BACKEND.
    pub classifier: Arc<dyn IntentClassifier>,
}
