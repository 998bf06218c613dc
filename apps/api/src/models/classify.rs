use serde::{Deserialize, Serialize};

use crate::catalog::LinkInfo;
use crate::classifier::PipelineDetails;

/// Upper bound on query length, in characters.
pub const MAX_QUERY_CHARS: usize = 2000;

#[derive(Debug, Deserialize)]
pub struct ClassifyRequest {
    pub query: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ClassifyParams {
    #[serde(default)]
    pub include_pipeline: bool,
}

/// The classify endpoint's response body.
///
/// `topic`, `topic_display_name` and a non-empty `links` are either all present or all
/// absent, and `is_talent_management` is true exactly when they are present.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyResponse {
    pub is_talent_management: bool,
    pub confidence: f64,
    pub topic: Option<&'static str>,
    pub topic_display_name: Option<&'static str>,
    pub links: Vec<LinkInfo>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline: Option<PipelineDetails>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    pub classifier_backend: &'static str,
}
