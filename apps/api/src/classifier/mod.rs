//! Intent classification: decides whether a query is about Talent Management and which topic.
//!
//! Two backends implement `IntentClassifier`:
//! - `KeywordClassifier`: deterministic substring matcher, no network.
//! - `OrchestrationClassifier`: remote model behind the orchestration service.
//!
//! `AppState` holds an `Arc<dyn IntentClassifier>` chosen once at startup via config.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::catalog::TopicCatalog;
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::LlmClient;

pub mod assembler;
pub mod handlers;
pub mod keyword;
pub mod pipeline;
pub mod prompts;
pub mod remote;

pub use keyword::KeywordClassifier;
pub use pipeline::PipelineDetails;
pub use remote::OrchestrationClassifier;

pub const EMPTY_QUERY_SUMMARY: &str = "Please provide a valid query.";
pub const FALLBACK_SUMMARY: &str =
    "Unable to classify the query. Please try again or rephrase your question.";
pub const BLOCKED_SUMMARY: &str =
    "Your query was blocked by content filtering. Please rephrase your question.";

/// The raw relevance decision, before catalog enrichment.
///
/// Built only through the constructors below, so a verdict that is not relevant never
/// carries a topic key.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationVerdict {
    pub is_relevant: bool,
    pub confidence: f64,
    pub topic_key: Option<String>,
    /// Why the backend decided this way. Logged, not returned to callers.
    pub reasoning: String,
    pub summary: String,
}

impl ClassificationVerdict {
    pub fn relevant(
        topic_key: impl Into<String>,
        confidence: f64,
        reasoning: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            is_relevant: true,
            confidence: confidence.clamp(0.0, 1.0),
            topic_key: Some(topic_key.into()),
            reasoning: reasoning.into(),
            summary: summary.into(),
        }
    }

    pub fn not_relevant(
        confidence: f64,
        reasoning: impl Into<String>,
        summary: impl Into<String>,
    ) -> Self {
        Self {
            is_relevant: false,
            confidence: confidence.clamp(0.0, 1.0),
            topic_key: None,
            reasoning: reasoning.into(),
            summary: summary.into(),
        }
    }

    pub fn empty_query() -> Self {
        Self::not_relevant(1.0, "Query is empty", EMPTY_QUERY_SUMMARY)
    }

    /// The remote call failed or returned something unusable.
    pub fn fallback() -> Self {
        Self::not_relevant(0.0, "Classification failed", FALLBACK_SUMMARY)
    }

    /// The remote content-safety screen refused the query.
    pub fn blocked() -> Self {
        Self::not_relevant(0.0, "Blocked by content filtering", BLOCKED_SUMMARY)
    }
}

/// Checked first by every backend, before any other path.
pub fn empty_query_verdict(query: &str) -> Option<ClassificationVerdict> {
    query
        .trim()
        .is_empty()
        .then(ClassificationVerdict::empty_query)
}

/// A verdict plus optional diagnostics about how it was reached.
#[derive(Debug, Clone)]
pub struct Classification {
    pub verdict: ClassificationVerdict,
    pub pipeline: Option<PipelineDetails>,
}

impl Classification {
    pub fn bare(verdict: ClassificationVerdict) -> Self {
        Self {
            verdict,
            pipeline: None,
        }
    }
}

/// The classification gateway. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait IntentClassifier: Send + Sync {
    async fn classify(
        &self,
        query: &str,
        include_pipeline: bool,
    ) -> Result<Classification, AppError>;

    /// Short label for logs and the health endpoint: "keyword" | "remote".
    fn backend(&self) -> &'static str;
}

/// Picks the backend for the process lifetime.
pub fn build_classifier(
    config: &Config,
    catalog: Arc<TopicCatalog>,
) -> Result<Arc<dyn IntentClassifier>> {
    match config.selected_remote() {
        Some(settings) => {
            let llm = LlmClient::new(settings).context("Failed to build orchestration client")?;
            Ok(Arc::new(OrchestrationClassifier::new(llm, settings, &catalog)))
        }
        None => Ok(Arc::new(KeywordClassifier::new(catalog))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClassifierBackend, RemoteConfig};
    use std::time::Duration;

    fn config(backend: ClassifierBackend, remote: bool) -> Config {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            backend,
            remote: remote.then(|| RemoteConfig {
                base_url: "http://127.0.0.1:9".to_string(),
                api_key: "secret".to_string(),
                resource_group: "default".to_string(),
                model: "gpt-4o".to_string(),
                max_tokens: 500,
                timeout: Duration::from_secs(1),
                content_filtering: true,
                data_masking: true,
            }),
        }
    }

    #[test]
    fn test_not_relevant_verdict_never_has_topic() {
        let verdict = ClassificationVerdict::not_relevant(0.9, "", "nope");
        assert!(!verdict.is_relevant);
        assert!(verdict.topic_key.is_none());
    }

    #[test]
    fn test_confidence_is_clamped() {
        assert_eq!(ClassificationVerdict::relevant("x", 1.7, "", "").confidence, 1.0);
        assert_eq!(ClassificationVerdict::not_relevant(-0.2, "", "").confidence, 0.0);
    }

    #[test]
    fn test_fallback_and_blocked_are_distinct() {
        let fallback = ClassificationVerdict::fallback();
        let blocked = ClassificationVerdict::blocked();
        assert_eq!(fallback.confidence, 0.0);
        assert_eq!(blocked.confidence, 0.0);
        assert_ne!(fallback.summary, blocked.summary);
        assert!(blocked.summary.contains("blocked"));
    }

    #[test]
    fn test_empty_query_verdict() {
        for query in ["", "   ", "\n\t "] {
            let verdict = empty_query_verdict(query).unwrap();
            assert_eq!(verdict.confidence, 1.0);
            assert!(verdict.topic_key.is_none());
            assert_eq!(verdict.summary, EMPTY_QUERY_SUMMARY);
        }
        assert!(empty_query_verdict("pto").is_none());
    }

    #[test]
    fn test_build_classifier_picks_backend() {
        let catalog = Arc::new(TopicCatalog::builtin().unwrap());

        let keyword = build_classifier(&config(ClassifierBackend::Auto, false), catalog.clone())
            .unwrap();
        assert_eq!(keyword.backend(), "keyword");

        let remote =
            build_classifier(&config(ClassifierBackend::Auto, true), catalog.clone()).unwrap();
        assert_eq!(remote.backend(), "remote");

        let forced =
            build_classifier(&config(ClassifierBackend::Keyword, true), catalog).unwrap();
        assert_eq!(forced.backend(), "keyword");
    }
}
