//! Remote classifier: asks a hosted model, through the orchestration service, for a verdict.
//!
//! Every failure on this path collapses into a well-formed verdict:
//! - content-safety refusal → blocked verdict
//! - transport error, timeout, API error, unparseable or out-of-schema output → fallback verdict

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::catalog::TopicCatalog;
use crate::classifier::pipeline::PipelineDetails;
use crate::classifier::prompts::{
    classification_schema, system_prompt, SCHEMA_DESCRIPTION, SCHEMA_NAME, USER_PROMPT_TEMPLATE,
};
use crate::classifier::{
    empty_query_verdict, Classification, ClassificationVerdict, IntentClassifier,
};
use crate::config::RemoteConfig;
use crate::errors::AppError;
use crate::llm_client::{
    ChatMessage, CompletionRequest, CompletionResponse, JsonSchemaFormat, LlmClient, LlmError,
    OrchestrationConfig,
};

const QUERY_PARAM: &str = "user_query";

/// Model output, exactly as the response schema describes it.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RemoteVerdict {
    is_talent_management: bool,
    confidence: f64,
    topic: Option<String>,
    reasoning: String,
    summary: String,
}

impl RemoteVerdict {
    fn into_verdict(self) -> Result<ClassificationVerdict, LlmError> {
        if !(0.0..=1.0).contains(&self.confidence) {
            return Err(LlmError::Schema(format!(
                "confidence {} outside [0, 1]",
                self.confidence
            )));
        }

        let topic = self.topic.filter(|t| !t.trim().is_empty());
        Ok(match topic {
            Some(topic) if self.is_talent_management => ClassificationVerdict::relevant(
                topic,
                self.confidence,
                self.reasoning,
                self.summary,
            ),
            _ => ClassificationVerdict::not_relevant(
                self.confidence,
                self.reasoning,
                self.summary,
            ),
        })
    }
}

pub struct OrchestrationClassifier {
    llm: LlmClient,
    config: OrchestrationConfig,
}

impl OrchestrationClassifier {
    /// Renders the catalog into the system prompt once; the template is reused for every call.
    pub fn new(llm: LlmClient, settings: &RemoteConfig, catalog: &TopicCatalog) -> Self {
        let template = vec![
            ChatMessage::new("system", system_prompt(&catalog.render_for_prompt())),
            ChatMessage::new("user", USER_PROMPT_TEMPLATE),
        ];
        let schema = JsonSchemaFormat {
            name: SCHEMA_NAME,
            description: SCHEMA_DESCRIPTION,
            strict: true,
            schema: classification_schema(),
        };

        let mut config =
            OrchestrationConfig::new(template, schema, &settings.model, settings.max_tokens);
        if settings.content_filtering {
            config = config.with_content_filtering();
        }
        if settings.data_masking {
            config = config.with_data_masking();
        }

        Self { llm, config }
    }
}

#[async_trait]
impl IntentClassifier for OrchestrationClassifier {
    async fn classify(
        &self,
        query: &str,
        include_pipeline: bool,
    ) -> Result<Classification, AppError> {
        if let Some(verdict) = empty_query_verdict(query) {
            return Ok(Classification::bare(verdict));
        }

        let request = CompletionRequest::new(&self.config).param(QUERY_PARAM, query);

        match self.llm.complete_json::<RemoteVerdict>(&request).await {
            Ok((raw, response)) => match raw.into_verdict() {
                Ok(verdict) => {
                    debug!(
                        "Remote classification: model={} topic={:?} confidence={} ({})",
                        self.config.model_name(),
                        verdict.topic_key,
                        verdict.confidence,
                        verdict.reasoning
                    );
                    Ok(Classification {
                        verdict,
                        pipeline: pipeline_for(include_pipeline, query, &response),
                    })
                }
                Err(e) => {
                    error!("Failed to parse LLM response: {e}");
                    Ok(Classification::bare(ClassificationVerdict::fallback()))
                }
            },
            Err(LlmError::Blocked {
                message,
                module_results,
            }) => {
                warn!("Orchestration blocked: {message}");
                Ok(Classification {
                    verdict: ClassificationVerdict::blocked(),
                    pipeline: include_pipeline
                        .then(|| PipelineDetails::from_blocked(query, &module_results)),
                })
            }
            Err(e @ (LlmError::Parse(_) | LlmError::EmptyContent | LlmError::Schema(_))) => {
                error!("Failed to parse LLM response: {e}");
                Ok(Classification::bare(ClassificationVerdict::fallback()))
            }
            Err(e) => {
                error!("Classification error: {e}");
                Ok(Classification::bare(ClassificationVerdict::fallback()))
            }
        }
    }

    fn backend(&self) -> &'static str {
        "remote"
    }
}

fn pipeline_for(
    include_pipeline: bool,
    query: &str,
    response: &CompletionResponse,
) -> Option<PipelineDetails> {
    include_pipeline.then(|| PipelineDetails::from_response(query, response))
}
