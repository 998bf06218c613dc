/// LLM Client: the single point of entry for all orchestration-service calls.
///
/// ARCHITECTURAL RULE: No other module may call the orchestration service directly.
/// All remote classification traffic MUST go through this module.
///
/// Each call is a single attempt bounded by the configured timeout. A failed attempt is
/// reported to the caller, never retried here.
use std::collections::BTreeMap;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::RemoteConfig;

pub mod modules;

pub use modules::{JsonSchemaFormat, OrchestrationConfig};

const COMPLETION_PATH: &str = "/completion";
const RESOURCE_GROUP_HEADER: &str = "AI-Resource-Group";
const CONTENT_FILTER_FINISH: &str = "content_filter";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Blocked by content filtering: {message}")]
    Blocked {
        message: String,
        module_results: Box<ModuleResults>,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Response violates schema: {0}")]
    Schema(String),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// A chat message as sent in templates and echoed back in module results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: &str, content: impl Into<String>) -> Self {
        Self {
            role: role.to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompletionRequest<'a> {
    orchestration_config: &'a OrchestrationConfig,
    input_params: BTreeMap<&'a str, &'a str>,
}

impl<'a> CompletionRequest<'a> {
    pub fn new(config: &'a OrchestrationConfig) -> Self {
        Self {
            orchestration_config: config,
            input_params: BTreeMap::new(),
        }
    }

    /// Fills a `{{?name}}` placeholder in the template.
    pub fn param(mut self, name: &'a str, value: &'a str) -> Self {
        self.input_params.insert(name, value);
        self
    }
}

/// Output of a single orchestration module, e.g. masking or filtering.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleResult {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Value,
}

/// Per-module diagnostics returned alongside a completion (or an error).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ModuleResults {
    #[serde(default)]
    pub templating: Vec<ChatMessage>,
    #[serde(default)]
    pub input_masking: Option<ModuleResult>,
    #[serde(default)]
    pub input_filtering: Option<ModuleResult>,
    #[serde(default)]
    pub output_filtering: Option<ModuleResult>,
}

#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub module_results: ModuleResults,
    pub orchestration_result: OrchestrationResult,
}

#[derive(Debug, Deserialize)]
pub struct OrchestrationResult {
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChatMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl CompletionResponse {
    /// Content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.orchestration_result
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .filter(|t| !t.trim().is_empty())
    }

    fn filtered_by_output_filter(&self) -> bool {
        self.orchestration_result
            .choices
            .iter()
            .any(|c| c.finish_reason.as_deref() == Some(CONTENT_FILTER_FINISH))
    }
}

#[derive(Debug, Deserialize)]
struct OrchestrationErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    module_results: Option<ModuleResults>,
}

impl OrchestrationErrorBody {
    fn is_filter_block(&self) -> bool {
        self.location
            .as_deref()
            .map(|l| l.to_lowercase().contains("filter"))
            .unwrap_or(false)
    }
}

/// The single orchestration client. Cheap to clone; the underlying connection pool is shared.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: String,
    resource_group: String,
}

impl LlmClient {
    pub fn new(settings: &RemoteConfig) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(settings.timeout).build()?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}{COMPLETION_PATH}",
                settings.base_url.trim_end_matches('/')
            ),
            api_key: settings.api_key.clone(),
            resource_group: settings.resource_group.clone(),
        })
    }

    /// Runs one orchestration completion.
    ///
    /// A refusal by the filtering module, either on input (HTTP error located in the
    /// filtering module) or on output (`content_filter` finish reason), is reported as
    /// `LlmError::Blocked` so callers can tell it apart from a technical failure.
    pub async fn complete(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<CompletionResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .header(RESOURCE_GROUP_HEADER, &self.resource_group)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match serde_json::from_str::<OrchestrationErrorBody>(&body) {
                Ok(err) if err.is_filter_block() => {
                    warn!(
                        "Orchestration filter refused request at {:?}: {}",
                        err.location, err.message
                    );
                    LlmError::Blocked {
                        message: err.message,
                        module_results: Box::new(err.module_results.unwrap_or_default()),
                    }
                }
                Ok(err) => LlmError::Api {
                    status: status.as_u16(),
                    message: err.message,
                },
                Err(_) => LlmError::Api {
                    status: status.as_u16(),
                    message: body,
                },
            });
        }

        let completion: CompletionResponse = response.json().await?;

        if completion.filtered_by_output_filter() {
            return Err(LlmError::Blocked {
                message: "Output filtered by content safety".to_string(),
                module_results: Box::new(completion.module_results),
            });
        }

        if let Some(usage) = completion.orchestration_result.usage {
            debug!(
                "Orchestration call succeeded: request_id={:?}, prompt_tokens={}, completion_tokens={}",
                completion.request_id, usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(completion)
    }

    /// Runs a completion and deserializes the model output as JSON.
    /// The response format must be a strict JSON schema; no fence stripping or repair is done.
    pub async fn complete_json<T: DeserializeOwned>(
        &self,
        request: &CompletionRequest<'_>,
    ) -> Result<(T, CompletionResponse), LlmError> {
        let completion = self.complete(request).await?;
        let text = completion.text().ok_or(LlmError::EmptyContent)?;
        let parsed = serde_json::from_str(text)?;
        Ok((parsed, completion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_completion_response_text_reads_first_choice() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "request_id": "r-1",
            "orchestration_result": {
                "model": "gpt-4o",
                "choices": [
                    {"index": 0, "message": {"role": "assistant", "content": "{\"a\":1}"}, "finish_reason": "stop"}
                ],
                "usage": {"prompt_tokens": 10, "completion_tokens": 4, "total_tokens": 14}
            }
        }))
        .unwrap();

        assert_eq!(response.text(), Some("{\"a\":1}"));
        assert!(!response.filtered_by_output_filter());
        assert!(response.module_results.templating.is_empty());
    }

    #[test]
    fn test_blank_content_is_no_text() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "orchestration_result": {
                "choices": [{"message": {"role": "assistant", "content": "  "}}]
            }
        }))
        .unwrap();
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_output_filter_finish_reason_detected() {
        let response: CompletionResponse = serde_json::from_value(json!({
            "orchestration_result": {
                "choices": [{"message": {"role": "assistant", "content": ""}, "finish_reason": "content_filter"}]
            }
        }))
        .unwrap();
        assert!(response.filtered_by_output_filter());
    }

    #[test]
    fn test_error_body_filter_location() {
        let body: OrchestrationErrorBody = serde_json::from_value(json!({
            "request_id": "r-2",
            "code": 400,
            "message": "Content filtered due to safety violations.",
            "location": "Filtering Module - Input Filter"
        }))
        .unwrap();
        assert!(body.is_filter_block());

        let body: OrchestrationErrorBody = serde_json::from_value(json!({
            "code": 400,
            "message": "Invalid template",
            "location": "Templating Module"
        }))
        .unwrap();
        assert!(!body.is_filter_block());
    }

    #[test]
    fn test_request_serializes_input_params() {
        let config = OrchestrationConfig::new(
            vec![ChatMessage::new("user", "Classify this query: {{?user_query}}")],
            JsonSchemaFormat {
                name: "result",
                description: "Result",
                strict: true,
                schema: json!({"type": "object"}),
            },
            "gpt-4o",
            500,
        );
        let request = CompletionRequest::new(&config).param("user_query", "hello");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["input_params"]["user_query"], "hello");
        assert!(value["orchestration_config"]["module_configurations"].is_object());
    }
}
