//! Pipeline diagnostics: what the orchestration service did with a query.
//!
//! Pass-through only: nothing here feeds back into the verdict.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::classifier::prompts::USER_PROMPT_PREFIX;
use crate::llm_client::{ChatMessage, CompletionResponse, ModuleResults};

static RE_MASKED_ENTITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"MASKED_(\w+)").expect("valid regex"));
static RE_MASKED_QUERY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"{}\s*(.+?)(?:\n|$)",
        regex::escape(USER_PROMPT_PREFIX)
    ))
    .expect("valid regex")
});

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineDetails {
    /// Null when nothing in the query was masked.
    pub data_masking: Option<DataMaskingDetails>,
    pub content_filtering: ContentFilteringDetails,
    pub llm: LlmDetails,
    pub messages_to_llm: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataMaskingDetails {
    pub original_query: String,
    pub masked_query: String,
    pub entities_masked: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentFilteringDetails {
    pub input: FilterScores,
    pub output: FilterScores,
}

/// Azure content-safety severities per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterScores {
    pub hate: u64,
    pub self_harm: u64,
    pub sexual: u64,
    pub violence: u64,
    pub passed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LlmDetails {
    pub model: String,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl FilterScores {
    fn clean(passed: bool) -> Self {
        Self {
            hate: 0,
            self_harm: 0,
            sexual: 0,
            violence: 0,
            passed,
        }
    }

    /// Reads `{"Hate": n, "SelfHarm": n, ...}`; missing categories count as 0.
    fn from_azure(scores: Option<&Value>, passed: bool) -> Self {
        let Some(scores) = scores else {
            return Self::clean(passed);
        };
        let get = |category: &str| scores.get(category).and_then(Value::as_u64).unwrap_or(0);
        Self {
            hate: get("Hate"),
            self_harm: get("SelfHarm"),
            sexual: get("Sexual"),
            violence: get("Violence"),
            passed,
        }
    }
}

impl PipelineDetails {
    /// Diagnostics for the keyword backend: nothing masked, nothing filtered.
    pub fn local(query: &str) -> Self {
        Self {
            data_masking: None,
            content_filtering: ContentFilteringDetails {
                input: FilterScores::clean(true),
                output: FilterScores::clean(true),
            },
            llm: LlmDetails {
                model: "keyword".to_string(),
                prompt_tokens: 0,
                completion_tokens: 0,
            },
            messages_to_llm: vec![ChatMessage::new(
                "user",
                format!("{USER_PROMPT_PREFIX} {query}"),
            )],
        }
    }

    /// Diagnostics from a successful completion.
    pub fn from_response(query: &str, response: &CompletionResponse) -> Self {
        let results = &response.module_results;

        let input = FilterScores::from_azure(
            results
                .input_filtering
                .as_ref()
                .and_then(|r| r.data.get("azure_content_safety")),
            true,
        );
        let output = FilterScores::from_azure(
            results
                .output_filtering
                .as_ref()
                .and_then(|r| r.data.pointer("/choices/0/azure_content_safety")),
            true,
        );

        let usage = response.orchestration_result.usage;

        Self {
            data_masking: masking_details(query, results),
            content_filtering: ContentFilteringDetails { input, output },
            llm: LlmDetails {
                model: response
                    .orchestration_result
                    .model
                    .clone()
                    .unwrap_or_else(|| "unknown".to_string()),
                prompt_tokens: usage.map(|u| u.prompt_tokens).unwrap_or(0),
                completion_tokens: usage.map(|u| u.completion_tokens).unwrap_or(0),
            },
            messages_to_llm: results.templating.clone(),
        }
    }

    /// Diagnostics from a request the filtering module refused. Output filtering never ran.
    pub fn from_blocked(query: &str, results: &ModuleResults) -> Self {
        let input = FilterScores::from_azure(
            results
                .input_filtering
                .as_ref()
                .and_then(|r| r.data.get("azure_content_safety")),
            false,
        );

        Self {
            data_masking: masking_details(query, results),
            content_filtering: ContentFilteringDetails {
                input,
                output: FilterScores::clean(false),
            },
            llm: LlmDetails {
                model: "blocked".to_string(),
                prompt_tokens: 0,
                completion_tokens: 0,
            },
            messages_to_llm: results.templating.clone(),
        }
    }
}

fn masking_details(query: &str, results: &ModuleResults) -> Option<DataMaskingDetails> {
    let masked_template = results
        .input_masking
        .as_ref()
        .and_then(|r| r.data.get("masked_template"))
        .and_then(Value::as_str)?;

    let mut entities: Vec<String> = RE_MASKED_ENTITY
        .captures_iter(masked_template)
        .map(|c| c[1].to_string())
        .collect();
    entities.sort();
    entities.dedup();

    if entities.is_empty() {
        return None;
    }

    let masked_query = RE_MASKED_QUERY
        .captures(masked_template)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| query.to_string());

    Some(DataMaskingDetails {
        original_query: query.to_string(),
        masked_query,
        entities_masked: entities,
    })
}
