// Orchestration module configuration: templating, model, content filtering, data masking.
// Built once per process and serialized into every completion request.

use serde::Serialize;
use serde_json::Value;

use super::ChatMessage;

/// Azure content-safety threshold that only lets "safe" content through.
const ALLOW_SAFE: u8 = 0;

/// Entity types anonymized by the data-privacy masking provider.
const MASKED_ENTITIES: &[&str] = &[
    "profile-person",
    "profile-email",
    "profile-phone",
    "profile-address",
    "profile-sapids-internal",
    "profile-sapids-public",
];

#[derive(Debug, Clone, Serialize)]
pub struct OrchestrationConfig {
    module_configurations: ModuleConfigurations,
}

#[derive(Debug, Clone, Serialize)]
struct ModuleConfigurations {
    templating_module_config: TemplatingConfig,
    llm_module_config: LlmModuleConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    filtering_module_config: Option<FilteringConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    masking_module_config: Option<MaskingConfig>,
}

#[derive(Debug, Clone, Serialize)]
struct TemplatingConfig {
    template: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
    json_schema: JsonSchemaFormat,
}

/// A named JSON schema the model output must satisfy.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSchemaFormat {
    pub name: &'static str,
    pub description: &'static str,
    pub strict: bool,
    pub schema: Value,
}

#[derive(Debug, Clone, Serialize)]
struct LlmModuleConfig {
    model_name: String,
    model_params: ModelParams,
}

#[derive(Debug, Clone, Serialize)]
struct ModelParams {
    max_tokens: u32,
}

#[derive(Debug, Clone, Serialize)]
struct FilteringConfig {
    input: FilterStage,
    output: FilterStage,
}

#[derive(Debug, Clone, Serialize)]
struct FilterStage {
    filters: Vec<ContentFilter>,
}

#[derive(Debug, Clone, Serialize)]
struct ContentFilter {
    #[serde(rename = "type")]
    filter_type: &'static str,
    config: AzureThresholds,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
struct AzureThresholds {
    hate: u8,
    self_harm: u8,
    sexual: u8,
    violence: u8,
}

#[derive(Debug, Clone, Serialize)]
struct MaskingConfig {
    masking_providers: Vec<MaskingProvider>,
}

#[derive(Debug, Clone, Serialize)]
struct MaskingProvider {
    #[serde(rename = "type")]
    provider_type: &'static str,
    method: &'static str,
    entities: Vec<MaskingEntity>,
}

#[derive(Debug, Clone, Serialize)]
struct MaskingEntity {
    #[serde(rename = "type")]
    entity_type: &'static str,
}

impl OrchestrationConfig {
    pub fn new(
        template: Vec<ChatMessage>,
        json_schema: JsonSchemaFormat,
        model_name: &str,
        max_tokens: u32,
    ) -> Self {
        Self {
            module_configurations: ModuleConfigurations {
                templating_module_config: TemplatingConfig {
                    template,
                    response_format: ResponseFormat {
                        format_type: "json_schema",
                        json_schema,
                    },
                },
                llm_module_config: LlmModuleConfig {
                    model_name: model_name.to_string(),
                    model_params: ModelParams { max_tokens },
                },
                filtering_module_config: None,
                masking_module_config: None,
            },
        }
    }

    /// Screens both input and output with Azure Content Safety at the strictest threshold.
    pub fn with_content_filtering(mut self) -> Self {
        let stage = || FilterStage {
            filters: vec![ContentFilter {
                filter_type: "azure_content_safety",
                config: AzureThresholds {
                    hate: ALLOW_SAFE,
                    self_harm: ALLOW_SAFE,
                    sexual: ALLOW_SAFE,
                    violence: ALLOW_SAFE,
                },
            }],
        };
        self.module_configurations.filtering_module_config = Some(FilteringConfig {
            input: stage(),
            output: stage(),
        });
        self
    }

    /// Anonymizes personal data in the query before it reaches the model.
    pub fn with_data_masking(mut self) -> Self {
        self.module_configurations.masking_module_config = Some(MaskingConfig {
            masking_providers: vec![MaskingProvider {
                provider_type: "sap_data_privacy_integration",
                method: "anonymization",
                entities: MASKED_ENTITIES
                    .iter()
                    .map(|&entity_type| MaskingEntity { entity_type })
                    .collect(),
            }],
        });
        self
    }

    pub fn model_name(&self) -> &str {
        &self.module_configurations.llm_module_config.model_name
    }

    pub fn template(&self) -> &[ChatMessage] {
        &self.module_configurations.templating_module_config.template
    }
}
