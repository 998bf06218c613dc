// All prompt text and the response schema for remote classification.

use serde_json::{json, Value};

/// Lead-in of the user message. The query follows it, verbatim or masked.
pub const USER_PROMPT_PREFIX: &str = "Classify this query:";

/// User message template. `{{?user_query}}` is filled by the orchestration service.
pub const USER_PROMPT_TEMPLATE: &str = "Classify this query: {{?user_query}}";

/// System prompt template. Replace `{topics}` with the rendered catalog before sending.
pub const CLASSIFY_SYSTEM_TEMPLATE: &str = "\
You are an expert at classifying HR and Talent Management queries.
Available Talent Management topics:
{topics}

Rules:
- If the query is clearly about Talent Management, set is_talent_management to true
- Choose the single most relevant topic from the list above
- If ambiguous, choose the most likely topic
- If NOT about Talent Management, set is_talent_management to false and topic to null
- Confidence should reflect classification certainty (0.0-1.0)
- Generate a brief, helpful summary (1-2 sentences) that:
  - Acknowledges what the user is asking about
  - If TM-related, mentions you'll provide relevant resources
  - Is natural and conversational, not robotic";

pub const SCHEMA_NAME: &str = "classification_result";
pub const SCHEMA_DESCRIPTION: &str = "Intent classification result";

pub fn system_prompt(rendered_topics: &str) -> String {
    CLASSIFY_SYSTEM_TEMPLATE.replace("{topics}", rendered_topics)
}

/// JSON schema the model output must match exactly.
pub fn classification_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "is_talent_management": {"type": "boolean"},
            "confidence": {"type": "number", "minimum": 0, "maximum": 1},
            "topic": {"type": ["string", "null"]},
            "reasoning": {"type": "string"},
            "summary": {"type": "string"}
        },
        "required": ["is_talent_management", "confidence", "topic", "reasoning", "summary"],
        "additionalProperties": false
    })
}
