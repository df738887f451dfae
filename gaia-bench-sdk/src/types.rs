//! Wire types for the chat-completions endpoint

use gaia_bench_core::{ChatMessage, Completion, CompletionRequest, ResponseSchema};
use serde::{Deserialize, Serialize};

/// Request body for `POST /chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model identifier, passed through verbatim
    pub model: &'a str,
    /// Conversation so far
    pub messages: &'a [ChatMessage],
    /// Structured output constraint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat<'a>>,
}

impl<'a> From<&'a CompletionRequest> for ChatCompletionRequest<'a> {
    fn from(request: &'a CompletionRequest) -> Self {
        Self {
            model: request.model.as_str(),
            messages: &request.messages,
            response_format: request.response_schema.as_ref().map(ResponseFormat::json_schema),
        }
    }
}

/// `response_format` object
#[derive(Debug, Clone, Serialize)]
pub struct ResponseFormat<'a> {
    /// Always `json_schema`
    #[serde(rename = "type")]
    pub kind: &'static str,
    /// Schema the reply must satisfy
    pub json_schema: &'a ResponseSchema,
}

impl<'a> ResponseFormat<'a> {
    /// Wrap a schema as a `json_schema` response format
    pub fn json_schema(schema: &'a ResponseSchema) -> Self {
        Self {
            kind: "json_schema",
            json_schema: schema,
        }
    }
}

/// Response body of `POST /chat/completions`
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Completion choices, first one is used
    #[serde(default)]
    pub choices: Vec<Choice>,
}

/// A single completion choice
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// Assistant message
    pub message: ResponseMessage,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message inside a choice
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Text content, absent on refusals and tool calls
    #[serde(default)]
    pub content: Option<String>,
    /// Refusal text from providers that report it separately
    #[serde(default)]
    pub refusal: Option<String>,
}

impl From<Choice> for Completion {
    fn from(choice: Choice) -> Self {
        // A separate refusal field means the content is not a real answer.
        let finish_reason = match choice.message.refusal {
            Some(_) => Some("refusal".to_string()),
            None => choice.finish_reason,
        };

        Completion {
            content: choice.message.content,
            finish_reason,
        }
    }
}
