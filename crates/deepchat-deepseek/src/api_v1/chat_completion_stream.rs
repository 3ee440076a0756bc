use serde::Deserialize;

use super::chat_completion::{FinishReason, MessageRole};

/// A delta message as returned by DeepSeek when `stream = true`.
///
/// The very first chunk usually carries only the `role`; heartbeat chunks
/// may carry neither field.  Both are valid and simply contribute no text.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessageDelta {
    pub role: Option<MessageRole>,
    pub content: Option<String>,
    pub reasoning_content: Option<String>,
}

/// A single streaming choice payload.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkChoice {
    #[serde(default)]
    pub index: i64,
    pub delta: ChatCompletionMessageDelta,
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,
}

/// The outermost object sent by DeepSeek for each SSE chunk.
///
/// Metadata fields are defaulted rather than required so that abbreviated
/// chunks (as some gateways emit) still decode; only `choices` matters for
/// text extraction.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct ChatCompletionChunkResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChunkChoice>,
}
