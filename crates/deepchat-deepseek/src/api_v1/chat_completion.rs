use deepchat_core::error::DeepchatError;
use deepchat_core::generic::{GenericMessage, GenericRole};
use deepchat_core::provider::ChatCompleteParameters;
use serde::{Deserialize, Serialize};

use crate::impl_builder_methods;
use crate::model_map::map_model;

use super::common;

/// Request body for `POST /chat/completions`.
///
/// Every optional field is skipped during serialisation when unset, so the
/// wire payload stays as small as the hand-written JSON the API docs show.
#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatCompletionMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
}

impl ChatCompletionRequest {
    pub fn new(model: String, messages: Vec<ChatCompletionMessage>) -> Self {
        Self {
            model,
            messages,
            temperature: None,
            top_p: None,
            max_tokens: None,
            stop: None,
            response_format: None,
            stream: None,
        }
    }
}

impl_builder_methods!(
    ChatCompletionRequest,
    temperature: f64,
    top_p: f64,
    max_tokens: i64,
    stop: Vec<String>,
    response_format: serde_json::Value,
    stream: bool
);

impl<M> TryFrom<ChatCompleteParameters<M>> for ChatCompletionRequest
where
    M: Into<ChatCompletionMessage> + Clone,
{
    type Error = DeepchatError;

    fn try_from(value: ChatCompleteParameters<M>) -> Result<Self, Self::Error> {
        Ok(Self {
            model: map_model(&value.model)
                .ok_or(DeepchatError::InvalidRequest(format!(
                    "backend does not support selected model: {:?}",
                    value.model
                )))?
                .into(),
            messages: value.messages.into_iter().map(Into::into).collect(),
            temperature: value.temperature,
            top_p: None,
            max_tokens: value.max_tokens,
            stop: value.stop,
            response_format: value.response_format,
            stream: None,
        })
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    System,
    Assistant,
}

/// A chat message as sent **to** the API.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ChatCompletionMessage {
    pub role: MessageRole,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A chat message as returned **by** the API.
///
/// `reasoning_content` carries the chain-of-thought text the
/// `deepseek-reasoner` model emits before its final answer; it is absent for
/// `deepseek-chat`.
#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionMessageForResponse {
    pub role: MessageRole,
    pub content: Option<String>,
    pub reasoning_content: Option<String>,
    pub name: Option<String>,
}

impl From<ChatCompletionMessageForResponse> for GenericMessage {
    fn from(value: ChatCompletionMessageForResponse) -> Self {
        GenericMessage {
            content: value.content,
            role: value.role.into(),
            name: value.name,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: i64,
    pub message: ChatCompletionMessageForResponse,
    pub finish_reason: Option<FinishReason>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: Option<String>,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: common::Usage,
    pub system_fingerprint: Option<String>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    InsufficientSystemResource,
}

impl From<GenericRole> for MessageRole {
    fn from(value: GenericRole) -> Self {
        match value {
            GenericRole::System => MessageRole::System,
            GenericRole::Assistant => MessageRole::Assistant,
            GenericRole::User => MessageRole::User,
        }
    }
}

impl From<MessageRole> for GenericRole {
    fn from(value: MessageRole) -> Self {
        match value {
            MessageRole::User => GenericRole::User,
            MessageRole::System => GenericRole::System,
            MessageRole::Assistant => GenericRole::Assistant,
        }
    }
}

impl From<GenericMessage> for ChatCompletionMessage {
    fn from(value: GenericMessage) -> Self {
        Self {
            role: value.role.into(),
            content: value.content.unwrap_or_default(),
            name: value.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deepchat_core::model::{DeepSeekModel, Model};

    fn user_message(content: &str) -> ChatCompletionMessage {
        ChatCompletionMessage {
            role: MessageRole::User,
            content: content.into(),
            name: None,
        }
    }

    #[test]
    fn minimal_request_serialises_without_optional_fields() {
        let request =
            ChatCompletionRequest::new("deepseek-chat".into(), vec![user_message("hello")]);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "model": "deepseek-chat",
                "messages": [{"role": "user", "content": "hello"}],
            })
        );
    }

    #[test]
    fn sampling_controls_appear_when_set() {
        let request =
            ChatCompletionRequest::new("deepseek-chat".into(), vec![user_message("hello")])
                .temperature(1.2)
                .max_tokens(10)
                .stop(vec!["\n\n".into()])
                .stream(true);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["temperature"], serde_json::json!(1.2));
        assert_eq!(json["max_tokens"], serde_json::json!(10));
        assert_eq!(json["stop"], serde_json::json!(["\n\n"]));
        assert_eq!(json["stream"], serde_json::json!(true));
    }

    #[test]
    fn parameters_convert_into_wire_request() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("why water?")],
            Model::DeepSeek(DeepSeekModel::Chat),
        )
        .with_temperature(0.7)
        .with_stop(vec!["\n\n".into()]);

        let request = ChatCompletionRequest::try_from(params).unwrap();
        assert_eq!(request.model, "deepseek-chat");
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.temperature, Some(0.7));
        assert_eq!(request.stop.as_deref(), Some(&["\n\n".to_string()][..]));
    }

    #[test]
    fn finish_reasons_parse_from_wire_names() {
        assert_eq!(
            serde_json::from_str::<FinishReason>("\"length\"").unwrap(),
            FinishReason::Length
        );
        assert_eq!(
            serde_json::from_str::<FinishReason>("\"insufficient_system_resource\"").unwrap(),
            FinishReason::InsufficientSystemResource
        );
    }

    #[test]
    fn response_with_reasoning_content_deserialises() {
        let body = serde_json::json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "created": 1_726_000_000,
            "model": "deepseek-reasoner",
            "choices": [{
                "index": 0,
                "message": {
                    "role": "assistant",
                    "content": "4",
                    "reasoning_content": "2 + 2 is 4."
                },
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12}
        });

        let parsed: ChatCompletionResponse = serde_json::from_value(body).unwrap();
        let choice = &parsed.choices[0];
        assert_eq!(choice.message.content.as_deref(), Some("4"));
        assert_eq!(choice.message.reasoning_content.as_deref(), Some("2 + 2 is 4."));
        assert_eq!(choice.finish_reason, Some(FinishReason::Stop));
    }
}
