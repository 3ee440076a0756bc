use std::{future::Future, pin::Pin};

use crate::{error::Result, generic::GenericChatCompletionResponse, model::Model};
use futures_core::stream::Stream;
use tokio_util::sync::CancellationToken;

/// A **backend** turns a chat prompt into a network call to a concrete
/// provider (DeepSeek, OpenAI, …) and parses the structured chat response.
///
/// The trait is intentionally minimal:
///
/// * **One associated type** – the in-memory `Message` representation this
///   provider accepts.
/// * **One async-ish method** – `chat_complete`, which performs a *single*
///   non-streaming round-trip and returns the assistant message together
///   with token usage.
pub trait ChatCompletionProvider: Send + Sync {
    /// Chat message type consumed by this backend.
    type Message: Send + Sync + 'static;

    /// Execute the chat prompt and return the provider’s reply.
    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p;
}

/// A provider that can deliver the model’s answer **incrementally**.
///
/// The stream yields UTF-8 text *deltas* (the `content` field of the
/// provider’s SSE chunks).  Richer payload support can be layered on later
/// by introducing a dedicated enum – starting with plain text keeps the API
/// minimal and backend-agnostic.
pub trait StreamingChatProvider: ChatCompletionProvider {
    /// The item type returned on the stream.  For now it is plain UTF-8 text
    /// chunks, but back-ends are free to wrap it in richer enums if needed.
    type Delta<'s>: Stream<Item = Result<String>> + Send + 's
    where
        Self: 's;

    /// Start a streaming chat completion.
    ///
    /// The stream ends when the provider signals completion, when the
    /// underlying body ends, or when the parameters’ cancellation token
    /// fires (in which case the last item is a backend cancellation error).
    fn chat_complete_stream<'s, M>(&'s self, params: ChatCompleteParameters<M>) -> Self::Delta<'s>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 's;
}

/// Everything a backend needs to run one chat completion: the conversation,
/// the target model and the sampling controls the demos exercise.
///
/// A fresh [`CancellationToken`] is attached by default, so callers that do
/// not care about cancellation never observe it; callers that do pass their
/// own token via [`Self::with_cancellation_token`] and cancel it from
/// anywhere (another task, a signal handler, a keypress listener).
#[derive(Debug, Clone)]
pub struct ChatCompleteParameters<M: Clone> {
    pub messages: Vec<M>,
    pub model: Model,
    pub temperature: Option<f64>,
    pub max_tokens: Option<i64>,
    pub stop: Option<Vec<String>>,
    pub response_format: Option<serde_json::Value>,
    pub cancellation_token: CancellationToken,
}

impl<M: Clone> ChatCompleteParameters<M> {
    pub fn new(messages: Vec<M>, model: Model) -> Self {
        Self {
            messages,
            model,
            temperature: None,
            max_tokens: None,
            stop: None,
            response_format: None,
            cancellation_token: CancellationToken::new(),
        }
    }

    pub fn messages(&self) -> &Vec<M> {
        &self.messages
    }

    pub fn model(&self) -> Model {
        self.model.clone()
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: i64) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn with_stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn with_response_format(mut self, response_format: serde_json::Value) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn with_cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = token;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generic::GenericMessage;
    use crate::model::DeepSeekModel;

    #[test]
    fn builder_methods_fill_optional_fields() {
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("hi")],
            Model::DeepSeek(DeepSeekModel::Chat),
        )
        .with_temperature(0.7)
        .with_max_tokens(10)
        .with_stop(vec!["\n\n".into()]);

        assert_eq!(params.temperature, Some(0.7));
        assert_eq!(params.max_tokens, Some(10));
        assert_eq!(params.stop.as_deref(), Some(&["\n\n".to_string()][..]));
        assert!(params.response_format.is_none());
        assert!(!params.cancellation_token.is_cancelled());
    }

    #[test]
    fn external_token_is_observable() {
        let token = CancellationToken::new();
        let params = ChatCompleteParameters::new(
            vec![GenericMessage::user("hi")],
            Model::DeepSeek(DeepSeekModel::Chat),
        )
        .with_cancellation_token(token.clone());

        token.cancel();
        assert!(params.cancellation_token.is_cancelled());
    }
}
