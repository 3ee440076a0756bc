use std::sync::Arc;

use deepchat_core::{
    error::Result,
    generic::{GenericChatCompletionResponse, GenericUsageReport},
    provider::{ChatCompleteParameters, ChatCompletionProvider},
};

use crate::{
    DeepSeekAdapter,
    api_v1::{ChatCompletionMessage, ChatCompletionRequest, FinishReason},
    error::DeepSeekError,
};

impl ChatCompletionProvider for DeepSeekAdapter {
    type Message = ChatCompletionMessage;

    fn chat_complete<'p, M>(
        &self,
        params: ChatCompleteParameters<M>,
    ) -> std::pin::Pin<Box<dyn Future<Output = Result<GenericChatCompletionResponse>> + Send + 'p>>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 'p,
    {
        let client = Arc::clone(&self.client);

        Box::pin(async move {
            let request: ChatCompletionRequest = params.try_into()?;

            let mut response = client.chat_completion(request).await?;

            let usage_report = GenericUsageReport {
                prompt_tokens: response.usage.prompt_tokens as i64,
                completion_tokens: response.usage.completion_tokens as i64,
                total_tokens: response.usage.total_tokens as i64,
            };

            let Some(first_choice) = response.choices.drain(..).next() else {
                return Err(DeepSeekError::Format("response has no choices".into()).into());
            };

            match first_choice.finish_reason {
                Some(FinishReason::InsufficientSystemResource) => Err(DeepSeekError::Format(
                    "generation aborted: insufficient system resource".into(),
                )
                .into()),
                // `length` and `content_filter` still carry whatever text was
                // produced before the cut-off; hand it to the caller.
                None
                | Some(FinishReason::Stop)
                | Some(FinishReason::Length)
                | Some(FinishReason::ContentFilter) => Ok(GenericChatCompletionResponse {
                    message: first_choice.message.into(),
                    usage: Some(usage_report),
                }),
            }
        })
    }
}
