use std::pin::Pin;

use crate::DeepSeekAdapter;
use crate::api_v1::{ChatCompletionRequest, sse};
use deepchat_core::error::{DeepchatError, Result};
use deepchat_core::provider::{ChatCompleteParameters, StreamingChatProvider};
use futures_core::stream::Stream;

impl StreamingChatProvider for DeepSeekAdapter {
    type Delta<'s>
        = Pin<Box<dyn Stream<Item = Result<String>> + Send + 's>>
    where
        Self: 's;

    fn chat_complete_stream<'s, M>(&'s self, params: ChatCompleteParameters<M>) -> Self::Delta<'s>
    where
        M: Into<Self::Message> + Clone + Send + Sync + 's,
    {
        let client = self.client.clone();
        let cancel = params.cancellation_token.clone();

        Box::pin(async_stream::try_stream! {
            use futures_util::StreamExt;

            let request: ChatCompletionRequest = params.try_into()?;

            let stream = client.chat_completion_stream(request, cancel);
            futures_util::pin_mut!(stream);

            while let Some(chunk) = stream.next().await {
                let chunk = chunk.map_err(DeepchatError::from)?;
                if let Some(text) = sse::delta_fragment(chunk) {
                    yield text;
                }
            }
        })
    }
}
