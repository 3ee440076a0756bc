use async_stream::try_stream;

use futures_core::Stream;
use futures_util::StreamExt;
use futures_util::future::Either;
use reqwest::{
    Client as HttpClient,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

use crate::{
    api_v1::{
        ChatCompletionChunkResponse, ChatCompletionRequest, ChatCompletionResponse,
        sse::{self, SseLine},
    },
    error::DeepSeekError,
};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Minimal HTTP client for DeepSeek’s *chat/completions* endpoint.
///
/// * One request ▶ one response, or one request ▶ one SSE chunk stream.
/// * Accepts and returns the `api_v1` request / response structs defined
///   in this crate.
/// * Shares a single `reqwest::Client`, so cloning `DeepSeekClient` is cheap.
#[derive(Clone)]
pub struct DeepSeekClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl DeepSeekClient {
    /// Convenience constructor building a default `reqwest` client:
    /// 120 s timeout (streamed answers can take a while), Rustls TLS.
    pub fn new(api_key: impl Into<String>) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .expect("building reqwest client");

        Self::with_http(api_key, http, None)
    }

    /// Build with a custom `reqwest::Client` in case the caller needs proxy
    /// settings, custom TLS, etc., and/or a non-default base URL (test
    /// servers, self-hosted gateways).
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key)).unwrap(),
        );
        headers
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base)
    }

    /// Perform a **non-streaming** chat completion.
    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, DeepSeekError> {
        let bytes = self.send(&request).await?;
        let parsed: ChatCompletionResponse = serde_json::from_slice(&bytes)?;
        Ok(parsed)
    }

    /// Perform a non-streaming chat completion and return only the reply
    /// text, extracted tolerantly from the raw body.
    ///
    /// `Ok(None)` means the call succeeded but no `message.content` string
    /// could be located (e.g. a content-filtered answer).
    pub async fn chat_completion_text(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<Option<String>, DeepSeekError> {
        let bytes = self.send(&request).await?;
        let body = std::str::from_utf8(&bytes)
            .map_err(|e| DeepSeekError::Format(format!("response body is not UTF-8: {e}")))?;
        Ok(sse::extract_content(body))
    }

    async fn send(&self, request: &ChatCompletionRequest) -> Result<bytes::Bytes, DeepSeekError> {
        tracing::debug!(model = %request.model, "sending chat completion request");

        let resp = self
            .http
            .post(self.endpoint())
            .headers(self.headers())
            .json(request)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            tracing::warn!(%status, "chat completion request failed");
            return Err(DeepSeekError::Api { status, body });
        }

        Ok(resp.bytes().await?)
    }

    /// Perform a **streaming** chat completion.
    ///
    /// The returned stream yields one [`ChatCompletionChunkResponse`] per
    /// decoded SSE payload and ends at the `[DONE]` sentinel (or when the
    /// body ends without one, which is treated as normal completion).
    ///
    /// Cancellation is cooperative: between network reads the stream
    /// observes `cancel`, and when the token fires the next item is
    /// [`DeepSeekError::Cancelled`] after which the stream ends.
    pub fn chat_completion_stream(
        &self,
        mut request: ChatCompletionRequest,
        cancel: CancellationToken,
    ) -> impl Stream<Item = Result<ChatCompletionChunkResponse, DeepSeekError>> + '_ {
        // 1) enforce streaming flag
        request.stream = Some(true);

        // 2) headers (incl. SSE accept)
        let mut headers = self.headers();
        headers.insert(ACCEPT, HeaderValue::from_static("text/event-stream"));

        let url = self.endpoint();

        // 3) async stream wrapper
        try_stream! {
            if cancel.is_cancelled() {
                return Err(DeepSeekError::Cancelled)?;
            }

            tracing::debug!(model = %request.model, "starting chat completion stream");

            let resp = self.http.post(url).headers(headers).json(&request).send().await?;

            if !resp.status().is_success() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                tracing::warn!(%status, "chat completion stream request failed");
                return Err(DeepSeekError::Api { status, body })?;
            }

            let mut bytes_stream = resp.bytes_stream();
            let mut buf: Vec<u8> = Vec::new();

            let cancelled = cancel.cancelled();
            futures_util::pin_mut!(cancelled);

            loop {
                let chunk = {
                    let next = bytes_stream.next();
                    futures_util::pin_mut!(next);
                    match futures_util::future::select(next, &mut cancelled).await {
                        Either::Left((Some(chunk), _)) => chunk?,
                        // Body exhausted without a sentinel: normal completion.
                        Either::Left((None, _)) => return,
                        Either::Right(((), _)) => {
                            tracing::debug!("chat completion stream cancelled");
                            return Err(DeepSeekError::Cancelled)?;
                        }
                    }
                };
                buf.extend_from_slice(&chunk);

                // Process every complete line; a partial line stays buffered
                // until the next read. Splitting on `\n` keeps multi-byte
                // UTF-8 sequences intact because `\n` never occurs inside one.
                while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
                    let line_bytes: Vec<u8> = buf.drain(..=pos).collect();
                    let line = std::str::from_utf8(&line_bytes[..pos])
                        .map_err(|e| DeepSeekError::Format(format!("stream is not UTF-8: {e}")))?
                        .trim_end_matches('\r');

                    match sse::parse_line(line) {
                        SseLine::Ignored | SseLine::Malformed => {}
                        SseLine::Done => return,
                        SseLine::Chunk(parsed) => yield parsed,
                    }
                }
            }
        }
    }
}
