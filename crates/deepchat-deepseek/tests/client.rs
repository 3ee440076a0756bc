//! Integration tests for the DeepSeek client using wiremock.

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use deepchat_core::generic::GenericMessage;
use deepchat_core::model::{DeepSeekModel, Model};
use deepchat_core::provider::{ChatCompleteParameters, ChatCompletionProvider, StreamingChatProvider};
use deepchat_deepseek::api_v1::{ChatCompletionMessage, ChatCompletionRequest, MessageRole};
use deepchat_deepseek::error::DeepSeekError;
use deepchat_deepseek::{DeepSeekAdapterBuilder, DeepSeekClient};

fn minimal_request() -> ChatCompletionRequest {
    ChatCompletionRequest::new(
        "deepseek-chat".into(),
        vec![ChatCompletionMessage {
            role: MessageRole::User,
            content: "Hello".into(),
            name: None,
        }],
    )
}

fn success_response_body() -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1_726_000_000,
        "model": "deepseek-chat",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": "Hello! How can I help you today?"
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 12,
            "completion_tokens": 10,
            "total_tokens": 22
        }
    })
}

const SSE_BODY: &str = "data: {\"id\":\"c1\",\"object\":\"chat.completion.chunk\",\"created\":1,\"model\":\"deepseek-chat\",\"choices\":[{\"index\":0,\"delta\":{\"role\":\"assistant\",\"content\":\"\"},\"finish_reason\":null}]}\n\n\
data: {\"id\":\"c1\",\"object\":\"chat.completion.chunk\",\"created\":1,\"model\":\"deepseek-chat\",\"choices\":[{\"index\":0,\"delta\":{\"content\":\"Hello\"},\"finish_reason\":null}]}\n\n\
data: {\"id\":\"c1\",\"object\":\"chat.completion.chunk\",\"created\":1,\"model\":\"deepseek-chat\",\"choices\":[{\"index\":0,\"delta\":{\"content\":\" world\"},\"finish_reason\":\"stop\"}]}\n\n\
data: [DONE]\n\n";

#[tokio::test]
async fn chat_completion_sends_expected_headers_and_parses_reply() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("test-key", reqwest::Client::new(), Some(server.uri()));
    let response = client.chat_completion(minimal_request()).await.unwrap();

    assert_eq!(response.model, "deepseek-chat");
    assert_eq!(
        response.choices[0].message.content.as_deref(),
        Some("Hello! How can I help you today?")
    );
    assert_eq!(response.usage.total_tokens, 22);
}

#[tokio::test]
async fn non_success_status_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("{\"error\":\"bad key\"}"))
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("wrong-key", reqwest::Client::new(), Some(server.uri()));
    let err = client.chat_completion(minimal_request()).await.unwrap_err();

    match err {
        DeepSeekError::Api { status, body } => {
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("bad key"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn chat_completion_text_extracts_reply_tolerantly() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body()))
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("test-key", reqwest::Client::new(), Some(server.uri()));
    let text = client.chat_completion_text(minimal_request()).await.unwrap();

    assert_eq!(text.as_deref(), Some("Hello! How can I help you today?"));
}

#[tokio::test]
async fn chat_completion_text_returns_none_when_content_is_missing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"choices": [{"message": {"role": "assistant"}}]})),
        )
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("test-key", reqwest::Client::new(), Some(server.uri()));
    let text = client.chat_completion_text(minimal_request()).await.unwrap();

    assert_eq!(text, None);
}

#[tokio::test]
async fn streaming_yields_chunks_until_sentinel() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({"stream": true})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(SSE_BODY, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("test-key", reqwest::Client::new(), Some(server.uri()));
    let stream = client.chat_completion_stream(minimal_request(), CancellationToken::new());
    futures_util::pin_mut!(stream);

    let mut fragments = Vec::new();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.unwrap();
        if let Some(text) = deepchat_deepseek::api_v1::sse::delta_fragment(chunk) {
            fragments.push(text);
        }
    }

    assert_eq!(fragments, vec!["Hello".to_string(), " world".to_string()]);
}

#[tokio::test]
async fn adapter_stream_yields_text_deltas() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(SSE_BODY, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let backend = DeepSeekAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .build()
        .unwrap();

    let params = ChatCompleteParameters::new(
        vec![GenericMessage::user("Hello")],
        Model::DeepSeek(DeepSeekModel::Chat),
    );

    let mut stream = backend.chat_complete_stream(params);
    let mut collected = String::new();
    while let Some(delta) = stream.next().await {
        collected.push_str(&delta.unwrap());
    }

    assert_eq!(collected, "Hello world");
}

#[tokio::test]
async fn adapter_chat_complete_returns_message_and_usage() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(success_response_body()))
        .mount(&server)
        .await;

    let backend = DeepSeekAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .build()
        .unwrap();

    let params = ChatCompleteParameters::new(
        vec![GenericMessage::user("Hello")],
        Model::DeepSeek(DeepSeekModel::Chat),
    );

    let response = backend.chat_complete(params).await.unwrap();
    assert_eq!(
        response.message.content.as_deref(),
        Some("Hello! How can I help you today?")
    );
    assert_eq!(response.usage.unwrap().total_tokens, 22);
}

#[tokio::test]
async fn streaming_error_status_ends_the_stream_with_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{\"error\":\"overloaded\"}"))
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("test-key", reqwest::Client::new(), Some(server.uri()));
    let stream = client.chat_completion_stream(minimal_request(), CancellationToken::new());
    futures_util::pin_mut!(stream);

    match stream.next().await {
        Some(Err(DeepSeekError::Api { status, body })) => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("overloaded"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
    assert!(stream.next().await.is_none());
}

// The delta stream may borrow the backend; this only type-checks when the
// trait ties the stream lifetime to `&self`.
fn open_stream<'a>(
    backend: &'a deepchat_deepseek::DeepSeekAdapter,
    params: ChatCompleteParameters<GenericMessage>,
) -> <deepchat_deepseek::DeepSeekAdapter as StreamingChatProvider>::Delta<'a> {
    backend.chat_complete_stream(params)
}

#[tokio::test]
async fn stream_stays_usable_while_borrowing_the_adapter() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(SSE_BODY, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let backend = DeepSeekAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .build()
        .unwrap();

    let params = ChatCompleteParameters::new(
        vec![GenericMessage::user("Hello")],
        Model::DeepSeek(DeepSeekModel::Chat),
    );

    let mut stream = open_stream(&backend, params);
    let mut collected = String::new();
    while let Some(delta) = stream.next().await {
        collected.push_str(&delta.unwrap());
    }

    assert_eq!(collected, "Hello world");
}

#[tokio::test]
async fn adapter_chat_complete_uses_the_first_choice() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "id": "chatcmpl-abc123",
        "object": "chat.completion",
        "created": 1_726_000_000,
        "model": "deepseek-chat",
        "choices": [
            {
                "index": 0,
                "message": {"role": "assistant", "content": "first"},
                "finish_reason": "stop"
            },
            {
                "index": 1,
                "message": {"role": "assistant", "content": "second"},
                "finish_reason": "stop"
            }
        ],
        "usage": {"prompt_tokens": 1, "completion_tokens": 2, "total_tokens": 3}
    });
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let backend = DeepSeekAdapterBuilder::new()
        .with_api_key("test-key")
        .with_base_url(server.uri())
        .build()
        .unwrap();

    let params = ChatCompleteParameters::new(
        vec![GenericMessage::user("Hello")],
        Model::DeepSeek(DeepSeekModel::Chat),
    );

    let response = backend.chat_complete(params).await.unwrap();
    assert_eq!(response.message.content.as_deref(), Some("first"));
}

#[tokio::test]
async fn cancelled_token_short_circuits_the_stream() {
    let server = MockServer::start().await;

    // The request must never reach the server.
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("test-key", reqwest::Client::new(), Some(server.uri()));
    let token = CancellationToken::new();
    token.cancel();

    let stream = client.chat_completion_stream(minimal_request(), token);
    futures_util::pin_mut!(stream);

    match stream.next().await {
        Some(Err(DeepSeekError::Cancelled)) => {}
        other => panic!("expected Cancelled, got {other:?}"),
    }
    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn body_ending_without_sentinel_completes_normally() {
    let server = MockServer::start().await;

    let body = "data: {\"choices\":[{\"delta\":{\"content\":\"tail\"}}]}\n\n";
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/event-stream")
                .set_body_raw(body, "text/event-stream"),
        )
        .mount(&server)
        .await;

    let client = DeepSeekClient::with_http("test-key", reqwest::Client::new(), Some(server.uri()));
    let stream = client.chat_completion_stream(minimal_request(), CancellationToken::new());
    futures_util::pin_mut!(stream);

    let first = stream.next().await.unwrap().unwrap();
    assert_eq!(
        deepchat_deepseek::api_v1::sse::delta_fragment(first).as_deref(),
        Some("tail")
    );
    assert!(stream.next().await.is_none());
}
