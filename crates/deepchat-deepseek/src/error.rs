use deepchat_core::error::DeepchatError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum DeepSeekError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("couldn’t serialise body: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("DeepSeek returned non-success status {status}: {body}")]
    Api { status: StatusCode, body: String },

    #[error("DeepSeek format error: {0}")]
    Format(String),

    /// The in-flight call was cancelled through the request’s
    /// [`CancellationToken`](tokio_util::sync::CancellationToken).  Kept
    /// distinct from [`Self::Http`] so callers can tell “server closed the
    /// connection” apart from “we asked it to stop” and silence the latter.
    #[error("request cancelled")]
    Cancelled,
}

impl From<DeepSeekError> for DeepchatError {
    fn from(value: DeepSeekError) -> Self {
        DeepchatError::Backend(Box::new(value))
    }
}
