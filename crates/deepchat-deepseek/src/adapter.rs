use std::{env, sync::Arc};

use deepchat_core::error::{DeepchatError, Result};

use crate::client::DeepSeekClient;

/// Thin wrapper that wires the HTTP client [`DeepSeekClient`] into a value
/// that implements the `deepchat-core` provider traits.
///
/// Think of it as the **service locator** for the DeepSeek back-end:
///
/// * stores the API key (and optionally a custom base URL),
/// * owns a shareable, connection-pooled `reqwest::Client`,
/// * provides a fluent [`DeepSeekAdapterBuilder`] so callers don’t have to
///   juggle `Option<String>` manually.
pub struct DeepSeekAdapter {
    pub(crate) client: Arc<DeepSeekClient>,
}

/// Builder for [`DeepSeekAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use deepchat_deepseek::DeepSeekAdapterBuilder;
///
/// let backend = DeepSeekAdapterBuilder::new_from_env()
///     .build()
///     .expect("DEEPSEEK_API_KEY must be set");
/// ```
///
/// The builder pattern keeps future options (proxy URL, organisation ID, …)
/// backwards compatible without breaking existing `build()` calls.
#[derive(Default)]
pub struct DeepSeekAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
}

impl DeepSeekAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API key manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that tries to load the `DEEPSEEK_API_KEY`
    /// environment variable.
    ///
    /// # Panics
    ///
    /// Never panics. Missing keys only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var("DEEPSEEK_API_KEY").ok(),
            base_url: None,
        }
    }

    /// Supply the API key directly.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at a different endpoint (test servers, gateways).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`DeepchatError::Invalid`] – if the API key is missing.
    pub fn build(self) -> Result<DeepSeekAdapter> {
        let api_key = self.api_key.ok_or(DeepchatError::Invalid(
            "missing env variable: `DEEPSEEK_API_KEY`".into(),
        ))?;

        let client = match self.base_url {
            Some(base) => DeepSeekClient::with_http(api_key, reqwest::Client::new(), Some(base)),
            None => DeepSeekClient::new(api_key),
        };

        Ok(DeepSeekAdapter {
            client: Arc::new(client),
        })
    }
}
