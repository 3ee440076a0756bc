//! # `deepchat` – The umbrella crate
//!
//! This crate is a *one-stop import* that glues together the building-block
//! crates in the workspace
//!
//! | Crate                   | What it provides                                                              |
//! |-------------------------|-------------------------------------------------------------------------------|
//! | **`deepchat-core`**     | Provider-agnostic traits, message/model/error types                           |
//! | **`deepchat-deepseek`** | Thin HTTP client + SSE stream decoder for the DeepSeek chat API *(optional)*  |
//!
//! By default the crate re-exports **core** and the **deepseek** backend so
//! a single dependency line is enough to access the whole stack:
//!
//! ```toml
//! [dependencies]
//! deepchat = "0.1"
//! ```
//!
//! Disable default features to stay provider-agnostic (no `reqwest`, no TLS
//! in your dependency tree).
//!
//! ## Design philosophy
//!
//! * **Opt-in providers** – enabling `deepseek` pulls in `reqwest`, TLS,
//!   etc., otherwise your binary stays lean.
//! * **No procedural macros** – everything is powered by ordinary traits and
//!   `impl`s so you can understand and extend the code without magic.
//! * **Tolerant stream decoding** – SSE payloads without a text delta are
//!   skipped, not fatal; see `deepchat_deepseek::api_v1::sse`.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use deepchat::{
//!     generic::GenericMessage,
//!     model::{DeepSeekModel, Model},
//!     provider::{ChatCompleteParameters, ChatCompletionProvider as _},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = deepchat::deepseek::DeepSeekAdapterBuilder::new_from_env().build()?;
//!
//!     let params = ChatCompleteParameters::new(
//!         vec![GenericMessage::user("Why drink water?")],
//!         Model::DeepSeek(DeepSeekModel::Chat),
//!     );
//!
//!     let response = backend.chat_complete(params).await?;
//!     println!("{}", response.message.content.unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! The runnable programs under `examples/` mirror the classic console
//! experiments: format comparison, temperature comparison, a multi-agent
//! logic-task pipeline and cancel-on-keypress streaming.
#![doc(html_root_url = "https://docs.rs/deepchat/latest")]

pub use deepchat_core::*;

#[cfg(feature = "deepseek")]
pub use deepchat_deepseek as deepseek;
