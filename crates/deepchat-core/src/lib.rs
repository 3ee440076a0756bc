//! # `deepchat-core` – provider-agnostic building blocks
//!
//! This crate defines the small vocabulary shared by every backend crate in
//! the workspace:
//!
//! * [`generic`] – chat messages, roles and response containers that are
//!   independent of any concrete provider wire format.
//! * [`provider`] – the [`ChatCompletionProvider`](provider::ChatCompletionProvider)
//!   and [`StreamingChatProvider`](provider::StreamingChatProvider) traits a
//!   backend implements, plus [`ChatCompleteParameters`](provider::ChatCompleteParameters).
//! * [`model`] – typed model identifiers, so application code never spells
//!   out literal strings such as `"deepseek-chat"`.
//! * [`error`] – the unified [`DeepchatError`](error::DeepchatError) type and
//!   `Result` alias.
//!
//! The crate deliberately contains **no HTTP, no I/O and no async runtime
//! dependency** – backends bring their own transport.

pub mod error;
pub mod generic;
pub mod model;
pub mod provider;
