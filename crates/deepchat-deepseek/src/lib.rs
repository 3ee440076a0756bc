mod adapter;
mod model_map;
mod provider_impl_chat;
mod provider_impl_chat_stream;

pub use adapter::{DeepSeekAdapter, DeepSeekAdapterBuilder};
pub mod api_v1;
mod client;
pub mod error;

pub use client::DeepSeekClient;
