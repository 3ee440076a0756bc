//! Model identifiers used throughout the **deepchat** workspace.
//!
//! The enum hierarchy keeps the *public* API blissfully simple while allowing
//! each provider crate to map the variants onto its own naming scheme.  As a
//! consequence you never have to type literal strings such as
//! `"deepseek-chat"` in your application code—pick an enum variant instead
//! and let the adapter translate it.
//!
//! # Adding more models
//!
//! 1. **Provider–specific enum**
//!    Add the variant to the sub-enum (`DeepSeekModel`, …).
//! 2. **Mapping layer**
//!    Update the mapping function in the provider crate
//!    (`deepchat-deepseek::model_map::map_model`, etc.).
//! 3. **Compile-time safety**
//!    The compiler will tell you if you forgot to handle the new variant in
//!    `From<T> for Model` or in provider match statements.
//!
//! # Example
//!
//! ```rust
//! use deepchat_core::model::{DeepSeekModel, Model};
//! assert_eq!(Model::from(DeepSeekModel::Chat),
//!            Model::DeepSeek(DeepSeekModel::Chat));
//! ```

/// Universal identifier for an LLM model.
///
/// * `DeepSeek` – Enumerated list of officially supported DeepSeek models.
/// * `Custom` – Any provider / model name not yet covered by a dedicated
///   enum. Use this if you run a self-hosted or beta model.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    /// Built-in DeepSeek models (chat completion API).
    DeepSeek(DeepSeekModel),
    /// Fully qualified model ID as accepted by the provider.
    Custom(&'static str),
}

/// Exhaustive list of models **officially** supported by the DeepSeek
/// back-end.
///
/// Keeping the list small avoids accidental typos while still allowing
/// arbitrary model names through [`Model::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeepSeekModel {
    /// General-purpose chat model (`deepseek-chat`).
    Chat,
    /// Reasoning model with chain-of-thought output (`deepseek-reasoner`).
    Reasoner,
}

impl From<DeepSeekModel> for Model {
    fn from(val: DeepSeekModel) -> Self {
        Model::DeepSeek(val)
    }
}
