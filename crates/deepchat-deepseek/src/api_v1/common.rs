use serde::{Deserialize, Serialize};

#[macro_export]
macro_rules! impl_builder_methods {
    ($builder:ident, $($field:ident: $field_type:ty),*) => {
        impl $builder {
            $(
                pub fn $field(mut self, $field: $field_type) -> Self {
                    self.$field = Some($field);
                    self
                }
            )*
        }
    };
}

/// Token accounting attached to every non-streaming response.
///
/// DeepSeek additionally reports how much of the prompt was served from its
/// context cache; both cache fields are absent on other deployments, hence
/// the defaults.
#[derive(Debug, Deserialize, Serialize, Clone, Copy)]
pub struct Usage {
    pub prompt_tokens: i32,
    pub completion_tokens: i32,
    pub total_tokens: i32,
    #[serde(default)]
    pub prompt_cache_hit_tokens: i32,
    #[serde(default)]
    pub prompt_cache_miss_tokens: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cache_fields_default_when_absent() {
        let usage: Usage = serde_json::from_str(
            r#"{"prompt_tokens":5,"completion_tokens":7,"total_tokens":12}"#,
        )
        .unwrap();
        assert_eq!(usage.total_tokens, 12);
        assert_eq!(usage.prompt_cache_hit_tokens, 0);
        assert_eq!(usage.prompt_cache_miss_tokens, 0);
    }
}
