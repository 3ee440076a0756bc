use std::borrow::Cow;

use deepchat_core::model::{DeepSeekModel, Model};

pub const DEEPSEEK_CHAT: &str = "deepseek-chat";
pub const DEEPSEEK_REASONER: &str = "deepseek-reasoner";

pub(crate) fn map_model(model: &Model) -> Option<Cow<'static, str>> {
    match model {
        Model::Custom(custom) => Some(Cow::Borrowed(custom)),
        Model::DeepSeek(DeepSeekModel::Chat) => Some(DEEPSEEK_CHAT.into()),
        Model::DeepSeek(DeepSeekModel::Reasoner) => Some(DEEPSEEK_REASONER.into()),
    }
}
