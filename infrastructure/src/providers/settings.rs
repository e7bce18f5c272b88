//! Resolved per-provider request settings

use crate::config::FileProviderConfig;
use war_room_domain::ProviderId;

pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    pub id: ProviderId,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
}

impl ProviderSettings {
    pub fn defaults(id: ProviderId) -> Self {
        let (base_url, model) = match id {
            ProviderId::OpenAi => ("https://api.openai.com", "gpt-4o"),
            ProviderId::DeepSeek => ("https://api.deepseek.com", "deepseek-chat"),
            ProviderId::Anthropic => ("https://api.anthropic.com", "claude-3-opus-20240229"),
            ProviderId::Xai => ("https://api.x.ai", "grok-beta"),
            ProviderId::Gemini => (
                "https://generativelanguage.googleapis.com",
                "gemini-1.5-pro-latest",
            ),
            ProviderId::DashScope => ("https://dashscope.aliyuncs.com", "qwen-max"),
        };
        Self {
            id,
            base_url: base_url.to_string(),
            model: model.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    /// Defaults for `id` with the file section's overrides applied
    pub fn from_file(id: ProviderId, file: &FileProviderConfig) -> Self {
        let defaults = Self::defaults(id);
        Self {
            id,
            base_url: file.base_url.clone().unwrap_or(defaults.base_url),
            model: file.model.clone().unwrap_or(defaults.model),
            max_tokens: file.max_tokens.unwrap_or(defaults.max_tokens),
        }
    }
}
