//! Provider identifier value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// External text-generation services a persona can be backed by (Value Object)
///
/// The built-in roster maps one persona to each provider, but nothing in the
/// gateway contract depends on that pairing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAi,
    DeepSeek,
    Anthropic,
    Xai,
    Gemini,
    DashScope,
}

impl ProviderId {
    /// Every known provider, in display order
    pub const ALL: [ProviderId; 6] = [
        ProviderId::OpenAi,
        ProviderId::DeepSeek,
        ProviderId::Anthropic,
        ProviderId::Xai,
        ProviderId::Gemini,
        ProviderId::DashScope,
    ];

    /// Get the string identifier for this provider
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "openai",
            ProviderId::DeepSeek => "deepseek",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Xai => "xai",
            ProviderId::Gemini => "gemini",
            ProviderId::DashScope => "dashscope",
        }
    }

    /// Conventional environment variable holding this provider's API key
    pub fn default_key_env(&self) -> &'static str {
        match self {
            ProviderId::OpenAi => "OPENAI_API_KEY",
            ProviderId::DeepSeek => "DEEPSEEK_API_KEY",
            ProviderId::Anthropic => "ANTHROPIC_API_KEY",
            ProviderId::Xai => "XAI_API_KEY",
            ProviderId::Gemini => "GEMINI_API_KEY",
            ProviderId::DashScope => "DASHSCOPE_API_KEY",
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ProviderId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProviderId::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownProvider(s.to_string()))
    }
}
