//! Provider configuration from TOML (`[providers.<id>]` sections)

use serde::{Deserialize, Serialize};
use war_room_domain::ProviderId;

/// Settings for one provider. Unset fields use the provider's built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProviderConfig {
    /// Environment variable holding the API key (default: `<PROVIDER>_API_KEY`)
    pub api_key_env: Option<String>,
    /// Direct API key (not recommended, use the env var instead)
    pub api_key: Option<String>,
    /// Base URL of the API
    pub base_url: Option<String>,
    /// Model requested from the provider
    pub model: Option<String>,
    /// Max tokens per reply
    pub max_tokens: Option<u32>,
}

impl FileProviderConfig {
    /// Name of the environment variable the key is read from
    pub fn key_env(&self, provider: ProviderId) -> String {
        self.api_key_env
            .clone()
            .unwrap_or_else(|| provider.default_key_env().to_string())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileProviderConfig,
    pub deepseek: FileProviderConfig,
    pub anthropic: FileProviderConfig,
    pub xai: FileProviderConfig,
    pub gemini: FileProviderConfig,
    pub dashscope: FileProviderConfig,
}

impl FileProvidersConfig {
    pub fn get(&self, provider: ProviderId) -> &FileProviderConfig {
        match provider {
            ProviderId::OpenAi => &self.openai,
            ProviderId::DeepSeek => &self.deepseek,
            ProviderId::Anthropic => &self.anthropic,
            ProviderId::Xai => &self.xai,
            ProviderId::Gemini => &self.gemini,
            ProviderId::DashScope => &self.dashscope,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_env_defaults_per_provider() {
        let config = FileProvidersConfig::default();
        assert_eq!(
            config.get(ProviderId::DashScope).key_env(ProviderId::DashScope),
            "DASHSCOPE_API_KEY"
        );
    }

    #[test]
    fn test_key_env_override() {
        let toml_str = r#"
[anthropic]
api_key_env = "MY_CLAUDE_KEY"
model = "claude-3-haiku-20240307"
"#;
        let config: FileProvidersConfig = toml::from_str(toml_str).unwrap();
        let anthropic = config.get(ProviderId::Anthropic);
        assert_eq!(anthropic.key_env(ProviderId::Anthropic), "MY_CLAUDE_KEY");
        assert_eq!(anthropic.model.as_deref(), Some("claude-3-haiku-20240307"));
        assert_eq!(config.get(ProviderId::OpenAi), &FileProviderConfig::default());
    }
}
