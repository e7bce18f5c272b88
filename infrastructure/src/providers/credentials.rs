//! API key resolution

use crate::config::FileProvidersConfig;
use std::collections::HashMap;
use war_room_domain::ProviderId;

/// Where a provider's key was found
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// `api_key` in a config file
    Config,
    /// The named environment variable
    Env(String),
}

/// Presence report for one provider; never carries the key itself
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialStatus {
    pub provider: ProviderId,
    pub env_var: String,
    pub source: Option<CredentialSource>,
}

impl CredentialStatus {
    pub fn is_present(&self) -> bool {
        self.source.is_some()
    }
}

/// Resolved API keys for every provider
#[derive(Default)]
pub struct Credentials {
    keys: HashMap<ProviderId, String>,
    report: Vec<CredentialStatus>,
}

impl Credentials {
    /// Resolve keys from the process environment
    pub fn from_env(config: &FileProvidersConfig) -> Self {
        Self::resolve(config, |name| std::env::var(name).ok())
    }

    /// Resolve keys with a custom variable lookup. A config `api_key` wins over
    /// the environment; blank values count as absent.
    pub fn resolve(config: &FileProvidersConfig, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut keys = HashMap::new();
        let mut report = Vec::new();

        for provider in ProviderId::ALL {
            let section = config.get(provider);
            let env_var = section.key_env(provider);

            let found = match section.api_key.as_deref().map(str::trim) {
                Some(key) if !key.is_empty() => Some((key.to_string(), CredentialSource::Config)),
                _ => lookup(&env_var)
                    .map(|key| key.trim().to_string())
                    .filter(|key| !key.is_empty())
                    .map(|key| (key, CredentialSource::Env(env_var.clone()))),
            };

            let source = found.map(|(key, source)| {
                keys.insert(provider, key);
                source
            });
            report.push(CredentialStatus {
                provider,
                env_var,
                source,
            });
        }

        Self { keys, report }
    }

    pub fn with_key(mut self, provider: ProviderId, key: impl Into<String>) -> Self {
        self.keys.insert(provider, key.into());
        self
    }

    pub fn key(&self, provider: ProviderId) -> Option<&str> {
        self.keys.get(&provider).map(String::as_str)
    }

    pub fn report(&self) -> &[CredentialStatus] {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_lookup_and_report() {
        let config = FileProvidersConfig::default();
        let credentials = Credentials::resolve(&config, |name| match name {
            "XAI_API_KEY" => Some("xai-123".to_string()),
            "GEMINI_API_KEY" => Some("   ".to_string()),
            _ => None,
        });

        assert_eq!(credentials.key(ProviderId::Xai), Some("xai-123"));
        assert_eq!(credentials.key(ProviderId::Gemini), None);
        assert_eq!(credentials.report().len(), 6);

        let xai = credentials
            .report()
            .iter()
            .find(|s| s.provider == ProviderId::Xai)
            .unwrap();
        assert_eq!(
            xai.source,
            Some(CredentialSource::Env("XAI_API_KEY".to_string()))
        );
        assert_eq!(
            credentials.report().iter().filter(|s| s.is_present()).count(),
            1
        );
    }

    #[test]
    fn test_config_key_wins() {
        let mut config = FileProvidersConfig::default();
        config.openai.api_key = Some("from-file".to_string());
        let credentials = Credentials::resolve(&config, |_| Some("from-env".to_string()));

        assert_eq!(credentials.key(ProviderId::OpenAi), Some("from-file"));
        assert_eq!(credentials.key(ProviderId::DeepSeek), Some("from-env"));
    }

    #[test]
    fn test_custom_env_var_name() {
        let mut config = FileProvidersConfig::default();
        config.gemini.api_key_env = Some("GOOGLE_AI_KEY".to_string());
        let credentials = Credentials::resolve(&config, |name| {
            (name == "GOOGLE_AI_KEY").then(|| "g".to_string())
        });

        assert_eq!(credentials.key(ProviderId::Gemini), Some("g"));
    }
}
