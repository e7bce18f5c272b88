//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod debate;
mod output;
mod personas;
mod providers;
mod repl;
mod server;

pub use debate::FileDebateConfig;
pub use output::FileOutputConfig;
pub use personas::FilePersonaConfig;
pub use providers::{FileProviderConfig, FileProvidersConfig};
pub use repl::FileReplConfig;
pub use server::FileServerConfig;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::net::SocketAddr;
use thiserror::Error;
use war_room_domain::{DomainError, PersonaRegistry, ProviderId};

/// Configuration validation errors
#[derive(Debug, Error, PartialEq)]
pub enum ConfigValidationError {
    #[error("debate.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("debate.mock_latency_min_ms ({min}) exceeds mock_latency_max_ms ({max})")]
    InvalidLatencyBand { min: u64, max: u64 },

    #[error("{field} cannot be empty")]
    EmptyValue { field: String },

    #[error("{field} must be greater than 0")]
    ZeroValue { field: String },

    #[error("server.bind is not a socket address: {0}")]
    InvalidBind(String),

    #[error("personas: {0}")]
    Persona(#[from] DomainError),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Provider endpoints and credentials
    pub providers: FileProvidersConfig,
    /// Debate pacing, timeouts and seeding
    pub debate: FileDebateConfig,
    /// HTTP surface settings
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Prompt overrides keyed by persona display name
    pub personas: BTreeMap<String, FilePersonaConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, stopping at the first problem.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.debate.timeout_seconds == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }
        if self.debate.mock_latency_min_ms > self.debate.mock_latency_max_ms {
            return Err(ConfigValidationError::InvalidLatencyBand {
                min: self.debate.mock_latency_min_ms,
                max: self.debate.mock_latency_max_ms,
            });
        }

        for provider in ProviderId::ALL {
            let section = self.providers.get(provider);
            let field = |name: &str| format!("providers.{}.{}", provider, name);

            for (name, value) in [
                ("base_url", &section.base_url),
                ("model", &section.model),
                ("api_key_env", &section.api_key_env),
            ] {
                if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                    return Err(ConfigValidationError::EmptyValue { field: field(name) });
                }
            }
            if section.max_tokens == Some(0) {
                return Err(ConfigValidationError::ZeroValue {
                    field: field("max_tokens"),
                });
            }
        }

        if self.server.bind.parse::<SocketAddr>().is_err() {
            return Err(ConfigValidationError::InvalidBind(self.server.bind.clone()));
        }

        self.persona_registry()?;
        Ok(())
    }

    /// Built-in roster with the configured prompt overrides applied
    pub fn persona_registry(&self) -> Result<PersonaRegistry, ConfigValidationError> {
        let mut registry = PersonaRegistry::builtin();
        for (name, persona) in &self.personas {
            if let Some(prompt) = &persona.prompt {
                if prompt.trim().is_empty() {
                    return Err(ConfigValidationError::EmptyValue {
                        field: format!("personas.\"{}\".prompt", name),
                    });
                }
                registry = registry.with_prompt_override(name, prompt)?;
            } else if !registry.contains(name) {
                return Err(DomainError::UnknownPersona(name.clone()).into());
            }
        }
        Ok(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use war_room_domain::{OutputFormat, roster};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[providers.openai]
model = "gpt-4o-mini"
max_tokens = 400

[providers.gemini]
api_key_env = "GOOGLE_KEY"

[debate]
timeout_seconds = 5
mock_latency_min_ms = 0
mock_latency_max_ms = 0
seed = 42

[server]
bind = "0.0.0.0:8080"

[output]
format = "json"
color = false

[personas."Grok 3 (Beta)"]
prompt = "You are a goblin."
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.providers.openai.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(config.providers.openai.max_tokens, Some(400));
        assert_eq!(config.debate.timeout(), Duration::from_secs(5));
        assert_eq!(config.debate.seed, Some(42));
        assert!(config.debate.to_debate_config().fallback_latency.is_none());
        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert!(config.validate().is_ok());

        let registry = config.persona_registry().unwrap();
        assert_eq!(registry.resolve(roster::GROK).unwrap().prompt, "You are a goblin.");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.debate.timeout_seconds, 15);
        assert_eq!(config.debate.mock_latency_min_ms, 800);
        assert_eq!(config.debate.mock_latency_max_ms, 1800);
        assert!(config.debate.seed.is_none());
        assert!(config.output.color);
        assert!(config.repl.show_progress);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = FileConfig::default();
        config.debate.timeout_seconds = 0;
        assert_eq!(config.validate(), Err(ConfigValidationError::InvalidTimeout));
    }

    #[test]
    fn test_validate_latency_band() {
        let mut config = FileConfig::default();
        config.debate.mock_latency_min_ms = 2000;
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::InvalidLatencyBand {
                min: 2000,
                max: 1800
            })
        );
    }

    #[test]
    fn test_validate_empty_model() {
        let mut config = FileConfig::default();
        config.providers.xai.model = Some(" ".to_string());
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::EmptyValue {
                field: "providers.xai.model".to_string()
            })
        );
    }

    #[test]
    fn test_validate_bad_bind() {
        let mut config = FileConfig::default();
        config.server.bind = "localhost".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvalidBind(_))
        ));
    }

    #[test]
    fn test_unknown_persona_override_is_rejected() {
        let mut config = FileConfig::default();
        config.personas.insert(
            "Clippy".to_string(),
            FilePersonaConfig {
                prompt: Some("It looks like you're betting.".to_string()),
            },
        );
        assert_eq!(
            config.validate(),
            Err(ConfigValidationError::Persona(DomainError::UnknownPersona(
                "Clippy".to_string()
            )))
        );
    }
}
