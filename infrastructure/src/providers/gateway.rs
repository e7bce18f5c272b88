//! HTTP implementation of the provider gateway

use super::credentials::{CredentialStatus, Credentials};
use super::settings::ProviderSettings;
use super::{ProviderAdapter, adapter_for};
use crate::config::FileProvidersConfig;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;
use war_room_application::{GatewayError, ProviderGateway};
use war_room_domain::ProviderId;

/// Gateway that posts one request per turn through the matching adapter
pub struct HttpProviderGateway {
    client: reqwest::Client,
    adapters: HashMap<ProviderId, Box<dyn ProviderAdapter>>,
    credentials: Credentials,
}

impl HttpProviderGateway {
    pub fn new(
        adapters: Vec<Box<dyn ProviderAdapter>>,
        credentials: Credentials,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            adapters: adapters.into_iter().map(|a| (a.id(), a)).collect(),
            credentials,
        })
    }

    /// All six adapters, with settings and keys taken from `[providers]`
    /// and the environment
    pub fn from_config(config: &FileProvidersConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let adapters = ProviderId::ALL
            .into_iter()
            .map(|id| adapter_for(ProviderSettings::from_file(id, config.get(id))))
            .collect();
        Self::new(adapters, Credentials::from_env(config), timeout)
    }

    pub fn credential_report(&self) -> &[CredentialStatus] {
        self.credentials.report()
    }
}

#[async_trait]
impl ProviderGateway for HttpProviderGateway {
    async fn invoke(
        &self,
        provider: ProviderId,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError> {
        let adapter = self
            .adapters
            .get(&provider)
            .ok_or(GatewayError::NotConfigured(provider))?;
        let key = self
            .credentials
            .key(provider)
            .ok_or(GatewayError::MissingCredential(provider))?;

        debug!("Calling {}", provider);
        let request = self
            .client
            .post(adapter.endpoint())
            .json(&adapter.build_body(system_prompt, user_text));
        let response = adapter
            .authorize(request, key)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::Status {
                provider,
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(transport_error)?;
        adapter.parse_reply(&body)
    }
}

/// Map a reqwest failure, dropping the URL (it can carry a query-string key)
fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else {
        GatewayError::Connection(e.without_url().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::anthropic::AnthropicAdapter;
    use crate::providers::chat_completions::ChatCompletionsAdapter;

    fn settings(id: ProviderId, base_url: &str) -> ProviderSettings {
        ProviderSettings {
            base_url: base_url.to_string(),
            ..ProviderSettings::defaults(id)
        }
    }

    fn gateway(adapter: Box<dyn ProviderAdapter>, key: Option<&str>) -> HttpProviderGateway {
        let id = adapter.id();
        let mut credentials = Credentials::default();
        if let Some(key) = key {
            credentials = credentials.with_key(id, key);
        }
        HttpProviderGateway::new(vec![adapter], credentials, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_openai_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/chat/completions")
            .match_header("authorization", "Bearer sk-test")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "model": "gpt-4o",
                "messages": [
                    { "role": "system", "content": "sys" },
                    { "role": "user", "content": "who wins?" }
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[{"message":{"role":"assistant","content":"Away side."}}]}"#)
            .create_async()
            .await;

        let adapter = ChatCompletionsAdapter::new(settings(ProviderId::OpenAi, &server.url()));
        let gateway = gateway(Box::new(adapter), Some("sk-test"));

        let reply = gateway.invoke(ProviderId::OpenAi, "sys", "who wins?").await.unwrap();
        assert_eq!(reply, "Away side.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_anthropic_headers() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/messages")
            .match_header("x-api-key", "ak")
            .match_header("anthropic-version", "2023-06-01")
            .with_status(200)
            .with_body(r#"{"content":[{"type":"text","text":"Too risky."}]}"#)
            .create_async()
            .await;

        let adapter = AnthropicAdapter::new(settings(ProviderId::Anthropic, &server.url()));
        let gateway = gateway(Box::new(adapter), Some("ak"));

        let reply = gateway.invoke(ProviderId::Anthropic, "sys", "hi").await.unwrap();
        assert_eq!(reply, "Too risky.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat/completions")
            .with_status(429)
            .with_body(r#"{"error":"rate limited"}"#)
            .create_async()
            .await;

        let adapter = ChatCompletionsAdapter::new(settings(ProviderId::DeepSeek, &server.url()));
        let gateway = gateway(Box::new(adapter), Some("k"));

        let err = gateway.invoke(ProviderId::DeepSeek, "sys", "hi").await.unwrap_err();
        assert!(matches!(
            err,
            GatewayError::Status {
                provider: ProviderId::DeepSeek,
                status: 429
            }
        ));
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_call() {
        let adapter = ChatCompletionsAdapter::new(settings(ProviderId::Xai, "http://127.0.0.1:9"));
        let gateway = gateway(Box::new(adapter), None);

        let err = gateway.invoke(ProviderId::Xai, "sys", "hi").await.unwrap_err();
        assert!(err.is_missing_credential());
    }

    #[tokio::test]
    async fn test_unconfigured_provider() {
        let adapter = ChatCompletionsAdapter::new(settings(ProviderId::Xai, "http://127.0.0.1:9"));
        let gateway = gateway(Box::new(adapter), Some("k"));

        let err = gateway.invoke(ProviderId::Gemini, "sys", "hi").await.unwrap_err();
        assert!(matches!(err, GatewayError::NotConfigured(ProviderId::Gemini)));
    }
}
