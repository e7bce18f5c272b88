//! Provider adapters
//!
//! One adapter per external chat-completion service. Adapters are pure
//! request/response shapers; [`gateway::HttpProviderGateway`] does the I/O.

pub mod anthropic;
pub mod chat_completions;
pub mod credentials;
pub mod gateway;
pub mod gemini;
pub mod settings;

use reqwest::RequestBuilder;
use serde_json::Value;
use settings::ProviderSettings;
use war_room_application::GatewayError;
use war_room_domain::ProviderId;

/// Request/response shape of one provider
pub trait ProviderAdapter: Send + Sync {
    fn id(&self) -> ProviderId;

    /// Full URL the request is posted to
    fn endpoint(&self) -> String;

    /// Attach the credential to the request
    fn authorize(&self, request: RequestBuilder, key: &str) -> RequestBuilder;

    /// JSON body for one system prompt + user message pair
    fn build_body(&self, system_prompt: &str, user_text: &str) -> Value;

    /// Extract the reply text from a response body
    fn parse_reply(&self, body: &[u8]) -> Result<String, GatewayError>;
}

/// Build the adapter matching `settings.id`
pub fn adapter_for(settings: ProviderSettings) -> Box<dyn ProviderAdapter> {
    match settings.id {
        ProviderId::Anthropic => Box::new(anthropic::AnthropicAdapter::new(settings)),
        ProviderId::Gemini => Box::new(gemini::GeminiAdapter::new(settings)),
        ProviderId::OpenAi | ProviderId::DeepSeek | ProviderId::Xai | ProviderId::DashScope => {
            Box::new(chat_completions::ChatCompletionsAdapter::new(settings))
        }
    }
}

/// Parse `body` and read a non-empty string at `pointer`
pub(crate) fn extract_text(
    provider: ProviderId,
    body: &[u8],
    pointer: &str,
) -> Result<String, GatewayError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| GatewayError::MalformedResponse {
            provider,
            reason: e.to_string(),
        })?;

    match value.pointer(pointer).and_then(Value::as_str) {
        Some(text) if !text.trim().is_empty() => Ok(text.to_string()),
        Some(_) => Err(GatewayError::MalformedResponse {
            provider,
            reason: "empty reply".to_string(),
        }),
        None => Err(GatewayError::MalformedResponse {
            provider,
            reason: format!("no text at {}", pointer),
        }),
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}
