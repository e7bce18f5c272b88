//! Anthropic Messages API

use super::settings::{ANTHROPIC_VERSION, ProviderSettings};
use super::{ProviderAdapter, extract_text, join_url};
use reqwest::RequestBuilder;
use serde_json::{Value, json};
use war_room_application::GatewayError;
use war_room_domain::ProviderId;

pub struct AnthropicAdapter {
    settings: ProviderSettings,
}

impl AnthropicAdapter {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }
}

impl ProviderAdapter for AnthropicAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Anthropic
    }

    fn endpoint(&self) -> String {
        join_url(&self.settings.base_url, "/v1/messages")
    }

    fn authorize(&self, request: RequestBuilder, key: &str) -> RequestBuilder {
        request
            .header("x-api-key", key)
            .header("anthropic-version", ANTHROPIC_VERSION)
    }

    fn build_body(&self, system_prompt: &str, user_text: &str) -> Value {
        json!({
            "model": self.settings.model,
            "max_tokens": self.settings.max_tokens,
            "system": system_prompt,
            "messages": [{ "role": "user", "content": user_text }],
        })
    }

    fn parse_reply(&self, body: &[u8]) -> Result<String, GatewayError> {
        extract_text(ProviderId::Anthropic, body, "/content/0/text")
    }
}
