//! Google Generative Language API

use super::settings::ProviderSettings;
use super::{ProviderAdapter, extract_text, join_url};
use reqwest::RequestBuilder;
use serde_json::{Value, json};
use war_room_application::GatewayError;
use war_room_domain::ProviderId;

pub struct GeminiAdapter {
    settings: ProviderSettings,
}

impl GeminiAdapter {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }
}

impl ProviderAdapter for GeminiAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn endpoint(&self) -> String {
        join_url(
            &self.settings.base_url,
            &format!("/v1beta/models/{}:generateContent", self.settings.model),
        )
    }

    /// The key travels as a query parameter
    fn authorize(&self, request: RequestBuilder, key: &str) -> RequestBuilder {
        request.query(&[("key", key)])
    }

    /// No system role here: the system prompt and user text share one part
    fn build_body(&self, system_prompt: &str, user_text: &str) -> Value {
        json!({
            "contents": [{
                "parts": [{ "text": format!("{}\nUser: {}", system_prompt, user_text) }]
            }]
        })
    }

    fn parse_reply(&self, body: &[u8]) -> Result<String, GatewayError> {
        extract_text(ProviderId::Gemini, body, "/candidates/0/content/parts/0/text")
    }
}
