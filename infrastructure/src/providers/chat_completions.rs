//! OpenAI-compatible chat completions (OpenAI, DeepSeek, xAI, DashScope)

use super::settings::ProviderSettings;
use super::{ProviderAdapter, extract_text, join_url};
use reqwest::RequestBuilder;
use serde_json::{Value, json};
use war_room_application::GatewayError;
use war_room_domain::ProviderId;

pub struct ChatCompletionsAdapter {
    settings: ProviderSettings,
}

impl ChatCompletionsAdapter {
    pub fn new(settings: ProviderSettings) -> Self {
        Self { settings }
    }

    fn path(&self) -> &'static str {
        match self.settings.id {
            ProviderId::DeepSeek => "/chat/completions",
            ProviderId::DashScope => "/compatible-mode/v1/chat/completions",
            _ => "/v1/chat/completions",
        }
    }
}

impl ProviderAdapter for ChatCompletionsAdapter {
    fn id(&self) -> ProviderId {
        self.settings.id
    }

    fn endpoint(&self) -> String {
        join_url(&self.settings.base_url, self.path())
    }

    fn authorize(&self, request: RequestBuilder, key: &str) -> RequestBuilder {
        request.bearer_auth(key)
    }

    fn build_body(&self, system_prompt: &str, user_text: &str) -> Value {
        json!({
            "model": self.settings.model,
            "messages": [
                { "role": "system", "content": system_prompt },
                { "role": "user", "content": user_text },
            ],
            "max_tokens": self.settings.max_tokens,
        })
    }

    fn parse_reply(&self, body: &[u8]) -> Result<String, GatewayError> {
        extract_text(self.settings.id, body, "/choices/0/message/content")
    }
}
