//! Debate request and context

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Match metadata supplied with a request.
///
/// `home` and `away` are interpolated into every prompt; any other fields are
/// carried verbatim and appended to the context line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub home: String,
    pub away: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl MatchInfo {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            extra: BTreeMap::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Same match details with different sides
    pub fn with_teams(mut self, home: impl Into<String>, away: impl Into<String>) -> Self {
        self.home = home.into();
        self.away = away.into();
        self
    }

    /// One-line description used in every system prompt
    pub fn context_line(&self) -> String {
        let mut line = format!("Context: Match {} vs {}.", self.home, self.away);
        if !self.extra.is_empty() {
            let details: Vec<String> = self
                .extra
                .iter()
                .map(|(key, value)| match value {
                    Value::String(s) => format!("{}: {}", key, s),
                    other => format!("{}: {}", key, other),
                })
                .collect();
            line.push_str(&format!(" Details: {}.", details.join(", ")));
        }
        line
    }
}

/// Per-request immutable input of one orchestration run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateContext {
    pub message: String,
    #[serde(rename = "matchInfo")]
    pub match_info: MatchInfo,
}

impl DebateContext {
    pub fn new(message: impl Into<String>, match_info: MatchInfo) -> Self {
        Self {
            message: message.into(),
            match_info,
        }
    }

    /// Parse a request payload `{ "message": ..., "matchInfo": { "home": ..., "away": ... } }`.
    pub fn from_json(payload: &Value) -> Result<Self, DomainError> {
        let object = payload
            .as_object()
            .ok_or_else(|| DomainError::MalformedRequest("request body is not an object".into()))?;

        let message = match object.get("message") {
            Some(Value::String(message)) => message.clone(),
            Some(_) => {
                return Err(DomainError::MalformedRequest(
                    "message is not a string".into(),
                ));
            }
            None => return Err(DomainError::MalformedRequest("message is missing".into())),
        };

        let match_info = match object.get("matchInfo") {
            None | Some(Value::Null) => {
                return Err(DomainError::MalformedRequest("matchInfo is missing".into()));
            }
            Some(raw @ Value::Object(_)) => serde_json::from_value::<MatchInfo>(raw.clone())
                .map_err(|e| DomainError::MalformedRequest(format!("matchInfo: {}", e)))?,
            Some(_) => {
                return Err(DomainError::MalformedRequest(
                    "matchInfo is not an object".into(),
                ));
            }
        };

        Ok(Self::new(message, match_info))
    }

    /// Parse a raw request body
    pub fn from_slice(body: &[u8]) -> Result<Self, DomainError> {
        let payload: Value = serde_json::from_slice(body)
            .map_err(|e| DomainError::MalformedRequest(format!("invalid JSON: {}", e)))?;
        Self::from_json(&payload)
    }
}
