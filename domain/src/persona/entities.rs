//! Persona entity

use crate::core::provider::ProviderId;
use serde::{Deserialize, Serialize};

/// Flavor that augments a persona's task instructions during reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Disposition {
    #[default]
    Neutral,
    /// Roasts other speakers, uses slang
    Chaotic,
    /// Warns about variance, begs for hedges
    RiskAverse,
    /// Dismisses feelings, quotes the numeric edge
    Cold,
}

/// A named debate participant.
///
/// Personas are defined once at startup and never mutated afterwards;
/// the registry hands them out behind `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique display name, also used as the speaker of its turns
    pub name: String,
    /// Seat at the table, e.g. "Risk Officer"
    pub role: String,
    /// In-character system prompt
    pub prompt: String,
    /// Provider that backs this persona
    pub provider: ProviderId,
    #[serde(default)]
    pub disposition: Disposition,
    /// Lowercase keywords that address this persona in `@` mentions
    #[serde(default)]
    pub mention_aliases: Vec<String>,
    /// Display badges
    #[serde(default)]
    pub traits: Vec<String>,
}

impl Persona {
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        provider: ProviderId,
        prompt: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            role: role.into(),
            prompt: prompt.into(),
            provider,
            disposition: Disposition::Neutral,
            mention_aliases: Vec::new(),
            traits: Vec::new(),
        }
    }

    pub fn with_disposition(mut self, disposition: Disposition) -> Self {
        self.disposition = disposition;
        self
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.mention_aliases = aliases.iter().map(|a| a.to_lowercase()).collect();
        self
    }

    pub fn with_traits(mut self, traits: &[&str]) -> Self {
        self.traits = traits.iter().map(|t| t.to_string()).collect();
        self
    }

    /// Returns `true` if the (already lowercased) message addresses this persona.
    pub fn is_mentioned_in(&self, lowercase_message: &str) -> bool {
        self.mention_aliases
            .iter()
            .any(|alias| lowercase_message.contains(alias.as_str()))
    }
}
