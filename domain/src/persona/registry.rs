//! Persona registry

use super::entities::Persona;
use super::roster;
use crate::core::error::DomainError;
use std::collections::HashSet;
use std::sync::Arc;

/// Read-only lookup table of personas.
///
/// Built once at startup and shared behind `Arc`. Registry order is the
/// roster iteration order used for mention scanning and reactor layout.
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Arc<Persona>>,
    chairman: usize,
}

impl PersonaRegistry {
    /// Build a registry, validating that names are unique and that the
    /// chairman is part of the roster.
    pub fn new(personas: Vec<Persona>, chairman: &str) -> Result<Self, DomainError> {
        if personas.is_empty() {
            return Err(DomainError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for persona in &personas {
            if !seen.insert(persona.name.as_str()) {
                return Err(DomainError::DuplicatePersona(persona.name.clone()));
            }
        }

        let chairman = personas
            .iter()
            .position(|p| p.name == chairman)
            .ok_or_else(|| DomainError::UnknownPersona(chairman.to_string()))?;

        Ok(Self {
            personas: personas.into_iter().map(Arc::new).collect(),
            chairman,
        })
    }

    /// The built-in six-persona cast with ChatGPT-5.2 in the chair
    pub fn builtin() -> Self {
        let personas = roster::builtin_personas();
        let chairman = personas
            .iter()
            .position(|p| p.name == roster::CHAIRMAN)
            .unwrap_or(personas.len() - 1);
        Self {
            personas: personas.into_iter().map(Arc::new).collect(),
            chairman,
        }
    }

    /// Look up a persona by exact name
    pub fn resolve(&self, name: &str) -> Result<Arc<Persona>, DomainError> {
        self.personas
            .iter()
            .find(|p| p.name == name)
            .cloned()
            .ok_or_else(|| DomainError::UnknownPersona(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.personas.iter().any(|p| p.name == name)
    }

    /// All personas in registry order
    pub fn roster(&self) -> &[Arc<Persona>] {
        &self.personas
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }

    pub fn chairman(&self) -> Arc<Persona> {
        Arc::clone(&self.personas[self.chairman])
    }

    /// Pick the persona a message addresses.
    ///
    /// Aliases are scanned case-insensitively in registry order and the first
    /// persona with a matching alias wins. Messages that address nobody go to
    /// the chairman.
    pub fn resolve_mention(&self, message: &str) -> Arc<Persona> {
        let lower = message.to_lowercase();
        self.personas
            .iter()
            .find(|p| p.is_mentioned_in(&lower))
            .cloned()
            .unwrap_or_else(|| self.chairman())
    }

    /// Replace the prompt template of one persona.
    pub fn with_prompt_override(mut self, name: &str, prompt: &str) -> Result<Self, DomainError> {
        let slot = self
            .personas
            .iter_mut()
            .find(|p| p.name == name)
            .ok_or_else(|| DomainError::UnknownPersona(name.to_string()))?;
        Arc::make_mut(slot).prompt = prompt.to_string();
        Ok(self)
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
