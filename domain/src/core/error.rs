//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    #[error("Persona registry is empty")]
    EmptyRoster,

    #[error("Duplicate persona: {0}")]
    DuplicatePersona(String),

    #[error("Script list for {persona}/{category} is empty")]
    EmptyScripts { persona: String, category: String },

    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

impl DomainError {
    /// Check if this error came from parsing an incoming request
    pub fn is_malformed_request(&self) -> bool {
        matches!(self, DomainError::MalformedRequest(_))
    }
}
