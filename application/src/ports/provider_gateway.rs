//! Provider gateway port
//!
//! Defines the interface for calling external text-generation providers.

use async_trait::async_trait;
use thiserror::Error;
use war_room_domain::ProviderId;

/// Errors that can occur during a provider call.
///
/// None of these ever reach the user: the speak use case absorbs them and
/// answers from the script bank instead.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Missing credential for {0}")]
    MissingCredential(ProviderId),

    #[error("Provider not configured: {0}")]
    NotConfigured(ProviderId),

    #[error("{provider} returned HTTP {status}")]
    Status { provider: ProviderId, status: u16 },

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout")]
    Timeout,

    #[error("Malformed response from {provider}: {reason}")]
    MalformedResponse { provider: ProviderId, reason: String },
}

impl GatewayError {
    /// Check if the call was never attempted because no key is configured
    pub fn is_missing_credential(&self) -> bool {
        matches!(self, GatewayError::MissingCredential(_))
    }
}

/// Gateway for provider communication
///
/// One call per turn: no retries, no caching. Implementations (adapters)
/// live in the infrastructure layer.
#[async_trait]
pub trait ProviderGateway: Send + Sync {
    /// Send one system prompt + user message pair and return the reply text
    async fn invoke(
        &self,
        provider: ProviderId,
        system_prompt: &str,
        user_text: &str,
    ) -> Result<String, GatewayError>;
}
