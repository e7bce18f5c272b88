//! Infrastructure layer for war-room
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod providers;
pub mod random;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use providers::{
    ProviderAdapter,
    credentials::{CredentialSource, CredentialStatus, Credentials},
    gateway::HttpProviderGateway,
    settings::ProviderSettings,
};
pub use random::SeededRandom;
