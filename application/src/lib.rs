//! Application layer for war-room
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DebateConfig, LatencyBand};
pub use ports::{
    progress::{DebateProgress, NoProgress},
    provider_gateway::{GatewayError, ProviderGateway},
    random::{RandomSource, RandomSourceExt, SequenceRandom},
};
pub use use_cases::run_debate::{DebateOutcome, Lineup, RunDebateError, RunDebateUseCase};
pub use use_cases::speak::{Fallback, SpeakUseCase};
