//! Domain layer for war-room
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Personas
//!
//! Six simulated analysts, each backed by a different text-generation
//! provider, argue about a football match. The [`PersonaRegistry`] is the
//! immutable cast; the [`ScriptBank`] holds the canned lines each persona
//! falls back to when its provider is unavailable.
//!
//! ## Debate
//!
//! A request is either a **Mention** (the user addresses one persona with
//! `@`) or a **Natural** debate that runs in barrier-separated phases. Every
//! phase sees the flat [`Transcript`] of the phases before it.

pub mod config;
pub mod core;
pub mod debate;
pub mod persona;
pub mod prompt;
pub mod script;

// Re-export commonly used types
pub use crate::config::output_format::OutputFormat;
pub use crate::core::{error::DomainError, provider::ProviderId};
pub use debate::{
    context::{DebateContext, MatchInfo},
    mode::{DebateMode, DebatePhase, demands_verdict},
    turn::{
        DEADLOCK_MESSAGE, DebateResponse, SYSTEM_SPEAKER, SpokenTurn, Transcript, Turn,
        TurnSource, USER_SPEAKER,
    },
};
pub use persona::{
    entities::{Disposition, Persona},
    registry::PersonaRegistry,
    roster,
};
pub use prompt::{task::Task, template::PromptTemplate};
pub use script::{
    bank::{GENERIC_SCRIPT, ScriptBank},
    category::ScriptCategory,
};
