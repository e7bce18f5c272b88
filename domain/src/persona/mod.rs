//! Personas - the simulated participants of the war room.
//!
//! - [`entities::Persona`] - prompt template, backing provider and flavor
//! - [`registry::PersonaRegistry`] - immutable lookup table injected into use cases
//! - [`roster`] - the built-in six-persona cast

pub mod entities;
pub mod registry;
pub mod roster;
