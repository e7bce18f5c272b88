//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`] - domain-level errors
//! - [`provider::ProviderId`] - external text-generation services

pub mod error;
pub mod provider;
