//! Scripted fallback replies.
//!
//! - [`category::ScriptCategory`] - classifies a user message into a reply category
//! - [`bank::ScriptBank`] - canned lines per persona and category

pub mod bank;
pub mod category;
