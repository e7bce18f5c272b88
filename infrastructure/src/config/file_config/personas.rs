//! Persona overrides from TOML (`[personas."<name>"]` sections)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePersonaConfig {
    /// Replacement prompt template
    pub prompt: Option<String>,
}
