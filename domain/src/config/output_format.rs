//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished debate is rendered for the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Phase headers, colored speakers, fallback markers
    #[default]
    Full,
    /// One `speaker: text` line per turn
    Compact,
    /// The response envelope as JSON
    Json,
}
