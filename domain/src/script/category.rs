//! Script category classification

use serde::{Deserialize, Serialize};

const SUMMARY_KEYWORDS: [&str; 4] = ["sum", "decide", "conclusion", "verdict"];
const REBUTTAL_KEYWORDS: [&str; 5] = ["wrong", "disagree", "stupid", "no", "false"];

/// Kind of canned reply a persona falls back to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScriptCategory {
    General,
    Summary,
    Rebuttal,
}

impl ScriptCategory {
    /// Classify the user's message by case-insensitive substring match.
    ///
    /// Summary keywords are checked first, so a message containing both a
    /// summary and a rebuttal keyword is a summary.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        if SUMMARY_KEYWORDS.iter().any(|k| lower.contains(k)) {
            ScriptCategory::Summary
        } else if REBUTTAL_KEYWORDS.iter().any(|k| lower.contains(k)) {
            ScriptCategory::Rebuttal
        } else {
            ScriptCategory::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScriptCategory::General => "general",
            ScriptCategory::Summary => "summary",
            ScriptCategory::Rebuttal => "rebuttal",
        }
    }
}

impl std::fmt::Display for ScriptCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
