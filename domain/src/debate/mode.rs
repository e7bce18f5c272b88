//! Conversational modes and debate phases

use serde::{Deserialize, Serialize};

const VERDICT_KEYWORDS: [&str; 6] = ["decide", "conclusion", "summary", "stop", "enough", "final"];

/// The two conversational protocols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebateMode {
    /// The user addressed one persona with `@`; it answers, the rest react
    Mention,
    /// Phased free-for-all among a random subset of the roster
    Natural,
}

impl DebateMode {
    pub fn select(message: &str) -> Self {
        if message.contains('@') {
            DebateMode::Mention
        } else {
            DebateMode::Natural
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DebateMode::Mention => "mention",
            DebateMode::Natural => "natural",
        }
    }
}

/// Returns `true` if the user is asking the chairman to end the debate.
pub fn demands_verdict(message: &str) -> bool {
    let lower = message.to_lowercase();
    VERDICT_KEYWORDS.iter().any(|k| lower.contains(k))
}

/// Barrier-separated batches of persona invocations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebatePhase {
    MentionTarget,
    MentionReactors,
    Openers,
    Reactors,
    Rebuttal,
    Escalation,
    Verdict,
}

impl DebatePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebatePhase::MentionTarget => "mention_target",
            DebatePhase::MentionReactors => "mention_reactors",
            DebatePhase::Openers => "openers",
            DebatePhase::Reactors => "reactors",
            DebatePhase::Rebuttal => "rebuttal",
            DebatePhase::Escalation => "escalation",
            DebatePhase::Verdict => "verdict",
        }
    }

    /// Human-readable label for progress output
    pub fn label(&self) -> &'static str {
        match self {
            DebatePhase::MentionTarget => "Direct Answer",
            DebatePhase::MentionReactors => "Reactions",
            DebatePhase::Openers => "Openers",
            DebatePhase::Reactors => "Reactors",
            DebatePhase::Rebuttal => "Rebuttal",
            DebatePhase::Escalation => "Escalation",
            DebatePhase::Verdict => "Verdict",
        }
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
