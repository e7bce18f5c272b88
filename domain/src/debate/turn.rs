//! Turns, transcripts and the reply envelope

use serde::{Deserialize, Serialize};

/// Pseudo-speaker for deadlock and outage notices
pub const SYSTEM_SPEAKER: &str = "System";
/// Pseudo-speaker for the user's own messages
pub const USER_SPEAKER: &str = "User";

/// Notice appended when the user has not asked for a verdict
pub const DEADLOCK_MESSAGE: &str = "The Council is deadlocked. Awaiting your decisive command, Commander.\n(Type 'Decide' to force a verdict)";

/// One utterance in the debate.
///
/// Serialized with the wire names `model`, `logic` and `isUser`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(rename = "model")]
    pub speaker: String,
    #[serde(rename = "logic")]
    pub text: String,
    #[serde(rename = "isUser")]
    pub is_user: bool,
}

impl Turn {
    pub fn persona(speaker: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            speaker: speaker.into(),
            text: text.into(),
            is_user: false,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::persona(SYSTEM_SPEAKER, text)
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: USER_SPEAKER.to_string(),
            text: text.into(),
            is_user: true,
        }
    }

    pub fn deadlock() -> Self {
        Self::system(DEADLOCK_MESSAGE)
    }

    pub fn is_system(&self) -> bool {
        self.speaker == SYSTEM_SPEAKER
    }

    /// `[speaker]: text`, the line format embedded into later prompts
    pub fn line(&self) -> String {
        format!("[{}]: {}", self.speaker, self.text)
    }
}

/// Where the text of a persona turn came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnSource {
    Provider,
    Script,
    Synthetic,
}

/// A turn together with its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenTurn {
    pub turn: Turn,
    pub source: TurnSource,
}

impl SpokenTurn {
    pub fn from_provider(turn: Turn) -> Self {
        Self {
            turn,
            source: TurnSource::Provider,
        }
    }

    pub fn from_script(turn: Turn) -> Self {
        Self {
            turn,
            source: TurnSource::Script,
        }
    }

    pub fn synthetic(turn: Turn) -> Self {
        Self {
            turn,
            source: TurnSource::Synthetic,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == TurnSource::Script
    }
}

/// Append-only sequence of turns for one orchestration run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, turns: impl IntoIterator<Item = Turn>) {
        self.turns.extend(turns);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Flat text block: one `[speaker]: text` line per turn, newline separated
    pub fn render(&self) -> String {
        self.turns
            .iter()
            .map(Turn::line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Response envelope `{ "replies": [...] }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateResponse {
    pub replies: Vec<Turn>,
}

impl DebateResponse {
    pub fn new(replies: Vec<Turn>) -> Self {
        Self { replies }
    }

    /// Single `System` turn announcing the room is offline
    pub fn offline(reason: impl std::fmt::Display) -> Self {
        Self {
            replies: vec![Turn::system(format!("War Room Offline: {}", reason))],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_turn_wire_format() {
        let turn = Turn::persona("Qwen 3 Max", "Line moved.");
        assert_eq!(
            serde_json::to_value(&turn).unwrap(),
            json!({ "model": "Qwen 3 Max", "logic": "Line moved.", "isUser": false })
        );
    }

    #[test]
    fn test_transcript_render() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.render(), "");

        transcript.extend([Turn::persona("A", "one"), Turn::persona("B", "two")]);
        assert_eq!(transcript.render(), "[A]: one\n[B]: two");
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_offline_envelope() {
        let response = DebateResponse::offline("matchInfo is missing");
        assert_eq!(response.replies.len(), 1);
        assert!(response.replies[0].is_system());
        assert!(!response.replies[0].is_user);
        assert_eq!(response.replies[0].text, "War Room Offline: matchInfo is missing");
    }

    #[test]
    fn test_user_turn() {
        let turn = Turn::user("decide");
        assert!(turn.is_user);
        assert_eq!(turn.speaker, USER_SPEAKER);
    }
}
