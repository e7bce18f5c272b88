//! Per-phase task instructions

use crate::persona::entities::Disposition;

/// What a persona is asked to do on its turn.
///
/// Tasks own their transcript text so they can move into spawned invocations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    /// Answer the user's direct question (mention target)
    Answer,
    /// React to the mention target's answer
    ReactToAnswer { target: String, answer: String },
    /// Lead the discussion
    Open,
    /// Attack or support the openers
    React { transcript: String },
    /// Snap back at the last speaker
    Rebut { transcript: String },
    /// Shout down the room
    Escalate { transcript: String },
    /// Chairman's closing directive
    Verdict { transcript: String },
}

impl Task {
    /// Instruction for reacting to a mention target's answer
    pub fn answer_reaction_instruction(disposition: Disposition) -> &'static str {
        match disposition {
            Disposition::Chaotic => "The user ignored you. Roast the answer or the question. Yell YOLO.",
            Disposition::RiskAverse => "Add a caution/risk note related to the topic.",
            Disposition::Neutral | Disposition::Cold => {
                "User just asked a specific question to another agent. Jump in with your own opinion! Keep the debate alive."
            }
        }
    }

    /// Instruction for the reactors phase, base text plus disposition flavor
    pub fn reactor_instruction(disposition: Disposition) -> String {
        let mut instruction = String::from(
            "You are reacting to the speakers above. Don't be polite. If you disagree, ATTACK their logic. Keep it SHORT (Max 30 words).",
        );
        instruction.push_str(" You MUST mention them by name (e.g. @Grok).");
        match disposition {
            Disposition::Chaotic => instruction.push_str(" Roast them. Use slang. Be chaotic."),
            Disposition::RiskAverse => {
                instruction.push_str(" Warn them about the risk/variance.")
            }
            Disposition::Cold => instruction.push_str(" Dismiss their feelings. Quote the Edge."),
            Disposition::Neutral => {}
        }
        instruction
    }

    pub fn transcript(&self) -> Option<&str> {
        match self {
            Task::React { transcript }
            | Task::Rebut { transcript }
            | Task::Escalate { transcript }
            | Task::Verdict { transcript } => Some(transcript.as_str()),
            Task::Answer | Task::ReactToAnswer { .. } | Task::Open => None,
        }
    }
}
