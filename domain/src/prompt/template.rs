//! System prompt templates for persona turns

use super::task::Task;
use crate::debate::context::DebateContext;
use crate::persona::entities::Persona;

/// Builds the full system prompt for one persona turn
pub struct PromptTemplate;

impl PromptTemplate {
    /// Concatenate the persona template, the match context and the task.
    ///
    /// Prior turns are embedded as the flat `[speaker]: text` block carried by
    /// the task; providers receive exactly this text.
    pub fn system_prompt(persona: &Persona, context: &DebateContext, task: &Task) -> String {
        let header = format!("{} \n{}", persona.prompt, context.match_info.context_line());
        let message = &context.message;

        match task {
            Task::Answer => format!(
                "{} User says: \"{}\". Provide a clear, direct answer.",
                header, message
            ),
            Task::ReactToAnswer { target, answer } => format!(
                "{} \n\nEVENT: User asked {}: \"{}\".\n{} Answered: \"{}\"\n\nYOUR TASK: {} Don't let the conversation die.",
                header,
                target,
                message,
                target,
                answer,
                Task::answer_reaction_instruction(persona.disposition)
            ),
            Task::Open => format!(
                "{} User says: \"{}\". \nYour Role: You are leading the discussion. State your position clearly and provocatively.",
                header, message
            ),
            Task::React { transcript } => format!(
                "{} \n\nCURRENT CHAT LOG:\n{}\n\nUser says: \"{}\". \nYOUR TASK: {}",
                header,
                transcript,
                message,
                Task::reactor_instruction(persona.disposition)
            ),
            Task::Rebut { transcript } => format!(
                "{} \n\nCURRENT CHAOS (Everyone is arguing):\n{}\n\nUser says: \"{}\". \nYOUR TASK: Snap back at the last speaker! Defend your point aggressively. MAX 20 WORDS.",
                header, transcript, message
            ),
            Task::Escalate { transcript } => format!(
                "{} \n\nLATEST ARGUMENTS:\n{}\n\nYOUR TASK: Shout down the room. Be emotional or cold. SHORT (Max 10 words).",
                header, transcript
            ),
            Task::Verdict { transcript } => format!(
                "{} \n\nTEAM DEBATE LOG:\n{}\n\nUser says: \"{}\". \nTASK: The user wants a decision. Step in. Summarize the conflict briefly. THEN ISSUE THE FINAL DIRECTIVE (Winner/Target). Be decisive.",
                header, transcript, message
            ),
        }
    }
}
