//! Prompt construction for persona turns.
//!
//! - [`task::Task`] - what a persona is asked to do in a given phase
//! - [`template::PromptTemplate`] - assembles persona prompt, match context and task

pub mod task;
pub mod template;
