//! Debate value objects.
//!
//! - [`context`] - the incoming request and the match it is about
//! - [`turn`] - turns, transcripts and the reply envelope
//! - [`mode`] - conversational modes, phases and keyword triggers

pub mod context;
pub mod mode;
pub mod turn;
