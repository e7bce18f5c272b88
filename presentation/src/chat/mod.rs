//! Interactive chat module
//!
//! Provides a readline-based interactive chat interface for the war room.

mod repl;

pub use repl::ChatRepl;
