//! Presentation layer for war-room
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, the interactive chat interface and the HTTP surface.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;
pub mod server;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command, MatchArgs, OutputFormat};
pub use output::console::{ConsoleFormatter, KeyRow};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
