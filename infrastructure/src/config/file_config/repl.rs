//! Chat loop configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for `war-room chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// One progress bar per debate phase
    pub show_progress: bool,
    /// Keep a line history between sessions
    pub history: bool,
    /// History location (default: `<data_dir>/war-room/history.txt`)
    pub history_file: Option<PathBuf>,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history: true,
            history_file: None,
        }
    }
}

impl FileReplConfig {
    /// Where chat history is read and written, `None` when history is off
    pub fn history_path(&self) -> Option<PathBuf> {
        if !self.history {
            return None;
        }
        self.history_file
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("war-room").join("history.txt")))
    }
}
