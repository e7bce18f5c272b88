//! Configuration file loading for war-room
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `WAR_ROOM_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./war-room.toml` or `./.war-room.toml`
//! 4. Global: `~/.config/war-room/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileDebateConfig, FileOutputConfig, FilePersonaConfig,
    FileProviderConfig, FileProvidersConfig, FileReplConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
