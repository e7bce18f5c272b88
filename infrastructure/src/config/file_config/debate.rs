//! Debate configuration from TOML (`[debate]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use war_room_application::{DebateConfig, LatencyBand};

/// Raw debate configuration from TOML
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Per-call provider timeout in seconds
    pub timeout_seconds: u64,
    /// Lower bound of the scripted-reply delay
    pub mock_latency_min_ms: u64,
    /// Upper bound of the scripted-reply delay
    pub mock_latency_max_ms: u64,
    /// Fixed seed for speaker selection and scripted replies
    pub seed: Option<u64>,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 15,
            mock_latency_min_ms: 800,
            mock_latency_max_ms: 1800,
            seed: None,
        }
    }
}

impl FileDebateConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn to_debate_config(&self) -> DebateConfig {
        DebateConfig::default().with_fallback_latency(LatencyBand::from_millis(
            self.mock_latency_min_ms,
            self.mock_latency_max_ms,
        ))
    }
}
