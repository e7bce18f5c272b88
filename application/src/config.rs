//! Application-level configuration.
//!
//! Controls how the debate use cases behave at runtime, independently of
//! where the values were loaded from.

use std::time::Duration;

/// Uniform delay band applied before a scripted reply is returned,
/// so fallbacks pace like a real provider answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyBand {
    pub min: Duration,
    pub max: Duration,
}

impl LatencyBand {
    /// Band from milliseconds. Bounds are reordered if given backwards.
    pub fn from_millis(min: u64, max: u64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min: Duration::from_millis(min),
            max: Duration::from_millis(max),
        }
    }

    /// No delay at all
    pub fn none() -> Self {
        Self::from_millis(0, 0)
    }

    pub fn is_none(&self) -> bool {
        self.max.is_zero()
    }
}

impl Default for LatencyBand {
    fn default() -> Self {
        Self::from_millis(800, 1800)
    }
}

/// Debate behavior configuration.
#[derive(Debug, Clone, Default)]
pub struct DebateConfig {
    /// Delay band for scripted fallback replies
    pub fallback_latency: LatencyBand,
}

impl DebateConfig {
    pub fn with_fallback_latency(mut self, band: LatencyBand) -> Self {
        self.fallback_latency = band;
        self
    }

    /// Configuration with no fallback pacing, for tests and scripted runs
    pub fn instant() -> Self {
        Self::default().with_fallback_latency(LatencyBand::none())
    }
}
