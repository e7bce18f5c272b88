//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate.

use war_room_domain::{DebatePhase, SpokenTurn};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait DebateProgress: Send + Sync {
    /// Called when a phase starts, with the speakers in selection order
    fn on_phase_start(&self, phase: DebatePhase, speakers: &[String]);

    /// Called as each turn of the phase resolves (completion order)
    fn on_turn(&self, phase: DebatePhase, spoken: &SpokenTurn);

    /// Called once every turn of the phase has resolved
    fn on_phase_complete(&self, phase: DebatePhase);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgress for NoProgress {
    fn on_phase_start(&self, _phase: DebatePhase, _speakers: &[String]) {}
    fn on_turn(&self, _phase: DebatePhase, _spoken: &SpokenTurn) {}
    fn on_phase_complete(&self, _phase: DebatePhase) {}
}
