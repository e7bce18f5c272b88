//! Progress reporting for debate execution

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::Mutex;
use war_room_application::DebateProgress;
use war_room_domain::{DebatePhase, SpokenTurn};

/// Reports progress during a debate with one bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn turn_status(spoken: &SpokenTurn) -> String {
        if spoken.is_fallback() {
            format!("{} {} (scripted)", "~".yellow(), spoken.turn.speaker)
        } else {
            format!("{} {}", "v".green(), spoken.turn.speaker)
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgress for ProgressReporter {
    fn on_phase_start(&self, phase: DebatePhase, speakers: &[String]) {
        let pb = self.multi.add(ProgressBar::new(speakers.len() as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(phase.label());
        pb.set_message(speakers.join(", "));

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_turn(&self, _phase: DebatePhase, spoken: &SpokenTurn) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(Self::turn_status(spoken));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: DebatePhase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} done", phase.label().green()));
        }
    }
}

/// Plain line-per-event progress on stderr, for non-terminal output
pub struct SimpleProgress;

impl DebateProgress for SimpleProgress {
    fn on_phase_start(&self, phase: DebatePhase, speakers: &[String]) {
        eprintln!(
            "{} {} ({})",
            "->".cyan(),
            phase.label().bold(),
            speakers.join(", ")
        );
    }

    fn on_turn(&self, _phase: DebatePhase, spoken: &SpokenTurn) {
        eprintln!("  {}", ProgressReporter::turn_status(spoken));
    }

    fn on_phase_complete(&self, _phase: DebatePhase) {}
}
