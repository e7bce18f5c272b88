//! Run Debate use case
//!
//! Orchestrates one war-room exchange: picks the mode, runs each phase as a
//! concurrent batch, threads the transcript forward between phases, and
//! turns any fault into the offline envelope.

mod selection;

pub use selection::Lineup;

use crate::config::DebateConfig;
use crate::ports::progress::{DebateProgress, NoProgress};
use crate::ports::provider_gateway::ProviderGateway;
use crate::ports::random::RandomSource;
use crate::use_cases::speak::SpeakUseCase;
use futures::FutureExt;
use serde_json::Value;
use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};
use war_room_domain::{
    DebateContext, DebateMode, DebatePhase, DebateResponse, DomainError, Persona,
    PersonaRegistry, ScriptBank, SpokenTurn, Task, Transcript, Turn, demands_verdict,
};

/// Faults that abort a debate. Each one becomes a single offline turn.
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("{0}")]
    Request(#[from] DomainError),

    #[error("{phase} task failed: {reason}")]
    TaskFailed { phase: DebatePhase, reason: String },

    #[error("{phase} produced no turn for {persona}")]
    MissingTurn { phase: DebatePhase, persona: String },

    #[error("internal error: {0}")]
    Panicked(String),
}

/// Ordered result of one debate, with provenance for each turn
#[derive(Debug, Clone)]
pub struct DebateOutcome {
    pub mode: DebateMode,
    pub turns: Vec<SpokenTurn>,
}

impl DebateOutcome {
    pub fn replies(&self) -> Vec<Turn> {
        self.turns.iter().map(|s| s.turn.clone()).collect()
    }

    pub fn fallback_count(&self) -> usize {
        self.turns.iter().filter(|s| s.is_fallback()).count()
    }

    pub fn into_response(self) -> DebateResponse {
        DebateResponse::new(self.turns.into_iter().map(|s| s.turn).collect())
    }
}

/// Use case for running a debate
pub struct RunDebateUseCase<G: ProviderGateway + 'static> {
    speaker: SpeakUseCase<G>,
    registry: Arc<PersonaRegistry>,
    random: Arc<dyn RandomSource>,
}

impl<G: ProviderGateway + 'static> RunDebateUseCase<G> {
    pub fn new(
        gateway: Arc<G>,
        registry: Arc<PersonaRegistry>,
        scripts: Arc<ScriptBank>,
        random: Arc<dyn RandomSource>,
    ) -> Self {
        Self {
            speaker: SpeakUseCase::new(gateway, scripts, Arc::clone(&random)),
            registry,
            random,
        }
    }

    pub fn with_config(mut self, config: DebateConfig) -> Self {
        self.speaker = self.speaker.with_config(config);
        self
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, context: DebateContext) -> Result<DebateOutcome, RunDebateError> {
        self.execute_with_progress(context, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        context: DebateContext,
        progress: &dyn DebateProgress,
    ) -> Result<DebateOutcome, RunDebateError> {
        let mode = DebateMode::select(&context.message);
        info!(
            "Starting {} debate: {} vs {}",
            mode.as_str(),
            context.match_info.home,
            context.match_info.away
        );

        let context = Arc::new(context);
        let turns = match mode {
            DebateMode::Mention => self.mention_flow(&context, progress).await?,
            DebateMode::Natural => self.natural_flow(&context, progress).await?,
        };

        let outcome = DebateOutcome { mode, turns };
        info!(
            "Debate finished: {} turns, {} scripted",
            outcome.turns.len(),
            outcome.fallback_count()
        );
        Ok(outcome)
    }

    /// Answer a JSON request body. Never fails: faults become the offline envelope.
    pub async fn respond(&self, payload: &Value) -> DebateResponse {
        self.respond_with_progress(payload, &NoProgress).await
    }

    pub async fn respond_with_progress(
        &self,
        payload: &Value,
        progress: &dyn DebateProgress,
    ) -> DebateResponse {
        match DebateContext::from_json(payload) {
            Ok(context) => self.respond_to(context, progress).await,
            Err(e) => {
                warn!("Rejected request: {}", e);
                DebateResponse::offline(e)
            }
        }
    }

    /// Answer a raw request body, as received over HTTP
    pub async fn respond_bytes(&self, body: &[u8]) -> DebateResponse {
        match DebateContext::from_slice(body) {
            Ok(context) => self.respond_to(context, &NoProgress).await,
            Err(e) => {
                warn!("Rejected request: {}", e);
                DebateResponse::offline(e)
            }
        }
    }

    /// Run a parsed request, catching every fault at this boundary
    pub async fn respond_to(
        &self,
        context: DebateContext,
        progress: &dyn DebateProgress,
    ) -> DebateResponse {
        match self.run_guarded(context, progress).await {
            Ok(outcome) => outcome.into_response(),
            Err(e) => DebateResponse::offline(e),
        }
    }

    /// Like [`Self::execute_with_progress`], but a panic anywhere in the run
    /// comes back as [`RunDebateError::Panicked`]
    pub async fn run_guarded(
        &self,
        context: DebateContext,
        progress: &dyn DebateProgress,
    ) -> Result<DebateOutcome, RunDebateError> {
        let run = AssertUnwindSafe(self.execute_with_progress(context, progress))
            .catch_unwind()
            .await;

        let result = match run {
            Ok(result) => result,
            Err(panic) => Err(RunDebateError::Panicked(panic_message(panic.as_ref()))),
        };
        if let Err(e) = &result {
            error!("Debate aborted: {}", e);
        }
        result
    }

    async fn mention_flow(
        &self,
        context: &Arc<DebateContext>,
        progress: &dyn DebateProgress,
    ) -> Result<Vec<SpokenTurn>, RunDebateError> {
        let target = self.registry.resolve_mention(&context.message);
        debug!("Mention resolved to {}", target.name);

        let answer = self
            .run_phase(
                DebatePhase::MentionTarget,
                vec![(Arc::clone(&target), Task::Answer)],
                context,
                progress,
            )
            .await?;
        let answer_text = answer
            .first()
            .map(|s| s.turn.text.clone())
            .unwrap_or_default();

        let reactors = self
            .registry
            .roster()
            .iter()
            .filter(|p| p.name != target.name)
            .map(|p| {
                let task = Task::ReactToAnswer {
                    target: target.name.clone(),
                    answer: answer_text.clone(),
                };
                (Arc::clone(p), task)
            })
            .collect();
        let reactions = self
            .run_phase(DebatePhase::MentionReactors, reactors, context, progress)
            .await?;

        Ok(answer.into_iter().chain(reactions).collect())
    }

    async fn natural_flow(
        &self,
        context: &Arc<DebateContext>,
        progress: &dyn DebateProgress,
    ) -> Result<Vec<SpokenTurn>, RunDebateError> {
        let lineup = Lineup::draw(self.registry.roster(), self.random.as_ref());
        debug!(
            "Lineup: openers={:?} reactors={:?}",
            lineup.openers().iter().map(|p| &p.name).collect::<Vec<_>>(),
            lineup.reactors().iter().map(|p| &p.name).collect::<Vec<_>>()
        );

        let mut transcript = Transcript::new();
        let mut turns = Vec::new();

        let openers = assign(lineup.openers(), || Task::Open);
        let spoken = self
            .run_phase(DebatePhase::Openers, openers, context, progress)
            .await?;
        record(&mut transcript, &mut turns, spoken);

        let log = transcript.render();
        let reactors = assign(lineup.reactors(), || Task::React {
            transcript: log.clone(),
        });
        let spoken = self
            .run_phase(DebatePhase::Reactors, reactors, context, progress)
            .await?;
        record(&mut transcript, &mut turns, spoken);

        let rebutters = lineup.rebutters(self.random.as_ref());
        let log = transcript.render();
        let rebuttals = assign(&rebutters, || Task::Rebut {
            transcript: log.clone(),
        });
        let spoken = self
            .run_phase(DebatePhase::Rebuttal, rebuttals, context, progress)
            .await?;
        record(&mut transcript, &mut turns, spoken);

        let escalators = lineup.escalators(&rebutters);
        let log = transcript.render();
        let escalations = assign(&escalators, || Task::Escalate {
            transcript: log.clone(),
        });
        let spoken = self
            .run_phase(DebatePhase::Escalation, escalations, context, progress)
            .await?;
        record(&mut transcript, &mut turns, spoken);

        if demands_verdict(&context.message) {
            let verdict = vec![(
                self.registry.chairman(),
                Task::Verdict {
                    transcript: transcript.render(),
                },
            )];
            let spoken = self
                .run_phase(DebatePhase::Verdict, verdict, context, progress)
                .await?;
            turns.extend(spoken);
        } else {
            debug!("No verdict requested, closing with deadlock notice");
            turns.push(SpokenTurn::synthetic(Turn::deadlock()));
        }

        Ok(turns)
    }

    /// Run one phase: every assignment concurrently, results in assignment order
    async fn run_phase(
        &self,
        phase: DebatePhase,
        assignments: Vec<(Arc<Persona>, Task)>,
        context: &Arc<DebateContext>,
        progress: &dyn DebateProgress,
    ) -> Result<Vec<SpokenTurn>, RunDebateError> {
        let speakers: Vec<String> = assignments.iter().map(|(p, _)| p.name.clone()).collect();
        info!("Phase {}: {} speakers", phase.label(), speakers.len());
        progress.on_phase_start(phase, &speakers);

        // All draws happen here, in selection order, before any task runs
        let fallbacks: Vec<_> = assignments
            .iter()
            .map(|(persona, _)| self.speaker.draw_fallback(&persona.name, &context.message))
            .collect();

        let mut join_set = JoinSet::new();
        for (index, ((persona, task), fallback)) in
            assignments.into_iter().zip(fallbacks).enumerate()
        {
            let speaker = self.speaker.clone();
            let context = Arc::clone(context);

            join_set.spawn(async move {
                let spoken = speaker
                    .speak_with(&persona, &task, &context, fallback)
                    .await;
                (index, spoken)
            });
        }

        let mut slots: Vec<Option<SpokenTurn>> = vec![None; speakers.len()];
        while let Some(joined) = join_set.join_next().await {
            match joined {
                Ok((index, spoken)) => {
                    progress.on_turn(phase, &spoken);
                    slots[index] = Some(spoken);
                }
                Err(e) => {
                    warn!("{} task failed: {}", phase, e);
                    let reason = if e.is_panic() {
                        panic_message(e.into_panic().as_ref())
                    } else {
                        e.to_string()
                    };
                    return Err(RunDebateError::TaskFailed { phase, reason });
                }
            }
        }

        progress.on_phase_complete(phase);

        slots
            .into_iter()
            .zip(speakers)
            .map(|(slot, persona)| slot.ok_or(RunDebateError::MissingTurn { phase, persona }))
            .collect()
    }
}

fn assign(personas: &[Arc<Persona>], task: impl Fn() -> Task) -> Vec<(Arc<Persona>, Task)> {
    personas.iter().map(|p| (Arc::clone(p), task())).collect()
}

fn record(transcript: &mut Transcript, turns: &mut Vec<SpokenTurn>, spoken: Vec<SpokenTurn>) {
    transcript.extend(spoken.iter().map(|s| s.turn.clone()));
    turns.extend(spoken);
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "task panicked".to_string()
    }
}
