//! Speak use case
//!
//! One persona's single turn: build the system prompt, call the provider,
//! and fall back to the script bank when the call fails.

use crate::config::DebateConfig;
use crate::ports::provider_gateway::ProviderGateway;
use crate::ports::random::{RandomSource, RandomSourceExt};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};
use war_room_domain::{
    DebateContext, Persona, PromptTemplate, ScriptBank, ScriptCategory, SpokenTurn, Task, Turn,
};

/// Scripted reply held in reserve for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fallback {
    pub text: String,
    pub delay: Duration,
}

/// Use case for a single persona turn
///
/// Never fails: every gateway error is absorbed into a scripted reply.
pub struct SpeakUseCase<G: ProviderGateway + 'static> {
    gateway: Arc<G>,
    scripts: Arc<ScriptBank>,
    random: Arc<dyn RandomSource>,
    config: DebateConfig,
}

impl<G: ProviderGateway + 'static> Clone for SpeakUseCase<G> {
    fn clone(&self) -> Self {
        Self {
            gateway: Arc::clone(&self.gateway),
            scripts: Arc::clone(&self.scripts),
            random: Arc::clone(&self.random),
            config: self.config.clone(),
        }
    }
}

impl<G: ProviderGateway + 'static> SpeakUseCase<G> {
    pub fn new(gateway: Arc<G>, scripts: Arc<ScriptBank>, random: Arc<dyn RandomSource>) -> Self {
        Self {
            gateway,
            scripts,
            random,
            config: DebateConfig::default(),
        }
    }

    pub fn with_config(mut self, config: DebateConfig) -> Self {
        self.config = config;
        self
    }

    /// Run one turn, drawing its fallback on the spot
    pub async fn speak(&self, persona: &Persona, task: &Task, context: &DebateContext) -> SpokenTurn {
        let fallback = self.draw_fallback(&persona.name, &context.message);
        self.speak_with(persona, task, context, fallback).await
    }

    /// Run one turn with a fallback drawn beforehand.
    ///
    /// Concurrent phases draw every fallback in selection order before any
    /// call starts, so a seeded source replays the same transcript no matter
    /// which provider answers first.
    pub async fn speak_with(
        &self,
        persona: &Persona,
        task: &Task,
        context: &DebateContext,
        fallback: Fallback,
    ) -> SpokenTurn {
        let system_prompt = PromptTemplate::system_prompt(persona, context, task);

        match self
            .gateway
            .invoke(persona.provider, &system_prompt, &context.message)
            .await
        {
            Ok(reply) => {
                debug!("{} answered via {}", persona.name, persona.provider);
                SpokenTurn::from_provider(Turn::persona(&persona.name, reply))
            }
            Err(e) => {
                warn!(
                    "{} unavailable ({}), using scripted reply: {}",
                    persona.name, persona.provider, e
                );
                Self::deliver(&persona.name, fallback).await
            }
        }
    }

    /// Scripted reply for `speaker`, paced by the fallback latency band
    pub async fn scripted(&self, speaker: &str, message: &str) -> SpokenTurn {
        let fallback = self.draw_fallback(speaker, message);
        Self::deliver(speaker, fallback).await
    }

    /// Pick the script line and the delay for a possible fallback.
    /// Draws the line index first, then the delay.
    pub fn draw_fallback(&self, speaker: &str, message: &str) -> Fallback {
        let category = ScriptCategory::classify(message);
        let candidates = self.scripts.candidates(speaker, category);
        let text = candidates[self.random.below(candidates.len())].to_string();

        let band = self.config.fallback_latency;
        let millis = self
            .random
            .between(band.min.as_millis() as u64, band.max.as_millis() as u64);

        Fallback {
            text,
            delay: Duration::from_millis(millis),
        }
    }

    async fn deliver(speaker: &str, fallback: Fallback) -> SpokenTurn {
        if !fallback.delay.is_zero() {
            tokio::time::sleep(fallback.delay).await;
        }
        SpokenTurn::from_script(Turn::persona(speaker, fallback.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LatencyBand;
    use crate::ports::random::SequenceRandom;
    use crate::use_cases::test_doubles::{EchoGateway, FailingGateway};
    use war_room_domain::{GENERIC_SCRIPT, MatchInfo, PersonaRegistry, TurnSource, roster};

    fn context(message: &str) -> DebateContext {
        DebateContext::new(message, MatchInfo::new("Inter", "Milan"))
    }

    fn speaker<G: ProviderGateway + 'static>(gateway: G, random: SequenceRandom) -> SpeakUseCase<G> {
        SpeakUseCase::new(
            Arc::new(gateway),
            Arc::new(ScriptBank::builtin()),
            Arc::new(random),
        )
        .with_config(DebateConfig::instant())
    }

    #[tokio::test]
    async fn test_provider_reply_is_used_verbatim() {
        let registry = PersonaRegistry::builtin();
        let persona = registry.resolve(roster::CLAUDE).unwrap();
        let speak = speaker(EchoGateway, SequenceRandom::zeros());

        let spoken = speak.speak(&persona, &Task::Open, &context("who wins?")).await;

        assert_eq!(spoken.source, TurnSource::Provider);
        assert_eq!(spoken.turn.speaker, roster::CLAUDE);
        assert_eq!(spoken.turn.text, "anthropic says: who wins?");
        assert!(!spoken.turn.is_user);
    }

    #[tokio::test]
    async fn test_fallback_summary_for_decide() {
        let registry = PersonaRegistry::builtin();
        let bank = ScriptBank::builtin();

        for persona in registry.roster() {
            for draw in 0..4 {
                let speak = speaker(FailingGateway, SequenceRandom::new([draw]));
                let spoken = speak
                    .speak(persona, &Task::Open, &context("Decide now"))
                    .await;

                assert_eq!(spoken.source, TurnSource::Script);
                let lines = bank
                    .lines(&persona.name, ScriptCategory::Summary)
                    .or_else(|| bank.lines(&persona.name, ScriptCategory::General))
                    .unwrap();
                assert!(lines.contains(&spoken.turn.text), "{}", spoken.turn.text);
            }
        }
    }

    #[tokio::test]
    async fn test_fallback_stays_within_own_lines() {
        let registry = PersonaRegistry::builtin();
        let bank = ScriptBank::builtin();

        for message in ["you are wrong", "who wins tonight?", "give me the verdict"] {
            let category = ScriptCategory::classify(message);
            for persona in registry.roster() {
                let speak = speaker(FailingGateway, SequenceRandom::new([7]));
                let spoken = speak.speak(persona, &Task::Open, &context(message)).await;
                let lines = bank.lines(&persona.name, category).unwrap();
                assert!(lines.contains(&spoken.turn.text));
            }
        }
    }

    #[tokio::test]
    async fn test_unknown_speaker_gets_generic_line() {
        let speak = speaker(FailingGateway, SequenceRandom::zeros());
        let spoken = speak.scripted("Nobody", "hello").await;
        assert_eq!(spoken.turn.text, GENERIC_SCRIPT);
        assert!(spoken.is_fallback());
    }

    #[tokio::test]
    async fn test_prepared_fallback_is_used_on_failure() {
        let registry = PersonaRegistry::builtin();
        let persona = registry.resolve(roster::QWEN).unwrap();
        let speak = speaker(FailingGateway, SequenceRandom::new([5, 5, 5]));
        let fallback = Fallback {
            text: "Line moved. Irrelevant.".to_string(),
            delay: Duration::ZERO,
        };

        let spoken = speak
            .speak_with(&persona, &Task::Open, &context("who wins?"), fallback)
            .await;

        assert_eq!(spoken.turn.text, "Line moved. Irrelevant.");
        assert!(spoken.is_fallback());
    }

    #[test]
    fn test_draw_fallback_takes_line_then_delay() {
        let speak = SpeakUseCase::new(
            Arc::new(FailingGateway),
            Arc::new(ScriptBank::builtin()),
            Arc::new(SequenceRandom::new([1, 250])),
        )
        .with_config(DebateConfig::default().with_fallback_latency(LatencyBand::from_millis(800, 1800)));

        let fallback = speak.draw_fallback(roster::GROK, "who wins?");
        let bank = ScriptBank::builtin();
        let lines = bank.candidates(roster::GROK, ScriptCategory::General);
        assert_eq!(fallback.text, lines[1]);
        assert_eq!(fallback.delay, Duration::from_millis(1050));
    }

    #[tokio::test(start_paused = true)]
    async fn test_fallback_waits_within_band() {
        let speak = SpeakUseCase::new(
            Arc::new(FailingGateway),
            Arc::new(ScriptBank::builtin()),
            Arc::new(SequenceRandom::zeros()),
        )
        .with_config(DebateConfig::default().with_fallback_latency(LatencyBand::from_millis(800, 1800)));

        let started = tokio::time::Instant::now();
        speak.scripted(roster::GROK, "hello").await;
        // zeros draw the first script and the low end of the band
        let elapsed = started.elapsed();
        assert!(elapsed >= Duration::from_millis(800));
        assert!(elapsed < Duration::from_millis(1800));
    }
}
