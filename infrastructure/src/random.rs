//! Seedable random source

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Mutex;
use war_room_application::RandomSource;

/// `StdRng` behind a mutex, seeded from config or from entropy
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn below(&self, upper: usize) -> usize {
        if upper <= 1 {
            return 0;
        }
        match self.rng.lock() {
            Ok(mut rng) => rng.gen_range(0..upper),
            Err(poisoned) => poisoned.into_inner().gen_range(0..upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::credentials::Credentials;
    use crate::providers::gateway::HttpProviderGateway;
    use std::sync::Arc;
    use std::time::Duration;
    use war_room_application::{DebateConfig, RunDebateUseCase};
    use war_room_domain::{DebateContext, MatchInfo, PersonaRegistry, ScriptBank, Turn};

    async fn seeded_run(seed: u64, message: &str) -> Vec<Turn> {
        // no adapters: every persona falls back to its script
        let gateway = HttpProviderGateway::new(vec![], Credentials::default(), Duration::from_secs(1))
            .unwrap();
        let use_case = RunDebateUseCase::new(
            Arc::new(gateway),
            Arc::new(PersonaRegistry::builtin()),
            Arc::new(ScriptBank::builtin()),
            Arc::new(SeededRandom::from_seed(seed)),
        )
        .with_config(DebateConfig::instant());

        let context = DebateContext::new(message, MatchInfo::new("Inter", "Milan"));
        use_case.execute(context).await.unwrap().replies()
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_seed_fixes_the_transcript() {
        for message in ["@grok is it cooked?", "who wins tonight?", "decide now"] {
            let first = seeded_run(7, message).await;
            for _ in 0..50 {
                assert_eq!(seeded_run(7, message).await, first, "{}", message);
            }
        }
    }

    #[test]
    fn test_same_seed_same_draws() {
        let a = SeededRandom::from_seed(7);
        let b = SeededRandom::from_seed(7);
        let draws_a: Vec<usize> = (0..16).map(|_| a.below(100)).collect();
        let draws_b: Vec<usize> = (0..16).map(|_| b.below(100)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_draws_stay_in_range() {
        let random = SeededRandom::from_entropy();
        for upper in 1..20 {
            assert!(random.below(upper) < upper);
        }
    }
}
