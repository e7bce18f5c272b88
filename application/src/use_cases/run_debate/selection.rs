//! Speaker selection for natural debates

use crate::ports::random::{RandomSource, RandomSourceExt};
use std::sync::Arc;
use war_room_domain::Persona;

/// Active personas for one natural debate, in draw order
#[derive(Debug, Clone)]
pub struct Lineup {
    active: Vec<Arc<Persona>>,
    opener_count: usize,
}

impl Lineup {
    /// Shuffle the roster and keep the first 3 or 4 (fewer if the roster is smaller).
    ///
    /// Three speakers get one opener, four get two.
    pub fn draw(roster: &[Arc<Persona>], random: &dyn RandomSource) -> Self {
        let mut active = roster.to_vec();
        random.shuffle(&mut active);

        let size = if random.below(2) == 0 { 3 } else { 4 };
        active.truncate(size);

        let opener_count = (if active.len() >= 4 { 2 } else { 1 }).min(active.len());
        Self {
            active,
            opener_count,
        }
    }

    pub fn active(&self) -> &[Arc<Persona>] {
        &self.active
    }

    pub fn openers(&self) -> &[Arc<Persona>] {
        &self.active[..self.opener_count]
    }

    pub fn reactors(&self) -> &[Arc<Persona>] {
        &self.active[self.opener_count..]
    }

    /// Two members of a fresh shuffle of the active set
    pub fn rebutters(&self, random: &dyn RandomSource) -> Vec<Arc<Persona>> {
        let mut pool = self.active.clone();
        random.shuffle(&mut pool);
        pool.truncate(2);
        pool
    }

    /// Up to two active members that did not rebut, in active order.
    /// Falls back to the first active member when everyone rebutted.
    pub fn escalators(&self, rebutters: &[Arc<Persona>]) -> Vec<Arc<Persona>> {
        let mut picked: Vec<_> = self
            .active
            .iter()
            .filter(|p| !rebutters.iter().any(|r| r.name == p.name))
            .take(2)
            .cloned()
            .collect();

        if picked.is_empty() {
            picked.extend(self.active.first().cloned());
        }
        picked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::random::SequenceRandom;
    use war_room_domain::{PersonaRegistry, ProviderId};

    fn names(personas: &[Arc<Persona>]) -> Vec<&str> {
        personas.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_three_speakers_one_opener() {
        let registry = PersonaRegistry::builtin();
        // five shuffle draws, then the size draw
        let random = SequenceRandom::new([0, 0, 0, 0, 0, 0]);
        let lineup = Lineup::draw(registry.roster(), &random);

        assert_eq!(lineup.active().len(), 3);
        assert_eq!(lineup.openers().len(), 1);
        assert_eq!(lineup.reactors().len(), 2);
    }

    #[test]
    fn test_four_speakers_two_openers() {
        let registry = PersonaRegistry::builtin();
        let random = SequenceRandom::new([0, 0, 0, 0, 0, 1]);
        let lineup = Lineup::draw(registry.roster(), &random);

        assert_eq!(lineup.active().len(), 4);
        assert_eq!(lineup.openers().len(), 2);
        assert_eq!(lineup.reactors().len(), 2);
    }

    #[test]
    fn test_active_members_are_distinct() {
        let registry = PersonaRegistry::builtin();
        for seed in 0..20 {
            let random = SequenceRandom::new((0..6).map(|i| i * 7 + seed));
            let lineup = Lineup::draw(registry.roster(), &random);
            let mut seen = names(lineup.active());
            seen.sort();
            seen.dedup();
            assert_eq!(seen.len(), lineup.active().len());
        }
    }

    #[test]
    fn test_small_roster_is_not_overdrawn() {
        let registry = PersonaRegistry::new(
            vec![
                Persona::new("A", "Chairman", ProviderId::OpenAi, "a"),
                Persona::new("B", "Other", ProviderId::Xai, "b"),
            ],
            "A",
        )
        .unwrap();
        let lineup = Lineup::draw(registry.roster(), &SequenceRandom::new([0, 1]));

        assert_eq!(lineup.active().len(), 2);
        assert_eq!(lineup.openers().len(), 1);
        assert_eq!(lineup.reactors().len(), 1);
    }

    #[test]
    fn test_escalators_skip_rebutters() {
        let registry = PersonaRegistry::builtin();
        let lineup = Lineup::draw(registry.roster(), &SequenceRandom::new([0, 0, 0, 0, 0, 1]));
        let rebutters = lineup.rebutters(&SequenceRandom::zeros());
        let escalators = lineup.escalators(&rebutters);

        assert_eq!(rebutters.len(), 2);
        assert_eq!(escalators.len(), 2);
        for escalator in &escalators {
            assert!(!rebutters.iter().any(|r| r.name == escalator.name));
        }
    }

    #[test]
    fn test_escalation_falls_back_to_first_active() {
        let registry = PersonaRegistry::new(
            vec![
                Persona::new("A", "Chairman", ProviderId::OpenAi, "a"),
                Persona::new("B", "Other", ProviderId::Xai, "b"),
            ],
            "A",
        )
        .unwrap();
        let lineup = Lineup::draw(registry.roster(), &SequenceRandom::zeros());
        let rebutters = lineup.rebutters(&SequenceRandom::zeros());
        let escalators = lineup.escalators(&rebutters);

        assert_eq!(names(&escalators), vec![lineup.active()[0].name.as_str()]);
    }
}
