//! Random source port
//!
//! Lineup draws, rebutter picks, scripted replies and fallback pacing all
//! draw from an injected source so runs can be replayed in tests.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Source of uniform random indices
pub trait RandomSource: Send + Sync {
    /// Returns a value uniformly distributed in `0..upper`. `upper` is never 0.
    fn below(&self, upper: usize) -> usize;
}

/// Helpers built on [`RandomSource::below`]
pub trait RandomSourceExt: RandomSource {
    /// Fisher-Yates shuffle
    fn shuffle<T>(&self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }

    fn choose<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            items.get(self.below(items.len()))
        }
    }

    /// Uniform value in `low..=high`; no draw is made when the range is a single value
    fn between(&self, low: u64, high: u64) -> u64 {
        if high <= low {
            return low;
        }
        low + self.below((high - low) as usize + 1) as u64
    }
}

impl<R: RandomSource + ?Sized> RandomSourceExt for R {}

/// Replays a fixed sequence of draws, then returns 0 forever.
///
/// Each value is reduced modulo the requested bound.
pub struct SequenceRandom {
    values: Mutex<VecDeque<usize>>,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self {
            values: Mutex::new(values.into_iter().collect()),
        }
    }

    /// Always returns 0
    pub fn zeros() -> Self {
        Self::new([])
    }
}

impl RandomSource for SequenceRandom {
    fn below(&self, upper: usize) -> usize {
        let next = self
            .values
            .lock()
            .map(|mut values| values.pop_front().unwrap_or(0))
            .unwrap_or(0);
        next % upper.max(1)
    }
}
