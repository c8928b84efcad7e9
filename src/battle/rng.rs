//! The single source of randomness for a battle.
//!
//! Every probabilistic branch (accuracy, catch, flee, opponent decisions) draws
//! through a [`RandomSource`], so a seeded or scripted source replays a battle exactly.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

pub trait RandomSource {
    /// Uniform integer in `low..=high`.
    fn roll(&mut self, low: u32, high: u32, reason: &str) -> u32;

    /// Uniform index in `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize, reason: &str) -> usize;
}

/// Pseudo-random source backed by `StdRng`.
#[derive(Debug, Clone)]
pub struct TurnRng {
    rng: StdRng,
}

impl TurnRng {
    pub fn new_random() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for TurnRng {
    fn roll(&mut self, low: u32, high: u32, reason: &str) -> u32 {
        let outcome = self.rng.random_range(low..=high);
        tracing::trace!(outcome, reason, "rng roll");
        outcome
    }

    fn pick(&mut self, len: usize, reason: &str) -> usize {
        let outcome = self.rng.random_range(0..len);
        tracing::trace!(outcome, len, reason, "rng pick");
        outcome
    }
}

/// Replays a fixed list of outcomes in order. Rolls return the value as-is and
/// picks use it directly as the index.
///
/// # Panics
/// Panics when the outcomes run out, or when a pick outcome is not below `len`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    outcomes: VecDeque<u32>,
}

impl ScriptedRng {
    pub fn new_for_test(outcomes: Vec<u32>) -> Self {
        Self {
            outcomes: outcomes.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }

    fn next_outcome(&mut self, reason: &str) -> u32 {
        let Some(outcome) = self.outcomes.pop_front() else {
            panic!(
                "ScriptedRng exhausted! Tried to get a value for: '{}'. Need more random values.",
                reason
            );
        };
        tracing::trace!(outcome, reason, "scripted rng consumed");
        outcome
    }
}

impl RandomSource for ScriptedRng {
    fn roll(&mut self, _low: u32, _high: u32, reason: &str) -> u32 {
        self.next_outcome(reason)
    }

    fn pick(&mut self, len: usize, reason: &str) -> usize {
        let outcome = self.next_outcome(reason) as usize;
        assert!(
            outcome < len,
            "Scripted pick {} out of range for {} options ({})",
            outcome,
            len,
            reason
        );
        outcome
    }
}
