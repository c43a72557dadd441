//! Injectable pseudo-random sources
//!
//! The simulated verification service draws its delays and check outcomes
//! from a [`RandomSource`], so tests can supply a seeded or scripted one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

/// Source of pseudo-random integers
pub trait RandomSource: Send + Sync {
    /// A value in `[0, bound)`; `0` when `bound` is zero
    fn next_below(&self, bound: u32) -> u32;

    /// A value in `[lower, upper)`
    fn between(&self, lower: u32, upper: u32) -> u32 {
        lower + self.next_below(upper.saturating_sub(lower))
    }
}

/// Thread-local RNG, the production source
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_below(&self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Seeded RNG for reproducible runs
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        rng.gen_range(0..bound)
    }
}

/// Replays a fixed sequence of draws
///
/// Each call consumes the next scripted value, clamped below `bound`. Once
/// the script is exhausted the last value is repeated (zero if the script
/// was empty).
pub struct ScriptedRandom {
    script: Mutex<VecDeque<u32>>,
    last: Mutex<u32>,
}

impl ScriptedRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            script: Mutex::new(values.into_iter().collect()),
            last: Mutex::new(0),
        }
    }

    /// Number of scripted values not yet consumed
    pub fn remaining(&self) -> usize {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        let mut last = self.last.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(value) = self
            .script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
        {
            *last = value;
        }
        (*last).min(bound - 1)
    }
}
