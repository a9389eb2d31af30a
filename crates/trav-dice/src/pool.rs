//! Dice pool construction, rolling and aggregation.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{PoolConfig, clock_seed};
use crate::error::{DiceError, DiceResult};
use crate::modifier::RollOption;
use crate::source::FaceSource;

/// A pool of six-sided dice holding the results of its latest roll.
///
/// The pool owns its face source and seeds it exactly once, at construction.
/// Each call to [`roll`](Self::roll) replaces the previous results.
#[derive(Debug)]
pub struct DicePool<S = StdRng> {
    seed: u64,
    source: S,
    results: Vec<i32>,
}

impl DicePool {
    /// Create a pool seeded from the system clock in nanoseconds.
    ///
    /// Pools created within one clock tick of each other share a seed.
    pub fn new() -> Self {
        Self::with_seed(clock_seed())
    }

    /// Create a pool with a fixed seed. Equal seeds give equal rolls.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_source(seed, StdRng::seed_from_u64(seed))
    }

    /// Create a pool from a [`PoolConfig`].
    pub fn from_config(config: &PoolConfig) -> Self {
        Self::with_seed(config.seed_or_clock())
    }
}

impl Default for DicePool {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> DicePool<S> {
    /// Create a pool around an already-initialised face source.
    ///
    /// `seed` is recorded for reporting only; the source is used as given.
    pub fn from_source(seed: u64, source: S) -> Self {
        Self {
            seed,
            source,
            results: Vec::new(),
        }
    }

    /// The seed this pool was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// The current results: dice faces followed by anything modifiers appended.
    pub fn results(&self) -> &[i32] {
        &self.results
    }

    /// Mutable access to the current results, for custom modifiers.
    pub fn results_mut(&mut self) -> &mut Vec<i32> {
        &mut self.results
    }

    /// Number of entries in the current results.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true if the current results are empty.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sum of every entry in the current results.
    pub fn sum(&self) -> i64 {
        self.results.iter().map(|&v| i64::from(v)).sum()
    }
}

impl<S: FaceSource> DicePool<S> {
    /// Roll `count` fresh dice, then apply each option in the order given.
    ///
    /// Fails with [`DiceError::InvalidArgument`] if `count` is negative, in
    /// which case the previous results are kept.
    pub fn roll(&mut self, count: i32, options: &[&dyn RollOption<S>]) -> DiceResult<&mut Self> {
        let count = usize::try_from(count).map_err(|_| {
            DiceError::InvalidArgument(format!("die count {count} is negative"))
        })?;

        tracing::debug!(seed = self.seed, count, options = options.len(), "rolling dice pool");

        self.results = (0..count).map(|_| self.source.next_face()).collect();
        for option in options {
            option.apply(self);
        }

        tracing::trace!(results = ?self.results, "dice pool rolled");
        Ok(self)
    }
}

impl<S> fmt::Display for DicePool<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<String> = self.results.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.sum())
    }
}
