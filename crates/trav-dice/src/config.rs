//! Pool construction settings and clock seeding.

use std::time::{SystemTime, UNIX_EPOCH};

/// Configuration for constructing a [`DicePool`](crate::DicePool).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolConfig {
    /// Fixed RNG seed. `None` seeds from the system clock.
    pub seed: Option<u64>,
}

impl PoolConfig {
    /// Pin the RNG seed for deterministic rolls.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Pin the RNG seed if one is given, otherwise leave it clock-derived.
    pub fn with_optional_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// The configured seed, or a fresh clock reading when none is set.
    pub fn seed_or_clock(&self) -> u64 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits.
///
/// Two calls closer together than the clock resolution return the same
/// value. A clock set before the epoch yields 0.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_has_no_seed() {
        let config = PoolConfig::default();
        assert_eq!(config.seed, None);
    }

    #[test]
    fn config_builder_chain() {
        let config = PoolConfig::default().with_seed(7).with_optional_seed(Some(123));
        assert_eq!(config.seed, Some(123));
        assert_eq!(config.seed_or_clock(), 123);
    }

    #[test]
    fn optional_seed_can_clear() {
        let config = PoolConfig::default().with_seed(7).with_optional_seed(None);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn clock_seed_is_nonzero() {
        assert_ne!(clock_seed(), 0);
    }
}
