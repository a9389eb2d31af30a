//! Seeded six-sided dice pools for Traveller-style checks.
//!
//! A [`DicePool`] owns its own seeded RNG, rolls a number of d6 and then runs
//! an ordered pipeline of [`RollOption`]s over the results before they are
//! summed:
//!
//! ```
//! use trav_dice::{DicePool, mods, treat_as};
//!
//! let mut pool = DicePool::with_seed(7);
//! let total = pool.roll(2, &[&mods([2]), &treat_as(1, 6)])?.sum();
//! assert_eq!(pool.len(), 3);
//! assert_eq!(total, pool.results().iter().map(|&v| i64::from(v)).sum::<i64>());
//! # Ok::<(), trav_dice::DiceError>(())
//! ```
//!
//! Modifier order matters: a substitution only sees values that were already
//! in the pool when it ran.

pub mod config;
pub mod error;
pub mod modifier;
pub mod pool;
pub mod source;

pub use config::PoolConfig;
pub use error::{DiceError, DiceResult};
pub use modifier::{Modifier, RollOption, mods, treat_as};
pub use pool::DicePool;
pub use source::{FaceSource, SIDES};
