//! Post-roll modifiers.
//!
//! A modifier receives the pool after its dice are drawn and may rewrite the
//! results in place. Modifiers run in the order they are passed to
//! [`DicePool::roll`], each one seeing the output of the previous one.
//!
//! Two standard modifiers are provided as [`Modifier`] variants. Any closure
//! taking `&mut DicePool` is also a modifier.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::DiceError;
use crate::pool::DicePool;

/// A transformation applied to a pool's results after the dice are drawn.
pub trait RollOption<S = StdRng> {
    /// Inspect and rewrite the pool's current results.
    fn apply(&self, pool: &mut DicePool<S>);
}

impl<S, F> RollOption<S> for F
where
    F: Fn(&mut DicePool<S>),
{
    fn apply(&self, pool: &mut DicePool<S>) {
        self(pool)
    }
}

/// The standard modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modifier {
    /// Append flat bonuses or penalties to the end of the results.
    Mods(Vec<i32>),
    /// Rewrite every result equal to `from` into `to`.
    TreatAs {
        /// The value to look for.
        from: i32,
        /// The replacement value.
        to: i32,
    },
}

/// Append each value to the results, in order.
pub fn mods(values: impl IntoIterator<Item = i32>) -> Modifier {
    Modifier::Mods(values.into_iter().collect())
}

/// Rewrite every result equal to `from` into `to`.
pub fn treat_as(from: i32, to: i32) -> Modifier {
    Modifier::TreatAs { from, to }
}

impl<S> RollOption<S> for Modifier {
    fn apply(&self, pool: &mut DicePool<S>) {
        match self {
            Self::Mods(values) => pool.results_mut().extend_from_slice(values),
            Self::TreatAs { from, to } => {
                for value in pool.results_mut().iter_mut().filter(|v| **v == *from) {
                    *value = *to;
                }
            }
        }
    }
}

/// Renders the token syntax accepted by [`FromStr`]. An empty `Mods` renders
/// as an empty string, which does not parse back.
impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mods(values) => {
                let parts: Vec<String> = values.iter().map(|v| format!("{v:+}")).collect();
                write!(f, "{}", parts.join(","))
            }
            Self::TreatAs { from, to } => write!(f, "{from}={to}"),
        }
    }
}

/// Parses the compact token syntax: `+2`, `-1`, `+2,-1` for flat values and
/// `6=0` for a face substitution.
impl FromStr for Modifier {
    type Err = DiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || DiceError::InvalidModifier(s.to_string());

        if let Some((from, to)) = s.split_once('=') {
            let from = from.trim().parse().map_err(|_| invalid())?;
            let to = to.trim().parse().map_err(|_| invalid())?;
            return Ok(Self::TreatAs { from, to });
        }

        if s.is_empty() {
            return Err(invalid());
        }
        let values = s
            .split(',')
            .map(|part| part.trim().parse::<i32>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::Mods(values))
    }
}
