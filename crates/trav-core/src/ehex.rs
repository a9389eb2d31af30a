//! Extended hexadecimal digits.
//!
//! Traveller writes small values (0-33) as a single character: `0-9`, then
//! `A-Z` with `I` and `O` skipped so they are not mistaken for `1` and `0`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Highest value a single digit can hold.
pub const MAX: u8 = 33;

const DIGITS: [char; MAX as usize + 1] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H',
    'J', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// A single extended-hex digit, holding a value in `0..=33`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ehex(u8);

impl Ehex {
    /// Create a digit from its numeric value.
    pub fn new(value: u8) -> CoreResult<Self> {
        if value > MAX {
            return Err(CoreError::EhexOutOfRange(i64::from(value)));
        }
        Ok(Self(value))
    }

    /// Create a digit, clamping the value into `0..=33`.
    ///
    /// Handy for turning a dice total into a profile digit.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(MAX)) as u8)
    }

    /// The numeric value of this digit.
    pub fn value(self) -> u8 {
        self.0
    }

    /// The character for this digit.
    pub fn digit(self) -> char {
        DIGITS[usize::from(self.0)]
    }

    /// Every digit in ascending order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=MAX).map(Self)
    }
}

/// The character for `value`.
pub fn to_digit(value: i64) -> CoreResult<char> {
    Ehex::try_from(value).map(Ehex::digit)
}

/// The value of the digit `c`. Lowercase letters are accepted.
pub fn from_digit(c: char) -> CoreResult<u8> {
    Ehex::try_from(c).map(Ehex::value)
}

/// Absolute difference between two digits.
pub fn difference(a: Ehex, b: Ehex) -> u8 {
    a.0.abs_diff(b.0)
}

impl TryFrom<i64> for Ehex {
    type Error = CoreError;

    fn try_from(value: i64) -> CoreResult<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| *v <= MAX)
            .map(Self)
            .ok_or(CoreError::EhexOutOfRange(value))
    }
}

impl TryFrom<char> for Ehex {
    type Error = CoreError;

    fn try_from(c: char) -> CoreResult<Self> {
        let upper = c.to_ascii_uppercase();
        DIGITS
            .iter()
            .position(|&d| d == upper)
            .map(|i| Self(i as u8))
            .ok_or_else(|| CoreError::InvalidEhexDigit(c.to_string()))
    }
}

impl FromStr for Ehex {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::try_from(c),
            _ => Err(CoreError::InvalidEhexDigit(trimmed.to_string())),
        }
    }
}

impl TryFrom<String> for Ehex {
    type Error = CoreError;

    fn try_from(s: String) -> CoreResult<Self> {
        s.parse()
    }
}

impl From<Ehex> for String {
    fn from(e: Ehex) -> Self {
        e.digit().to_string()
    }
}

impl From<Ehex> for u8 {
    fn from(e: Ehex) -> Self {
        e.0
    }
}

impl fmt::Display for Ehex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}
