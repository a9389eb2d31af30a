//! Error types for the dice engine.

/// Errors that can occur while rolling or configuring a dice pool.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// An argument was outside the accepted domain (e.g. a negative die count).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A modifier token could not be parsed.
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
