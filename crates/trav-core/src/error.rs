//! Error types for the data utilities.

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the data utilities.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A number does not fit in a single extended-hex digit.
    #[error("{0} is out of range for an ehex digit (0-33)")]
    EhexOutOfRange(i64),

    /// A string is not a single extended-hex digit.
    #[error("'{0}' is not an ehex digit")]
    InvalidEhexDigit(String),
}
