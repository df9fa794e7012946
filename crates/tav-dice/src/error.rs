//! Error types for the dice engine.
//!
//! Every failure is an immediate, caller-recoverable validation error.
//! Malformed notation is rejected explicitly, never silently coerced to a
//! default roll.

/// Alias for `Result<T, ParseError>`.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised when dice notation fails to parse or validate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// The notation string was empty after trimming.
    #[error("empty dice notation")]
    Empty,

    /// No `d` separator was found.
    #[error("missing 'd' in dice notation")]
    MissingDie,

    /// The dice count was not a plain positive number.
    #[error("invalid dice count: {0:?}")]
    InvalidCount(String),

    /// The dice count was zero.
    #[error("dice count must be at least 1")]
    ZeroCount,

    /// The side count was missing or not a positive number.
    #[error("invalid die sides: {0:?}")]
    InvalidSides(String),

    /// A modifier sign without valid digits after it.
    #[error("invalid modifier: {0:?}")]
    InvalidModifier(String),

    /// Unexpected characters after the modifier.
    #[error("trailing input after notation: {0:?}")]
    TrailingInput(String),

    /// A die outside the standard tabletop set, rejected by opt-in strict
    /// validation.
    #[error("non-standard die: d{0}")]
    NonStandardDie(u32),
}
