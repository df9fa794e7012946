//! Error types for the character model.

use tav_dice::ParseError;

/// Alias for `Result<T, CharacterError>`.
pub type CharacterResult<T> = Result<T, CharacterError>;

/// Errors that can occur when building or modifying a character.
#[derive(Debug, thiserror::Error)]
pub enum CharacterError {
    /// An attack's damage notation failed to parse.
    #[error("invalid damage notation: {0}")]
    Damage(#[from] ParseError),

    /// Character levels run from 1 to 20.
    #[error("invalid level: {0} (must be 1-20)")]
    InvalidLevel(u32),
}
