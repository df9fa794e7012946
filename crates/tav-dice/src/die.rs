//! Polyhedral die types.

use serde::{Deserialize, Serialize};

/// A polyhedral die type.
///
/// The standard tabletop set is d4 through d100; anything else parses as
/// [`Die::Custom`] so homebrew dice like `1d7` still work. Callers that want
/// strict validation use [`crate::RollRequest::require_standard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Die {
    /// Four-sided die.
    D4,
    /// Six-sided die.
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die.
    D12,
    /// Twenty-sided die.
    D20,
    /// Percentile die (1-100).
    D100,
    /// A homebrew die with a custom number of sides.
    Custom(u32),
}

impl Die {
    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D4 => 4,
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
            Self::D20 => 20,
            Self::D100 => 100,
            Self::Custom(n) => n,
        }
    }

    /// Map a side count to a die, using the canonical variant where one
    /// exists and [`Die::Custom`] otherwise.
    ///
    /// Side counts below 1 are rejected by the notation parser before this
    /// is reached.
    pub fn from_sides(sides: u32) -> Self {
        match sides {
            4 => Self::D4,
            6 => Self::D6,
            8 => Self::D8,
            10 => Self::D10,
            12 => Self::D12,
            20 => Self::D20,
            100 => Self::D100,
            n => Self::Custom(n),
        }
    }

    /// Returns true for the standard tabletop set {4, 6, 8, 10, 12, 20, 100}.
    pub fn is_standard(self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl std::fmt::Display for Die {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}
