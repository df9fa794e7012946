//! d20 checks with advantage and disadvantage.
//!
//! Advantage rolls two d20s and keeps the higher; disadvantage keeps the
//! lower. Both at once cancel to a plain single roll. This lives apart from
//! the generic roller so the critical rule stays unambiguous: the tag is
//! evaluated against the chosen die only, never the discarded one.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::notation::RollRequest;
use crate::roll::{Critical, RollResult};
use crate::source::RandomSource;

/// How a d20 check is rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollMode {
    /// One d20.
    #[default]
    Normal,
    /// Two d20s, keep the higher.
    Advantage,
    /// Two d20s, keep the lower.
    Disadvantage,
}

impl RollMode {
    /// Combine advantage and disadvantage flags into a mode.
    ///
    /// Both at once cancel each other out: the check is rolled as a single
    /// d20, with one draw, not two draws with both ignored.
    pub fn from_flags(advantage: bool, disadvantage: bool) -> Self {
        match (advantage, disadvantage) {
            (true, false) => Self::Advantage,
            (false, true) => Self::Disadvantage,
            _ => Self::Normal,
        }
    }
}

impl std::fmt::Display for RollMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
        }
    }
}

/// Roll a d20 check in the given mode.
///
/// Normal mode draws once and follows the single-d20 critical rule.
/// Advantage and disadvantage draw twice, keep both faces in draw order in
/// `results`, and compute the total and critical from the chosen face alone.
pub fn roll_d20(mode: RollMode, modifier: i32, source: &mut impl RandomSource) -> RollResult {
    match mode {
        RollMode::Normal => RollRequest::new(1, Die::D20, modifier).roll(source),
        RollMode::Advantage | RollMode::Disadvantage => {
            let first = source.draw(20);
            let second = source.draw(20);
            let chosen = if mode == RollMode::Advantage {
                first.max(second)
            } else {
                first.min(second)
            };
            let critical = match chosen {
                20 => Some(Critical::Success),
                1 => Some(Critical::Fail),
                _ => None,
            };
            RollResult {
                count: 2,
                die: Die::D20,
                modifier,
                results: vec![first, second],
                total: i64::from(chosen) + i64::from(modifier),
                critical,
            }
        }
    }
}

/// Roll a skill, save, or raw ability check.
///
/// The single entry point for the most common tabletop action: the caller
/// supplies the already-derived modifier (ability, proficiency, whatever
/// applies) and the engine handles the d20 and advantage logic.
pub fn roll_ability_check(
    modifier: i32,
    mode: RollMode,
    source: &mut impl RandomSource,
) -> RollResult {
    roll_d20(mode, modifier, source)
}
