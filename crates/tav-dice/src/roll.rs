//! Roll results and critical classification.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::ParseResult;
use crate::notation::RollRequest;
use crate::source::RandomSource;

/// Critical outcome of a single-d20 roll.
///
/// Keyed off the raw face, never the modified total: a natural 1 with a +5
/// modifier is still a critical fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Critical {
    /// Natural 20.
    Success,
    /// Natural 1.
    Fail,
}

impl std::fmt::Display for Critical {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "critical success"),
            Self::Fail => write!(f, "critical fail"),
        }
    }
}

/// The immutable outcome of executing a [`RollRequest`].
///
/// `results` holds one face per die in draw order; `total` is the face sum
/// plus the modifier. Any roll history is the caller's concern, not the
/// engine's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollResult {
    /// Number of dice rolled.
    pub count: u32,
    /// The die that was rolled.
    pub die: Die,
    /// Flat modifier applied to the sum.
    pub modifier: i32,
    /// Per-die face values in draw order, each in `[1, sides]`.
    pub results: Vec<u32>,
    /// Sum of faces plus modifier. Wide enough that the homebrew dice the
    /// parser admits cannot overflow or truncate it.
    pub total: i64,
    /// Critical tag, present only for a single-d20 roll.
    pub critical: Option<Critical>,
}

impl RollResult {
    /// The highest single face, or 0 for an empty result.
    pub fn highest(&self) -> u32 {
        self.results.iter().copied().max().unwrap_or(0)
    }

    /// The lowest single face, or 0 for an empty result.
    pub fn lowest(&self) -> u32 {
        self.results.iter().copied().min().unwrap_or(0)
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let [face] = self.results.as_slice() {
            write!(f, "{face}")?;
        } else {
            let faces: Vec<String> = self.results.iter().map(u32::to_string).collect();
            write!(f, "[{}]", faces.join(", "))?;
        }
        match self.modifier {
            m if m > 0 => write!(f, "+{m}")?,
            m if m < 0 => write!(f, "{m}")?,
            _ => {}
        }
        write!(f, " = {}", self.total)
    }
}

/// Parse a notation string and roll it in one step.
pub fn roll_notation(notation: &str, source: &mut impl RandomSource) -> ParseResult<RollResult> {
    let request: RollRequest = notation.parse()?;
    Ok(request.roll(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{RngSource, ScriptedSource};
    use proptest::prelude::*;

    #[test]
    fn natural_twenty_is_critical_success() {
        let mut source = ScriptedSource::faces(20, &[20]);
        let result = roll_notation("1d20", &mut source).unwrap();
        assert_eq!(result.results, vec![20]);
        assert_eq!(result.total, 20);
        assert_eq!(result.critical, Some(Critical::Success));
    }

    #[test]
    fn natural_one_is_critical_fail_regardless_of_total() {
        let mut source = ScriptedSource::faces(20, &[1]);
        let result = roll_notation("1d20+5", &mut source).unwrap();
        assert_eq!(result.total, 6);
        assert_eq!(result.critical, Some(Critical::Fail));
    }

    #[test]
    fn two_d6_plus_three() {
        let request: RollRequest = "2d6+3".parse().unwrap();
        assert_eq!(request, RollRequest::new(2, Die::D6, 3));

        let mut source = ScriptedSource::faces(6, &[4, 5]);
        let result = request.roll(&mut source);
        assert_eq!(result.results, vec![4, 5]);
        assert_eq!(result.total, 12);
        assert_eq!(result.critical, None);
    }

    #[test]
    fn multi_die_pool_never_tags_criticals() {
        let mut source = ScriptedSource::faces(20, &[20, 1]);
        let result = roll_notation("2d20", &mut source).unwrap();
        assert_eq!(result.critical, None);
    }

    #[test]
    fn non_d20_never_tags_criticals() {
        let mut source = ScriptedSource::faces(6, &[6]);
        let result = roll_notation("1d6", &mut source).unwrap();
        assert_eq!(result.critical, None);

        let mut source = ScriptedSource::faces(6, &[1]);
        let result = roll_notation("1d6", &mut source).unwrap();
        assert_eq!(result.critical, None);
    }

    #[test]
    fn negative_modifier_can_drop_total_below_faces() {
        let mut source = ScriptedSource::faces(4, &[1, 1]);
        let result = roll_notation("2d4-5", &mut source).unwrap();
        assert_eq!(result.total, -3);
    }

    #[test]
    fn huge_homebrew_die_keeps_exact_total() {
        // 3_000_000_000 / 4_000_000_000 is exactly 0.75 in f64, so the
        // scripted face survives the draw mapping unchanged.
        let mut source = ScriptedSource::faces(4_000_000_000, &[3_000_000_001]);
        let result = roll_notation("1d4000000000", &mut source).unwrap();
        assert_eq!(result.results, vec![3_000_000_001]);
        assert_eq!(result.total, 3_000_000_001);
        assert_eq!(result.critical, None);
    }

    #[test]
    fn huge_pool_sum_does_not_overflow() {
        let mut source =
            ScriptedSource::faces(4_000_000_000, &[2_000_000_001, 2_000_000_001]);
        let result = roll_notation("2d4000000000+5", &mut source).unwrap();
        assert_eq!(result.total, 4_000_000_007);
    }

    #[test]
    fn identical_sources_give_identical_results() {
        let request: RollRequest = "3d8+2".parse().unwrap();
        let mut a = RngSource::seeded(7);
        let mut b = RngSource::seeded(7);
        assert_eq!(request.roll(&mut a), request.roll(&mut b));
    }

    #[test]
    fn parse_failure_propagates() {
        let mut source = ScriptedSource::new([]);
        assert!(roll_notation("2x6", &mut source).is_err());
    }

    #[test]
    fn highest_and_lowest() {
        let mut source = ScriptedSource::faces(6, &[3, 6, 1]);
        let result = roll_notation("3d6", &mut source).unwrap();
        assert_eq!(result.highest(), 6);
        assert_eq!(result.lowest(), 1);
    }

    #[test]
    fn display_single_die() {
        let mut source = ScriptedSource::faces(20, &[15]);
        let result = roll_notation("1d20+2", &mut source).unwrap();
        assert_eq!(result.to_string(), "15+2 = 17");
    }

    #[test]
    fn display_multi_die() {
        let mut source = ScriptedSource::faces(6, &[4, 5]);
        let result = roll_notation("2d6+3", &mut source).unwrap();
        assert_eq!(result.to_string(), "[4, 5]+3 = 12");
    }

    #[test]
    fn display_omits_zero_modifier() {
        let mut source = ScriptedSource::faces(20, &[11]);
        let result = roll_notation("1d20", &mut source).unwrap();
        assert_eq!(result.to_string(), "11 = 11");
    }

    #[test]
    fn critical_serializes_lowercase() {
        let mut source = ScriptedSource::faces(20, &[20]);
        let result = roll_notation("1d20", &mut source).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["critical"], "success");

        let back: RollResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, result);
    }

    proptest! {
        #[test]
        fn faces_stay_in_bounds_and_total_is_consistent(
            count in 1u32..20,
            sides in 1u32..200,
            modifier in -50i32..50,
            seed in any::<u64>(),
        ) {
            let request = RollRequest::new(count, Die::from_sides(sides), modifier);
            let mut source = RngSource::seeded(seed);
            let result = request.roll(&mut source);

            prop_assert_eq!(result.results.len(), count as usize);
            for &face in &result.results {
                prop_assert!((1..=sides).contains(&face));
            }
            let sum: u64 = result.results.iter().map(|&face| u64::from(face)).sum();
            prop_assert_eq!(result.total, sum as i64 + i64::from(modifier));
        }

        #[test]
        fn critical_only_on_single_d20(
            count in 1u32..5,
            sides in 1u32..30,
            seed in any::<u64>(),
        ) {
            let request = RollRequest::new(count, Die::from_sides(sides), 0);
            let mut source = RngSource::seeded(seed);
            let result = request.roll(&mut source);

            if count != 1 || sides != 20 {
                prop_assert_eq!(result.critical, None);
            } else {
                match result.results[0] {
                    20 => prop_assert_eq!(result.critical, Some(Critical::Success)),
                    1 => prop_assert_eq!(result.critical, Some(Critical::Fail)),
                    _ => prop_assert_eq!(result.critical, None),
                }
            }
        }
    }
}
