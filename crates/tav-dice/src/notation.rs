//! Dice notation parsing.
//!
//! Grammar: `[count] "d" sides [("+"|"-") digits]`, case-insensitive on the
//! `d`. The count defaults to 1 when omitted. Whitespace around the whole
//! notation is trimmed; whitespace inside it is an error.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{ParseError, ParseResult};
use crate::roll::{Critical, RollResult};
use crate::source::RandomSource;

/// A parsed dice notation: how many dice, which die, and a flat modifier.
///
/// The modifier is added once to the sum, not per die. `count` is at least 1
/// for any request produced by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRequest {
    /// Number of dice to roll.
    pub count: u32,
    /// The die to roll.
    pub die: Die,
    /// Flat modifier added to the sum.
    pub modifier: i32,
}

impl RollRequest {
    /// Create a request directly, without going through notation.
    ///
    /// A count of zero is clamped to 1, so every request rolls at least one
    /// die and formats to notation its own parser accepts.
    pub fn new(count: u32, die: Die, modifier: i32) -> Self {
        Self {
            count: count.max(1),
            die,
            modifier,
        }
    }

    /// Opt-in strict validation: reject dice outside the standard tabletop
    /// set {4, 6, 8, 10, 12, 20, 100}.
    ///
    /// The parser itself accepts any positive side count so homebrew dice
    /// like `1d7` still work.
    pub fn require_standard(&self) -> ParseResult<()> {
        if self.die.is_standard() {
            Ok(())
        } else {
            Err(ParseError::NonStandardDie(self.die.sides()))
        }
    }

    /// Roll this request using the given randomness source.
    ///
    /// Draws one face per die in order, sums them, and applies the modifier.
    /// A critical tag is attached only for a single d20: a natural 20 is a
    /// success, a natural 1 a fail. The result is a pure function of the
    /// request and the source's sample sequence. Faces accumulate in 64
    /// bits, so totals stay exact even for huge homebrew side counts.
    pub fn roll(&self, source: &mut impl RandomSource) -> RollResult {
        let sides = self.die.sides();
        let results: Vec<u32> = (0..self.count).map(|_| source.draw(sides)).collect();
        let sum: u64 = results.iter().map(|&face| u64::from(face)).sum();
        let total = sum as i64 + i64::from(self.modifier);

        let critical = if self.count == 1 && sides == 20 {
            match results.first().copied() {
                Some(20) => Some(Critical::Success),
                Some(1) => Some(Critical::Fail),
                _ => None,
            }
        } else {
            None
        };

        RollResult {
            count: self.count,
            die: self.die,
            modifier: self.modifier,
            results,
            total,
            critical,
        }
    }
}

impl FromStr for RollRequest {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let Some(d_pos) = s.find(['d', 'D']) else {
            return Err(ParseError::MissingDie);
        };
        let count_part = &s[..d_pos];
        let rest = &s[d_pos + 1..];

        let count = parse_count(count_part)?;

        let sides_end = rest.find(['+', '-']).unwrap_or(rest.len());
        let sides = parse_sides(&rest[..sides_end])?;

        let modifier = if sides_end == rest.len() {
            0
        } else {
            parse_modifier(&rest[sides_end..])?
        };

        Ok(Self {
            count,
            die: Die::from_sides(sides),
            modifier,
        })
    }
}

impl std::fmt::Display for RollRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.modifier {
            m if m > 0 => write!(f, "+{m}"),
            m if m < 0 => write!(f, "{m}"),
            _ => Ok(()),
        }
    }
}

/// Parse the optional count before the `d`. Empty means 1.
fn parse_count(part: &str) -> ParseResult<u32> {
    if part.is_empty() {
        return Ok(1);
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidCount(part.to_string()));
    }
    let count: u32 = part
        .parse()
        .map_err(|_| ParseError::InvalidCount(part.to_string()))?;
    if count == 0 {
        return Err(ParseError::ZeroCount);
    }
    Ok(count)
}

/// Parse the side count after the `d`. Must be a positive integer.
fn parse_sides(part: &str) -> ParseResult<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidSides(part.to_string()));
    }
    let sides: u32 = part
        .parse()
        .map_err(|_| ParseError::InvalidSides(part.to_string()))?;
    if sides == 0 {
        return Err(ParseError::InvalidSides(part.to_string()));
    }
    Ok(sides)
}

/// Parse a signed modifier like `+3` or `-1`. The leading byte is the sign.
fn parse_modifier(part: &str) -> ParseResult<i32> {
    let digits = &part[1..];
    let digit_len = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digit_len == 0 {
        return Err(ParseError::InvalidModifier(part.to_string()));
    }
    if digit_len < digits.len() {
        return Err(ParseError::TrailingInput(digits[digit_len..].to_string()));
    }
    let value: i32 = digits
        .parse()
        .map_err(|_| ParseError::InvalidModifier(part.to_string()))?;
    Ok(if part.starts_with('-') { -value } else { value })
}
