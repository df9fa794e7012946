//! Dice engine for Tavernkeeper.
//!
//! Parses tabletop dice notation (`"2d6+3"`), rolls it through an injected
//! randomness source, and classifies critical successes and fails on
//! single-d20 rolls. Advantage and disadvantage are first-class operations
//! rather than a generic pool feature, so the "critical keys off the chosen
//! die" rule stays unambiguous.
//!
//! Every operation is a synchronous pure function of its inputs and the
//! injected [`RandomSource`]; nothing here reads a global generator, performs
//! I/O, or keeps state between calls.

pub mod check;
pub mod die;
pub mod error;
pub mod notation;
pub mod roll;
pub mod source;

pub use check::{RollMode, roll_ability_check, roll_d20};
pub use die::Die;
pub use error::{ParseError, ParseResult};
pub use notation::RollRequest;
pub use roll::{Critical, RollResult, roll_notation};
pub use source::{RandomSource, RngSource, ScriptedSource};
