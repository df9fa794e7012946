//! Character data model for Tavernkeeper.
//!
//! Ability scores, skills, saving throws, and derived modifiers for D&D 5e
//! style characters. The dice engine in `tav-dice` only ever sees plain
//! numeric modifiers; this crate is where those numbers come from
//! (`floor((score - 10) / 2)`, proficiency `floor((level - 1) / 4) + 2`).
//!
//! No rules engine lives here: nothing resolves combat, spell effects, or
//! rule interactions. Persistence and rendering are the caller's concern.

pub mod ability;
pub mod character;
pub mod error;
pub mod pool;
pub mod skill;

pub use ability::{Ability, AbilityScores, ability_modifier, proficiency_bonus};
pub use character::{Attack, Character};
pub use error::{CharacterError, CharacterResult};
pub use pool::Pool;
pub use skill::{SkillName, SkillSet};
