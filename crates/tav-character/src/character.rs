//! Characters and their derived check modifiers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tav_dice::{RandomSource, RollMode, RollRequest, RollResult, roll_ability_check};

use crate::ability::{Ability, AbilityScores, proficiency_bonus};
use crate::error::{CharacterError, CharacterResult};
use crate::pool::Pool;
use crate::skill::{SkillName, SkillSet};

/// A weapon or spell attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attack {
    /// Attack name (e.g. "Longsword").
    pub name: String,
    /// Bonus added to the d20 attack roll.
    pub hit_bonus: i32,
    /// Damage dice, parsed from notation at construction.
    pub damage: RollRequest,
    /// Damage type (e.g. "slashing").
    pub damage_type: String,
}

impl Attack {
    /// Create an attack, parsing its damage notation (e.g. `"1d8+3"`).
    pub fn new(
        name: impl Into<String>,
        hit_bonus: i32,
        damage: &str,
        damage_type: impl Into<String>,
    ) -> CharacterResult<Self> {
        Ok(Self {
            name: name.into(),
            hit_bonus,
            damage: damage.parse()?,
            damage_type: damage_type.into(),
        })
    }

    /// Roll the d20 to hit, in the given mode.
    pub fn roll_to_hit(&self, mode: RollMode, source: &mut impl RandomSource) -> RollResult {
        roll_ability_check(self.hit_bonus, mode, source)
    }

    /// Roll this attack's damage.
    pub fn roll_damage(&self, source: &mut impl RandomSource) -> RollResult {
        self.damage.roll(source)
    }
}

/// A player character.
///
/// Holds raw scores and proficiencies; every check modifier is derived on
/// demand, so edits to scores or level never leave stale bonuses behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Character name.
    pub name: String,
    /// Species.
    pub race: String,
    /// Character class.
    pub class: String,
    /// Level, 1 to 20.
    pub level: u32,
    /// Experience points.
    pub xp: u32,
    /// The six ability scores.
    pub abilities: AbilityScores,
    /// Skill proficiencies.
    pub skills: SkillSet,
    /// Saving-throw proficiencies.
    pub saving_throws: BTreeSet<Ability>,
    /// Hit points.
    pub hit_points: Pool,
    /// Temporary hit points, tracked apart from the pool.
    pub temp_hp: u32,
    /// Armor class.
    pub armor_class: u32,
    /// Walking speed in feet.
    pub speed: u32,
    /// Whether the character currently has inspiration.
    pub inspiration: bool,
    /// Known attacks.
    pub attacks: Vec<Attack>,
}

impl Character {
    /// Create a fresh level-1 character with baseline stats: all scores 10,
    /// 10 hit points, AC 10, speed 30.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            race: "Human".to_string(),
            class: "Fighter".to_string(),
            level: 1,
            xp: 0,
            abilities: AbilityScores::default(),
            skills: SkillSet::new(),
            saving_throws: BTreeSet::new(),
            hit_points: Pool::new("Hit Points", 10),
            temp_hp: 0,
            armor_class: 10,
            speed: 30,
            inspiration: false,
            attacks: Vec::new(),
        }
    }

    /// Set the character's level, rejecting values outside 1 to 20.
    pub fn set_level(&mut self, level: u32) -> CharacterResult<()> {
        if !(1..=20).contains(&level) {
            return Err(CharacterError::InvalidLevel(level));
        }
        self.level = level;
        Ok(())
    }

    /// Proficiency bonus at the current level.
    pub fn proficiency_bonus(&self) -> i32 {
        proficiency_bonus(self.level)
    }

    /// Modifier for a raw ability check.
    pub fn ability_modifier(&self, ability: Ability) -> i32 {
        self.abilities.modifier(ability)
    }

    /// Modifier for a skill check: governing ability modifier, plus the
    /// proficiency bonus when proficient.
    pub fn skill_modifier(&self, skill: SkillName) -> i32 {
        let base = self.abilities.modifier(skill.ability());
        if self.skills.is_proficient(skill) {
            base + self.proficiency_bonus()
        } else {
            base
        }
    }

    /// Modifier for a saving throw.
    pub fn saving_throw_modifier(&self, ability: Ability) -> i32 {
        let base = self.abilities.modifier(ability);
        if self.saving_throws.contains(&ability) {
            base + self.proficiency_bonus()
        } else {
            base
        }
    }

    /// Passive score for a skill: 10 plus the skill modifier.
    pub fn passive_score(&self, skill: SkillName) -> i32 {
        10 + self.skill_modifier(skill)
    }

    /// Initiative modifier (Dexterity).
    pub fn initiative_modifier(&self) -> i32 {
        self.abilities.modifier(Ability::Dexterity)
    }

    /// Spell save DC for a casting ability: 8 + proficiency + modifier.
    pub fn spell_save_dc(&self, ability: Ability) -> i32 {
        8 + self.proficiency_bonus() + self.abilities.modifier(ability)
    }

    /// Spell attack bonus for a casting ability: proficiency + modifier.
    pub fn spell_attack_bonus(&self, ability: Ability) -> i32 {
        self.proficiency_bonus() + self.abilities.modifier(ability)
    }

    /// Roll a skill check with the derived modifier.
    pub fn roll_skill_check(
        &self,
        skill: SkillName,
        mode: RollMode,
        source: &mut impl RandomSource,
    ) -> RollResult {
        roll_ability_check(self.skill_modifier(skill), mode, source)
    }

    /// Roll a saving throw with the derived modifier.
    pub fn roll_saving_throw(
        &self,
        ability: Ability,
        mode: RollMode,
        source: &mut impl RandomSource,
    ) -> RollResult {
        roll_ability_check(self.saving_throw_modifier(ability), mode, source)
    }
}
