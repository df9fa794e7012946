//! The eighteen standard skills and proficiency tracking.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::ability::Ability;

/// One of the standard skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillName {
    /// Tumbling, balance, escapes (DEX).
    Acrobatics,
    /// Calming and reading animals (WIS).
    AnimalHandling,
    /// Magical lore (INT).
    Arcana,
    /// Climbing, jumping, swimming (STR).
    Athletics,
    /// Lying convincingly (CHA).
    Deception,
    /// Historical lore (INT).
    History,
    /// Reading intentions (WIS).
    Insight,
    /// Threats and hostile pressure (CHA).
    Intimidation,
    /// Deduction and searching (INT).
    Investigation,
    /// Diagnosis and stabilization (WIS).
    Medicine,
    /// Natural lore (INT).
    Nature,
    /// Noticing things (WIS).
    Perception,
    /// Entertaining an audience (CHA).
    Performance,
    /// Winning people over (CHA).
    Persuasion,
    /// Religious lore (INT).
    Religion,
    /// Pickpocketing and palming (DEX).
    SleightOfHand,
    /// Moving unseen and unheard (DEX).
    Stealth,
    /// Tracking and foraging (WIS).
    Survival,
}

impl SkillName {
    /// All skills in alphabetical order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Acrobatics,
            Self::AnimalHandling,
            Self::Arcana,
            Self::Athletics,
            Self::Deception,
            Self::History,
            Self::Insight,
            Self::Intimidation,
            Self::Investigation,
            Self::Medicine,
            Self::Nature,
            Self::Perception,
            Self::Performance,
            Self::Persuasion,
            Self::Religion,
            Self::SleightOfHand,
            Self::Stealth,
            Self::Survival,
        ]
    }

    /// The ability that governs this skill.
    pub fn ability(self) -> Ability {
        match self {
            Self::Athletics => Ability::Strength,
            Self::Acrobatics | Self::SleightOfHand | Self::Stealth => Ability::Dexterity,
            Self::Arcana
            | Self::History
            | Self::Investigation
            | Self::Nature
            | Self::Religion => Ability::Intelligence,
            Self::AnimalHandling
            | Self::Insight
            | Self::Medicine
            | Self::Perception
            | Self::Survival => Ability::Wisdom,
            Self::Deception | Self::Intimidation | Self::Performance | Self::Persuasion => {
                Ability::Charisma
            }
        }
    }

    /// Parse a skill from its display name, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "acrobatics" => Some(Self::Acrobatics),
            "animal handling" => Some(Self::AnimalHandling),
            "arcana" => Some(Self::Arcana),
            "athletics" => Some(Self::Athletics),
            "deception" => Some(Self::Deception),
            "history" => Some(Self::History),
            "insight" => Some(Self::Insight),
            "intimidation" => Some(Self::Intimidation),
            "investigation" => Some(Self::Investigation),
            "medicine" => Some(Self::Medicine),
            "nature" => Some(Self::Nature),
            "perception" => Some(Self::Perception),
            "performance" => Some(Self::Performance),
            "persuasion" => Some(Self::Persuasion),
            "religion" => Some(Self::Religion),
            "sleight of hand" => Some(Self::SleightOfHand),
            "stealth" => Some(Self::Stealth),
            "survival" => Some(Self::Survival),
            _ => None,
        }
    }
}

impl std::fmt::Display for SkillName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Acrobatics => "Acrobatics",
            Self::AnimalHandling => "Animal Handling",
            Self::Arcana => "Arcana",
            Self::Athletics => "Athletics",
            Self::Deception => "Deception",
            Self::History => "History",
            Self::Insight => "Insight",
            Self::Intimidation => "Intimidation",
            Self::Investigation => "Investigation",
            Self::Medicine => "Medicine",
            Self::Nature => "Nature",
            Self::Perception => "Perception",
            Self::Performance => "Performance",
            Self::Persuasion => "Persuasion",
            Self::Religion => "Religion",
            Self::SleightOfHand => "Sleight of Hand",
            Self::Stealth => "Stealth",
            Self::Survival => "Survival",
        };
        write!(f, "{name}")
    }
}

/// Which skills a character is proficient in.
///
/// A fresh character is proficient in nothing; class and background picks
/// are added by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    proficient: BTreeSet<SkillName>,
}

impl SkillSet {
    /// Create an empty skill set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the character is proficient in the skill.
    pub fn is_proficient(&self, skill: SkillName) -> bool {
        self.proficient.contains(&skill)
    }

    /// Mark a skill as proficient.
    pub fn add_proficiency(&mut self, skill: SkillName) {
        self.proficient.insert(skill);
    }

    /// Remove proficiency in a skill.
    pub fn remove_proficiency(&mut self, skill: SkillName) {
        self.proficient.remove(&skill);
    }

    /// Iterate over the proficient skills in alphabetical order.
    pub fn proficiencies(&self) -> impl Iterator<Item = SkillName> + '_ {
        self.proficient.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eighteen_skills() {
        assert_eq!(SkillName::all().len(), 18);
    }

    #[test]
    fn governing_abilities() {
        assert_eq!(SkillName::Athletics.ability(), Ability::Strength);
        assert_eq!(SkillName::Stealth.ability(), Ability::Dexterity);
        assert_eq!(SkillName::Arcana.ability(), Ability::Intelligence);
        assert_eq!(SkillName::Perception.ability(), Ability::Wisdom);
        assert_eq!(SkillName::Persuasion.ability(), Ability::Charisma);
    }

    #[test]
    fn parse_round_trips_display() {
        for &skill in SkillName::all() {
            assert_eq!(SkillName::parse(&skill.to_string()), Some(skill));
        }
        assert_eq!(SkillName::parse("sleight of hand"), Some(SkillName::SleightOfHand));
        assert_eq!(SkillName::parse("basket weaving"), None);
    }

    #[test]
    fn proficiency_tracking() {
        let mut skills = SkillSet::new();
        assert!(!skills.is_proficient(SkillName::Stealth));

        skills.add_proficiency(SkillName::Stealth);
        skills.add_proficiency(SkillName::Perception);
        assert!(skills.is_proficient(SkillName::Stealth));
        assert_eq!(skills.proficiencies().count(), 2);

        skills.remove_proficiency(SkillName::Stealth);
        assert!(!skills.is_proficient(SkillName::Stealth));
    }
}
