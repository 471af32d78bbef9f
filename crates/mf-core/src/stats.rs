//! Ability scores and stat blocks.

use serde::{Deserialize, Serialize};

/// One of the six ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ability {
    /// Strength.
    Str,
    /// Constitution.
    Con,
    /// Dexterity.
    Dex,
    /// Intelligence.
    Int,
    /// Wisdom.
    Wis,
    /// Charisma.
    Cha,
}

impl Ability {
    /// All abilities in display order.
    pub const ALL: [Ability; 6] = [
        Ability::Str,
        Ability::Con,
        Ability::Dex,
        Ability::Int,
        Ability::Wis,
        Ability::Cha,
    ];

    /// Short uppercase label ("STR", "CON", ...).
    pub fn label(self) -> &'static str {
        match self {
            Self::Str => "STR",
            Self::Con => "CON",
            Self::Dex => "DEX",
            Self::Int => "INT",
            Self::Wis => "WIS",
            Self::Cha => "CHA",
        }
    }

    /// Index of this ability in [`Ability::ALL`].
    pub fn index(self) -> usize {
        match self {
            Self::Str => 0,
            Self::Con => 1,
            Self::Dex => 2,
            Self::Int => 3,
            Self::Wis => 4,
            Self::Cha => 5,
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// The six ability scores of a character, in STR,CON,DEX,INT,WIS,CHA order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatBlock {
    scores: [i32; 6],
}

impl StatBlock {
    /// Create a stat block from six scores in STR,CON,DEX,INT,WIS,CHA order.
    pub const fn new(scores: [i32; 6]) -> Self {
        Self { scores }
    }

    /// Get the score for one ability.
    pub fn get(&self, ability: Ability) -> i32 {
        self.scores[ability.index()]
    }

    /// Set the score for one ability.
    pub fn set(&mut self, ability: Ability, value: i32) {
        self.scores[ability.index()] = value;
    }

    /// All six scores in STR,CON,DEX,INT,WIS,CHA order.
    pub fn as_array(&self) -> [i32; 6] {
        self.scores
    }
}
