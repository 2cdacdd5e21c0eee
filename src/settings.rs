//! Difficulty tiers and their gameplay multipliers

use serde::{Deserialize, Serialize};

/// Difficulty tier selected before a session starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
    Extreme,
}

/// Multipliers a tier applies to the baseline tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyMods {
    pub enemy_speed: f32,
    pub boss_hp: f32,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
            Difficulty::Hard => "Hard",
            Difficulty::Extreme => "Extreme",
        }
    }

    /// Parse a tier by name; unknown names fall back to `Normal`
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "normal" | "medium" => Difficulty::Normal,
            "hard" => Difficulty::Hard,
            "extreme" => Difficulty::Extreme,
            _ => Difficulty::Normal,
        }
    }

    pub fn mods(&self) -> DifficultyMods {
        match self {
            Difficulty::Easy => DifficultyMods {
                enemy_speed: 0.85,
                boss_hp: 0.85,
            },
            Difficulty::Normal => DifficultyMods {
                enemy_speed: 1.0,
                boss_hp: 1.0,
            },
            Difficulty::Hard => DifficultyMods {
                enemy_speed: 1.2,
                boss_hp: 1.2,
            },
            Difficulty::Extreme => DifficultyMods {
                enemy_speed: 1.75,
                boss_hp: 1.9,
            },
        }
    }

    /// Enemies on the field when a fresh session starts
    pub fn starting_enemies(&self) -> usize {
        match self {
            Difficulty::Extreme => crate::consts::ENEMY_START_COUNT + 2,
            _ => crate::consts::ENEMY_START_COUNT,
        }
    }
}
