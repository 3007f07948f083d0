//! Named game presets.

use serde::{Deserialize, Serialize};

/// Rune glyphs usable as a pool. First 5 for Novice, first 6 for
/// Apprentice/Journeyman, all 8 for Master.
pub const RUNE_SYMBOLS: &[char] = &['᛭', 'ᚦ', 'ᛟ', 'ᚱ', 'ᛊ', 'ᚹ', 'ᛏ', 'ᚲ'];

/// Letter pool used by the default game.
pub const LETTER_POOL: &str = "ABCDEFGH";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Novice,
    Apprentice,
    Journeyman,
    Master,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Novice,
        Difficulty::Apprentice,
        Difficulty::Journeyman,
        Difficulty::Master,
    ];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Novice)
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.name().eq_ignore_ascii_case(name))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Novice => "Novice",
            Self::Apprentice => "Apprentice",
            Self::Journeyman => "Journeyman",
            Self::Master => "Master",
        }
    }

    /// Number of distinct symbols in the pool.
    pub fn pool_size(&self) -> usize {
        match self {
            Self::Novice => 5,
            Self::Apprentice | Self::Journeyman => 6,
            Self::Master => 8,
        }
    }

    pub fn code_length(&self) -> usize {
        match self {
            Self::Novice => 3,
            Self::Apprentice | Self::Journeyman => 4,
            Self::Master => 5,
        }
    }

    pub fn max_guesses(&self) -> usize {
        match self {
            Self::Novice | Self::Apprentice => 10,
            Self::Journeyman | Self::Master => 8,
        }
    }

    /// Letter pool for this difficulty (a prefix of [`LETTER_POOL`]).
    pub fn letter_pool(&self) -> String {
        LETTER_POOL.chars().take(self.pool_size()).collect()
    }

    /// Rune pool for this difficulty (a prefix of [`RUNE_SYMBOLS`]).
    pub fn rune_pool(&self) -> String {
        RUNE_SYMBOLS[..self.pool_size()].iter().collect()
    }
}
