//! Game configuration.

use crate::game::{Difficulty, LETTER_POOL, RUNE_SYMBOLS};
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;

/// Settings for starting a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Characters a secret is drawn from; repeats weight the draw
    pub pool: String,

    /// Number of characters in the secret and in every guess
    pub length: usize,

    /// Guesses allowed before the front end declares a loss (None = unlimited)
    pub max_guesses: Option<usize>,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pool: LETTER_POOL.to_string(),
            length: 4,
            max_guesses: Some(10),
            seed: None,
        }
    }
}

/// Failure to load or accept a configuration.
#[derive(Debug, Display)]
pub enum ConfigError {
    #[display("Could not read config: {_0}")]
    Io(io::Error),

    #[display("Could not parse config: {_0}")]
    Parse(serde_json::Error),

    #[display("Invalid config: {_0}")]
    Invalid(String),
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Invalid(_) => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

impl GameConfig {
    /// Letter-pool preset for a difficulty.
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        Self {
            pool: difficulty.letter_pool(),
            length: difficulty.code_length(),
            max_guesses: Some(difficulty.max_guesses()),
            seed: None,
        }
    }

    /// Rune-glyph preset for a difficulty.
    pub fn runes(difficulty: Difficulty) -> Self {
        Self {
            pool: difficulty.rune_pool(),
            ..Self::from_difficulty(difficulty)
        }
    }

    /// Swap each distinct pool character for a rune glyph, in order of first
    /// appearance. Pool size and repeat weighting are kept.
    pub fn with_rune_pool(mut self) -> Result<Self, ConfigError> {
        let mut distinct: Vec<char> = Vec::new();
        for c in self.pool.chars() {
            if !distinct.contains(&c) {
                distinct.push(c);
            }
        }
        if distinct.len() > RUNE_SYMBOLS.len() {
            return Err(ConfigError::Invalid(format!(
                "rune pool supports at most {} distinct characters, got {}",
                RUNE_SYMBOLS.len(),
                distinct.len()
            )));
        }

        self.pool = self
            .pool
            .chars()
            .filter_map(|c| distinct.iter().position(|&d| d == c))
            .map(|i| RUNE_SYMBOLS[i])
            .collect();
        Ok(self)
    }

    /// Check the same rules secret generation enforces, plus a non-zero guess limit.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pool.is_empty() {
            return Err(ConfigError::Invalid("pool must not be empty".to_string()));
        }
        if self.length == 0 {
            return Err(ConfigError::Invalid("length must be at least 1".to_string()));
        }
        if self.max_guesses == Some(0) {
            return Err(ConfigError::Invalid(
                "max_guesses must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
