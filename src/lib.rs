//! Codebreaker - Mastermind-style code scoring.
//!
//! A [`GameSession`] owns a randomly drawn [`SecretCode`], validates guesses
//! against its pool and length, and records each [`Score`] in order. The
//! scoring itself is the pure [`score`] function.

pub mod build_info;
pub mod code;
pub mod config;
pub mod error;
pub mod game;
pub mod rng;

pub use code::{score, Score, SecretCode};
pub use config::{ConfigError, GameConfig};
pub use error::{GameError, Result};
pub use game::{Difficulty, GameSession, LETTER_POOL, RUNE_SYMBOLS};
pub use rng::{rng_from_seed, seeded_rng, RandomSource, ScriptedSource};
