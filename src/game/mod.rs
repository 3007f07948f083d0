//! Game sessions and presets.

mod difficulty;
mod session;

pub use difficulty::{Difficulty, LETTER_POOL, RUNE_SYMBOLS};
pub use session::GameSession;
