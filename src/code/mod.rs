//! Secret code generation and peg scoring.

mod logic;
mod types;

pub use logic::score;
pub use types::{Score, SecretCode};
