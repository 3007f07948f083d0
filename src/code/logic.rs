//! Secret generation and guess scoring.

use super::{Score, SecretCode};
use crate::error::{GameError, Result};
use crate::rng::RandomSource;
use std::collections::HashMap;
use tracing::{instrument, trace};

impl SecretCode {
    /// Draw `length` characters from `pool`, independently and with replacement.
    ///
    /// The pool is indexed as a flat sequence, so a character listed twice is
    /// twice as likely to be drawn.
    #[instrument(skip(rng))]
    pub fn generate<R: RandomSource + ?Sized>(pool: &str, length: usize, rng: &mut R) -> Result<Self> {
        let chars: Vec<char> = pool.chars().collect();
        if chars.is_empty() {
            return Err(GameError::invalid_argument("pool must not be empty"));
        }
        if length == 0 {
            return Err(GameError::invalid_argument("length must be at least 1"));
        }

        let secret = (0..length)
            .map(|_| chars[rng.next_index(chars.len())])
            .collect();
        trace!("secret generated");
        Ok(Self { secret })
    }

    /// Score `guess` against this code. See [`score`].
    pub fn score(&self, guess: &str) -> Score {
        score(self, guess)
    }
}

/// Map each character of `text` to the positions holding it.
fn letter_positions(text: &str) -> HashMap<char, Vec<usize>> {
    let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
    for (i, c) in text.chars().enumerate() {
        positions.entry(c).or_default().push(i);
    }
    positions
}

/// Count exact ("correct") and misplaced ("close") matches of `guess`.
///
/// Exact matches are claimed first and removed from play; each remaining
/// secret character then consumes at most one leftover guess occurrence of
/// the same character, so repeated characters are never counted twice.
///
/// Callers are expected to validate length and alphabet first, but the
/// function is total: positions past the end of the shorter sequence simply
/// never match exactly.
pub fn score(code: &SecretCode, guess: &str) -> Score {
    let mut positions = letter_positions(guess);
    let mut consumed = vec![false; code.secret.len()];
    let mut correct = 0;
    let mut close = 0;

    // Pass 1: exact matches
    for (i, letter) in code.secret.iter().enumerate() {
        if let Some(slots) = positions.get_mut(letter) {
            if let Some(k) = slots.iter().position(|&p| p == i) {
                slots.swap_remove(k);
                consumed[i] = true;
                correct += 1;
            }
        }
    }

    // Pass 2: misplaced matches against whatever guess occurrences remain
    for (letter, _) in code
        .secret
        .iter()
        .zip(&consumed)
        .filter(|(_, used)| !**used)
    {
        if let Some(slots) = positions.get_mut(letter) {
            if slots.pop().is_some() {
                close += 1;
            }
        }
    }

    Score {
        text: guess.to_string(),
        correct,
        close,
        length: code.secret.len(),
    }
}
