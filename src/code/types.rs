//! Secret code and score data structures.

use serde::Serialize;
use std::fmt;

/// The hidden sequence the player is trying to deduce.
///
/// Immutable after construction; build one with
/// [`SecretCode::generate`](super::SecretCode::generate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretCode {
    pub(super) secret: Vec<char>,
}

impl SecretCode {
    /// Characters of the secret, in order.
    pub fn as_chars(&self) -> &[char] {
        &self.secret
    }

    pub fn len(&self) -> usize {
        self.secret.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }
}

impl fmt::Display for SecretCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.secret.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

/// A guess together with its peg counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Score {
    pub(super) text: String,
    pub(super) correct: usize,
    pub(super) close: usize,
    /// Length of the secret this guess was scored against.
    #[serde(skip)]
    pub(super) length: usize,
}

impl Score {
    /// The guessed sequence.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Characters matching the secret at the same position.
    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Characters present in the secret but at another position.
    pub fn close(&self) -> usize {
        self.close
    }

    /// True only when the guess equals the secret: every position of a
    /// same-length guess matched.
    pub fn is_solved(&self) -> bool {
        self.correct == self.length && self.text.chars().count() == self.length
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{text: \"{}\", correct: {}, close: {}}}",
            self.text, self.correct, self.close
        )
    }
}
