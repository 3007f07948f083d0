//! Error types for code construction and guess validation.

use derive_more::Display;

/// Caller errors raised while building a code or submitting a guess.
///
/// Every variant is an input problem; the session is left untouched when one
/// is returned.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameError {
    /// Construction-time misuse: empty pool or zero length.
    #[display("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// Guess text has the wrong number of characters.
    #[display("Invalid guess length: required={expected}; provided={actual}.")]
    InvalidGuessLength { expected: usize, actual: usize },

    /// Guess text contains a character outside the pool.
    #[display("Guess includes invalid characters: required={pool}; provided={text}.")]
    InvalidGuessCharacter { pool: String, text: String },
}

impl std::error::Error for GameError {}

impl GameError {
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_message() {
        let err = GameError::InvalidGuessLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "Invalid guess length: required=4; provided=3."
        );
    }

    #[test]
    fn test_character_message() {
        let err = GameError::InvalidGuessCharacter {
            pool: "ABCDEFGH".to_string(),
            text: "ABCZ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Guess includes invalid characters: required=ABCDEFGH; provided=ABCZ."
        );
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = GameError::invalid_argument("pool must not be empty");
        assert_eq!(err.to_string(), "Invalid argument: pool must not be empty");
    }
}
