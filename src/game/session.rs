//! A single game: one secret code plus the history of scored guesses.

use crate::code::{Score, SecretCode};
use crate::config::GameConfig;
use crate::error::{GameError, Result};
use crate::rng::RandomSource;
use tracing::{debug, info, instrument};

/// An in-progress game.
///
/// The session validates guesses against its pool and length, scores them
/// against a secret it owns exclusively, and keeps them in submission order.
/// There is no won/lost state: callers check [`Score::is_solved`] themselves.
///
/// Not synchronized. Share across threads behind a lock held for the whole
/// [`guess`](Self::guess) call.
#[derive(Debug, Clone)]
pub struct GameSession {
    code: SecretCode,
    pool: String,
    length: usize,
    guesses: Vec<Score>,
}

impl GameSession {
    /// Start a game with a fresh secret drawn from `pool`.
    #[instrument(skip(rng))]
    pub fn new<R: RandomSource + ?Sized>(pool: &str, length: usize, rng: &mut R) -> Result<Self> {
        let code = SecretCode::generate(pool, length, rng)?;
        info!(pool, length, "game session created");
        Ok(Self {
            code,
            pool: pool.to_string(),
            length,
            guesses: Vec::new(),
        })
    }

    /// Start a game from a config's pool and length.
    pub fn from_config<R: RandomSource + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        Self::new(&config.pool, config.length, rng)
    }

    /// Validate, score and record a guess.
    ///
    /// Length is checked before alphabet. On error nothing is recorded.
    #[instrument(skip(self), fields(guess_count = self.guesses.len()))]
    pub fn guess(&mut self, text: &str) -> Result<Score> {
        if let Err(err) = self.validate(text) {
            debug!(%err, "guess rejected");
            return Err(err);
        }

        let score = self.code.score(text);
        debug!(correct = score.correct(), close = score.close(), "guess scored");
        self.guesses.push(score.clone());
        Ok(score)
    }

    fn validate(&self, text: &str) -> Result<()> {
        let actual = text.chars().count();
        if actual != self.length {
            return Err(GameError::InvalidGuessLength {
                expected: self.length,
                actual,
            });
        }
        if text.chars().any(|c| !self.pool.contains(c)) {
            return Err(GameError::InvalidGuessCharacter {
                pool: self.pool.clone(),
                text: text.to_string(),
            });
        }
        Ok(())
    }

    /// Forget all guesses. The secret, pool and length are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        self.guesses.clear();
        info!("game session restarted");
    }

    /// The secret. Meant for diagnostics and end-of-game reveal.
    pub fn code(&self) -> &SecretCode {
        &self.code
    }

    /// Scored guesses in submission order.
    pub fn guesses(&self) -> &[Score] {
        &self.guesses
    }

    pub fn pool(&self) -> &str {
        &self.pool
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn guess_count(&self) -> usize {
        self.guesses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const POOL: &str = "ABCDEFGH";

    fn session_with_secret(pool: &str, secret: &str) -> GameSession {
        let mut source = ScriptedSource::for_secret(pool, secret);
        GameSession::new(pool, secret.chars().count(), &mut source).unwrap()
    }

    #[test]
    fn test_new_session() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let game = GameSession::new(POOL, 4, &mut rng).unwrap();
        assert_eq!(game.pool(), POOL);
        assert_eq!(game.length(), 4);
        assert_eq!(game.code().len(), 4);
        assert_eq!(game.guess_count(), 0);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn test_new_rejects_bad_arguments() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        assert!(matches!(
            GameSession::new("", 4, &mut rng),
            Err(GameError::InvalidArgument { .. })
        ));
        assert!(matches!(
            GameSession::new(POOL, 0, &mut rng),
            Err(GameError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_pinned_secret() {
        let game = session_with_secret(POOL, "BDCA");
        assert_eq!(game.code().to_string(), "BDCA");
    }

    #[test]
    fn test_guess_scores_and_records() {
        let mut game = session_with_secret(POOL, "BDCA");
        let score = game.guess("ABCD").unwrap();
        assert_eq!(score.correct(), 1);
        assert_eq!(score.close(), 3);
        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.guesses()[0], score);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let mut game = session_with_secret(POOL, "BDCA");
        let err = game.guess("ABC").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuessLength {
                expected: 4,
                actual: 3
            }
        );
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn test_bad_character_rejected() {
        let mut game = session_with_secret(POOL, "BDCA");
        let err = game.guess("ABCZ").unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuessCharacter {
                pool: POOL.to_string(),
                text: "ABCZ".to_string()
            }
        );
        assert_eq!(game.guess_count(), 0);
    }

    #[test]
    fn test_length_checked_before_characters() {
        let mut game = session_with_secret(POOL, "BDCA");
        assert!(matches!(
            game.guess("zz"),
            Err(GameError::InvalidGuessLength { .. })
        ));
    }

    #[test]
    fn test_lowercase_is_outside_pool() {
        let mut game = session_with_secret(POOL, "BDCA");
        assert!(matches!(
            game.guess("abcd"),
            Err(GameError::InvalidGuessCharacter { .. })
        ));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let pool = "᛭ᚦᛟᚱᛊ";
        let mut game = session_with_secret(pool, "ᛟᚱᛊ");
        let score = game.guess("ᚱᛟᛊ").unwrap();
        assert_eq!((score.correct(), score.close()), (1, 2));
    }

    #[test]
    fn test_rejection_preserves_history() {
        let mut game = session_with_secret(POOL, "BDCA");
        game.guess("AAAA").unwrap();
        let _ = game.guess("AAAAA");
        let _ = game.guess("AAAX");
        assert_eq!(game.guess_count(), 1);
        assert_eq!(game.guesses()[0].text(), "AAAA");
    }

    #[test]
    fn test_history_order_and_duplicates() {
        let mut game = session_with_secret(POOL, "BDCA");
        for text in ["ABCD", "EEEE", "ABCD", "BDCA"] {
            game.guess(text).unwrap();
        }
        let texts: Vec<&str> = game.guesses().iter().map(Score::text).collect();
        assert_eq!(texts, vec!["ABCD", "EEEE", "ABCD", "BDCA"]);
        assert!(game.guesses()[3].is_solved());
    }

    #[test]
    fn test_restart_keeps_secret() {
        let mut game = session_with_secret(POOL, "BDCA");
        game.guess("ABCD").unwrap();
        game.guess("BDCA").unwrap();
        let before = game.code().clone();

        game.restart();
        assert_eq!(game.guess_count(), 0);
        assert_eq!(game.code(), &before);
        assert_eq!(game.pool(), POOL);
        assert_eq!(game.length(), 4);

        game.restart();
        assert_eq!(game.guess_count(), 0);

        let score = game.guess("BDCA").unwrap();
        assert!(score.is_solved());
    }

    #[test]
    fn test_from_config() {
        let config = GameConfig {
            pool: "XY".to_string(),
            length: 6,
            ..GameConfig::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let game = GameSession::from_config(&config, &mut rng).unwrap();
        assert_eq!(game.length(), 6);
        assert!(game.code().as_chars().iter().all(|c| "XY".contains(*c)));
    }
}
