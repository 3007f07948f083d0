//! Random source used to pick secret characters.
//!
//! Code generation never reaches for a global generator; callers hand in
//! whatever source they want, which keeps tests deterministic.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces indices uniformly distributed in `[0, bound)`.
pub trait RandomSource {
    /// Returns the next index. `bound` is always greater than zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn next_index(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Reproducible generator for a given seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generator seeded from `seed` when present, from OS entropy otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => seeded_rng(seed),
        None => StdRng::from_entropy(),
    }
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each index is reduced modulo the requested bound. Useful for pinning a
/// secret in tests and demos.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    indices: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(indices: Vec<usize>) -> Self {
        Self {
            indices,
            cursor: 0,
        }
    }

    /// Source that reproduces `secret` when drawing from `pool`.
    ///
    /// Characters missing from `pool` map to index 0.
    pub fn for_secret(pool: &str, secret: &str) -> Self {
        let pool: Vec<char> = pool.chars().collect();
        let indices = secret
            .chars()
            .map(|c| pool.iter().position(|&p| p == c).unwrap_or(0))
            .collect::<Vec<_>>();
        Self::new(indices)
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        index % bound
    }
}
