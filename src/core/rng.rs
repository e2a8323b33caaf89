//! Seeded randomness for deals and reshuffles.
//!
//! A session owns one `GameRng`. Each new game forks a child stream from it,
//! and the board draws its deck from the `"deck"` context of that child, so
//! the deal does not depend on how often the board was reshuffled.
//!
//! ```
//! use baraja::core::GameRng;
//!
//! let mut session = GameRng::new(42);
//! let mut replay = GameRng::new(42);
//!
//! let mut deal = vec![1, 2, 3, 4, 5, 6, 7, 8];
//! let mut again = deal.clone();
//! session.fork().for_context("deck").shuffle(&mut deal);
//! replay.fork().for_context("deck").shuffle(&mut again);
//! assert_eq!(deal, again);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Odd multiplier spreading fork seeds across the seed space.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Reproducible random stream on ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Child stream for the next game. The n-th fork of a seed is always
    /// the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Named stream derived from the seed only, independent of draws so far.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    pub fn index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        use rand::seq::SliceRandom;
        items.shuffle(&mut self.inner);
    }

    /// Position in the stream, for saved games.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.forks,
        }
    }

    /// Resume a stream where `state` left it.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            forks: state.fork_counter,
        }
    }
}

/// Saved position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    /// Forks taken so far; the next new game uses fork `fork_counter + 1`.
    pub fork_counter: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(rng: &mut GameRng) -> Vec<usize> {
        let mut slots: Vec<usize> = (0..20).collect();
        rng.shuffle(&mut slots);
        slots
    }

    #[test]
    fn test_deck_stream_ignores_prior_draws() {
        let fresh = GameRng::new(7);
        let mut used = GameRng::new(7);
        deal(&mut used);
        deal(&mut used);

        assert_eq!(
            deal(&mut fresh.for_context("deck")),
            deal(&mut used.for_context("deck"))
        );
        assert_ne!(deal(&mut fresh.for_context("deck")), deal(&mut fresh.clone()));
    }

    #[test]
    fn test_games_get_distinct_forks() {
        let mut session = GameRng::new(7);
        let first = session.fork();
        let second = session.fork();
        assert_ne!(first.seed(), second.seed());
    }

    #[test]
    fn test_restored_stream_continues_reshuffles() {
        let mut board = GameRng::new(3);
        deal(&mut board);

        let saved = board.state();
        let next = deal(&mut board);

        assert_eq!(deal(&mut GameRng::from_state(&saved)), next);
    }

    #[test]
    fn test_restored_stream_keeps_fork_count() {
        let mut session = GameRng::new(3);
        let _ = session.fork();

        let mut restored = GameRng::from_state(&session.state());
        assert_eq!(restored.state().fork_counter, 1);
        assert_eq!(restored.fork().seed(), session.fork().seed());
    }
}
