//! Deck generation.
//!
//! Faces are drawn from the pool in pairs: each draw picks a face type
//! uniformly at random and adds two copies. Every face therefore has a
//! partner before occlusion is taken into account; the layout alone decides
//! how hard the deal is.
//!
//! ```
//! use baraja::core::{Difficulty, GameRng};
//! use baraja::deck::{generate_deck, FacePool};
//!
//! let pool = FacePool::for_difficulty(Difficulty::Easy);
//! let deck = generate_deck(&pool, 20, &mut GameRng::new(7));
//! assert_eq!(deck.len(), 20);
//! ```

use crate::core::{GameRng, TileId};
use crate::tiles::Face;

use super::pool::FacePool;

/// A dealt card: the ID assigned at creation and its face.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeckEntry {
    pub id: TileId,
    pub face: Face,
}

/// Generate a shuffled deck of `target` faces.
///
/// IDs are assigned sequentially from `TileId::FIRST` before the shuffle.
/// An odd `target` cannot be paired completely; it is rounded down to an
/// even size and a warning is logged. An empty pool yields an empty deck.
#[must_use]
pub fn generate_deck(pool: &FacePool, target: usize, rng: &mut GameRng) -> Vec<DeckEntry> {
    let target = if target % 2 == 0 {
        target
    } else {
        log::warn!("Deck target {} is odd, dealing {} tiles", target, target - 1);
        target - 1
    };

    if pool.is_empty() {
        if target > 0 {
            log::warn!("Empty face pool, dealing no tiles");
        }
        return Vec::new();
    }

    let mut deck = Vec::with_capacity(target);
    let mut next_id = TileId::FIRST;
    while deck.len() < target {
        let face = pool.faces()[rng.index(pool.len())];
        for _ in 0..2 {
            deck.push(DeckEntry { id: next_id, face });
            next_id = next_id.next();
        }
    }

    rng.shuffle(&mut deck);
    deck
}
