//! Face pools per difficulty.

use crate::core::Difficulty;
use crate::tiles::{Face, Suit, MAX_COURT_RANK, MAX_PIP_RANK};

/// Highest pip rank dealt on `Easy`.
pub const EASY_MAX_RANK: u8 = 6;

/// The face types a deck may be drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FacePool {
    faces: Vec<Face>,
}

impl FacePool {
    /// Build the pool for a difficulty profile.
    ///
    /// - `Easy`: Coins and Cups, ranks 1..=6
    /// - `Medium`: Coins, Cups and Swords 1..=9, Knights and Jokers
    /// - `Hard`: `Medium` plus Jacks and Kings
    #[must_use]
    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        let (pips, max_rank, courts): (&[Suit], u8, &[Suit]) = match difficulty {
            Difficulty::Easy => (&[Suit::Coins, Suit::Cups], EASY_MAX_RANK, &[]),
            Difficulty::Medium => (&Suit::PIPS, MAX_PIP_RANK, &[Suit::Knight, Suit::Joker]),
            Difficulty::Hard => (
                &Suit::PIPS,
                MAX_PIP_RANK,
                &[Suit::Knight, Suit::Joker, Suit::Jack, Suit::King],
            ),
        };

        let pip_faces = pips
            .iter()
            .flat_map(|&suit| (1..=max_rank).map(move |rank| Face::new(suit, rank)));
        let court_faces = courts
            .iter()
            .flat_map(|&suit| (1..=MAX_COURT_RANK).map(move |rank| Face::new(suit, rank)));

        Self {
            faces: pip_faces.chain(court_faces).collect(),
        }
    }

    /// Build a pool from explicit faces.
    #[must_use]
    pub fn from_faces(faces: Vec<Face>) -> Self {
        Self { faces }
    }

    #[must_use]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count_suit(pool: &FacePool, suit: Suit) -> usize {
        pool.faces().iter().filter(|face| face.suit == suit).count()
    }

    #[test]
    fn test_easy_pool() {
        let pool = FacePool::for_difficulty(Difficulty::Easy);
        assert_eq!(pool.len(), 12);
        assert_eq!(count_suit(&pool, Suit::Coins), 6);
        assert_eq!(count_suit(&pool, Suit::Cups), 6);
        assert!(pool.faces().iter().all(|face| face.rank <= EASY_MAX_RANK));
        assert!(pool.faces().iter().all(|face| face.suit.is_pip()));
    }

    #[test]
    fn test_medium_pool() {
        let pool = FacePool::for_difficulty(Difficulty::Medium);
        assert_eq!(pool.len(), 27 + 8);
        assert_eq!(count_suit(&pool, Suit::Swords), 9);
        assert_eq!(count_suit(&pool, Suit::Knight), 4);
        assert_eq!(count_suit(&pool, Suit::Joker), 4);
        assert_eq!(count_suit(&pool, Suit::Jack), 0);
    }

    #[test]
    fn test_hard_pool() {
        let pool = FacePool::for_difficulty(Difficulty::Hard);
        assert_eq!(pool.len(), 27 + 16);
        assert_eq!(count_suit(&pool, Suit::Jack), 4);
        assert_eq!(count_suit(&pool, Suit::King), 4);
    }

    #[test]
    fn test_pools_have_no_duplicates() {
        for difficulty in Difficulty::ALL {
            let mut faces = FacePool::for_difficulty(difficulty).faces().to_vec();
            let len = faces.len();
            faces.sort();
            faces.dedup();
            assert_eq!(faces.len(), len, "{}", difficulty);
        }
    }
}
