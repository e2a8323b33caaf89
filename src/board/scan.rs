//! Pair scanning: the match rule on board tiles, move detection and hints.
//!
//! All scans compare every unordered pair of free tiles, so they are
//! O(k²) in the number of free tiles. Pairs are visited in deal order, which
//! makes the hint deterministic for a given board.

use std::ops::ControlFlow;

use super::table::Board;
use crate::core::TileId;
use crate::tiles::Tile;

impl Board {
    /// Whether the tiles with these IDs form a removable pair.
    ///
    /// Only the faces are compared; occlusion is not checked. False for
    /// unknown IDs and when both IDs are the same.
    #[must_use]
    pub fn is_match(&self, a: TileId, b: TileId) -> bool {
        match (self.tile(a), self.tile(b)) {
            (Some(a), Some(b)) => a.matches(b),
            _ => false,
        }
    }

    /// Visible tiles that can currently be selected, in deal order.
    pub fn free_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.visible_tiles().filter(move |tile| self.is_free(tile))
    }

    /// Whether at least one removable pair is available.
    #[must_use]
    pub fn has_valid_moves(&self) -> bool {
        self.hint_pair().is_some()
    }

    /// The first available pair, if any.
    #[must_use]
    pub fn hint_pair(&self) -> Option<(TileId, TileId)> {
        let mut found = None;
        self.scan_pairs(|a, b| {
            found = Some((a.id, b.id));
            ControlFlow::Break(())
        });
        if let Some((a, b)) = found {
            log::debug!("Move available: {} and {}", a, b);
        }
        found
    }

    /// Every available pair.
    #[must_use]
    pub fn matching_pairs(&self) -> Vec<(TileId, TileId)> {
        let mut pairs = Vec::new();
        self.scan_pairs(|a, b| {
            pairs.push((a.id, b.id));
            ControlFlow::Continue(())
        });
        pairs
    }

    /// Visit matching pairs of free tiles until `visit` breaks.
    fn scan_pairs<F>(&self, mut visit: F)
    where
        F: FnMut(&Tile, &Tile) -> ControlFlow<()>,
    {
        let free: Vec<&Tile> = self.free_tiles().collect();
        for (i, a) in free.iter().enumerate() {
            for b in &free[i + 1..] {
                if a.matches(b) && visit(*a, *b).is_break() {
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Difficulty, GameRng, LayoutVariant};
    use crate::tiles::{Face, Suit};

    fn board(tiles: &[(Face, (i32, i32, i32))]) -> Board {
        let tiles = tiles
            .iter()
            .enumerate()
            .map(|(i, &(face, slot))| Tile::new(TileId(i as u32), face, slot.into()))
            .collect();
        Board::from_tiles(tiles, GameRng::new(1)).unwrap()
    }

    const COINS_1: Face = Face::new(Suit::Coins, 1);
    const CUPS_2: Face = Face::new(Suit::Cups, 2);

    #[test]
    fn test_two_tile_board() {
        let board = board(&[(COINS_1, (0, 0, 0)), (COINS_1, (4, 0, 0))]);
        assert!(board.has_valid_moves());
        assert_eq!(board.hint_pair(), Some((TileId(0), TileId(1))));
    }

    #[test]
    fn test_no_match_no_moves() {
        let board = board(&[(COINS_1, (0, 0, 0)), (CUPS_2, (4, 0, 0))]);
        assert!(!board.has_valid_moves());
        assert_eq!(board.hint_pair(), None);
        assert!(board.matching_pairs().is_empty());
    }

    #[test]
    fn test_blocked_pair_is_not_a_move() {
        // The two Coins are stacked: the lower one is covered
        let board = board(&[(COINS_1, (0, 0, 0)), (COINS_1, (0, 0, 1))]);
        assert!(!board.has_valid_moves());
    }

    #[test]
    fn test_hidden_tiles_are_not_moves() {
        let mut board = board(&[(COINS_1, (0, 0, 0)), (COINS_1, (4, 0, 0))]);
        board.set_visible(TileId(1), false);
        assert!(!board.has_valid_moves());
    }

    #[test]
    fn test_wildcards_pair_up() {
        let board = board(&[
            (Face::new(Suit::Joker, 1), (0, 0, 0)),
            (Face::new(Suit::Knight, 1), (4, 0, 0)),
            (Face::new(Suit::Joker, 3), (8, 0, 0)),
        ]);
        assert_eq!(board.hint_pair(), Some((TileId(0), TileId(2))));
    }

    #[test]
    fn test_hint_is_first_pair_in_deal_order() {
        let board = board(&[
            (CUPS_2, (0, 0, 0)),
            (COINS_1, (4, 0, 0)),
            (COINS_1, (8, 0, 0)),
            (CUPS_2, (12, 0, 0)),
        ]);
        assert_eq!(board.hint_pair(), Some((TileId(0), TileId(3))));
        assert_eq!(
            board.matching_pairs(),
            vec![(TileId(0), TileId(3)), (TileId(1), TileId(2))]
        );
    }

    #[test]
    fn test_is_match() {
        let board = board(&[(COINS_1, (0, 0, 0)), (COINS_1, (0, 0, 1)), (CUPS_2, (4, 0, 0))]);
        // Faces only, occlusion ignored
        assert!(board.is_match(TileId(0), TileId(1)));
        assert!(!board.is_match(TileId(0), TileId(2)));
        assert!(!board.is_match(TileId(0), TileId(0)));
        assert!(!board.is_match(TileId(0), TileId(42)));
    }

    #[test]
    fn test_hint_pair_is_free_and_matching() {
        for variant in LayoutVariant::ALL {
            let board = Board::new(variant, Difficulty::Hard, GameRng::new(21));
            for (a, b) in board.matching_pairs() {
                assert!(board.can_move(a) && board.can_move(b));
                assert!(board.is_match(a, b));
            }
            assert_eq!(board.hint_pair(), board.matching_pairs().first().copied());
        }
    }
}
