//! Content-preserving reshuffle of the tiles still in play.
//!
//! A reshuffle permutes faces among the visible tiles only: positions and
//! IDs stay where they are, and hidden tiles keep their faces so undo can
//! restore them unchanged. A single reshuffle may leave the board without
//! moves; `shuffle_until_playable` retries up to a bound and then gives up.

use super::table::Board;

impl Board {
    /// Permute the faces of the visible tiles and clear their selection.
    pub fn shuffle_remaining(&mut self) {
        let slots: Vec<usize> = (0..self.tiles.len())
            .filter(|&i| self.tiles[i].visible)
            .collect();

        let mut faces: Vec<_> = slots.iter().map(|&i| self.tiles[i].face).collect();
        self.rng.shuffle(&mut faces);

        for (&i, face) in slots.iter().zip(faces) {
            let tile = &mut self.tiles[i];
            tile.face = face;
            tile.selected = false;
        }
    }

    /// Reshuffle until a move is available, at most `max_attempts` times.
    ///
    /// Returns the number of reshuffles it took, or `None` when every
    /// attempt left the board without moves. Always reshuffles at least
    /// once when `max_attempts > 0`, even if moves were already available.
    pub fn shuffle_until_playable(&mut self, max_attempts: u32) -> Option<u32> {
        for attempt in 1..=max_attempts {
            self.shuffle_remaining();
            if self.has_valid_moves() {
                log::debug!("Reshuffle produced moves after {} attempt(s)", attempt);
                return Some(attempt);
            }
        }
        log::warn!(
            "No playable arrangement after {} reshuffle(s), {} tiles left",
            max_attempts,
            self.visible_count()
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;
    use crate::core::{Difficulty, GameRng, LayoutVariant, TileId};
    use crate::tiles::{Face, Position, Suit, Tile};

    fn sorted_visible_faces(board: &Board) -> Vec<Face> {
        let mut faces: Vec<Face> = board.visible_tiles().map(|tile| tile.face).collect();
        faces.sort();
        faces
    }

    #[test]
    fn test_shuffle_preserves_faces_positions_and_ids() {
        let mut board = Board::new(LayoutVariant::Turtle, Difficulty::Hard, GameRng::new(17));
        let before: Vec<(TileId, Position)> = board.tiles().iter().map(|t| (t.id, t.position)).collect();
        let faces_before = sorted_visible_faces(&board);
        let order_before: Vec<Face> = board.tiles().iter().map(|t| t.face).collect();

        board.shuffle_remaining();

        let after: Vec<(TileId, Position)> = board.tiles().iter().map(|t| (t.id, t.position)).collect();
        let order_after: Vec<Face> = board.tiles().iter().map(|t| t.face).collect();
        assert_eq!(before, after);
        assert_eq!(faces_before, sorted_visible_faces(&board));
        assert_ne!(order_before, order_after);
    }

    #[test]
    fn test_shuffle_leaves_hidden_tiles_alone() {
        let mut board = Board::new(LayoutVariant::Fortress, Difficulty::Medium, GameRng::new(5));
        let hidden: Vec<TileId> = board.tiles().iter().take(10).map(|t| t.id).collect();
        for &id in &hidden {
            board.set_visible(id, false);
        }
        let hidden_faces: Vec<Face> = hidden.iter().map(|&id| board.tile(id).unwrap().face).collect();

        board.shuffle_remaining();

        for (&id, face) in hidden.iter().zip(hidden_faces) {
            let tile = board.tile(id).unwrap();
            assert!(!tile.visible);
            assert_eq!(tile.face, face);
        }
    }

    #[test]
    fn test_shuffle_clears_selection() {
        let mut board = Board::new(LayoutVariant::Butterfly, Difficulty::Easy, GameRng::new(5));
        let id = board.tiles()[3].id;
        board.set_selected(id, true);

        board.shuffle_remaining();

        assert_eq!(board.selected_tiles().count(), 0);
    }

    #[test]
    fn test_shuffle_of_empty_board_is_noop() {
        let mut board = Board::from_tiles(Vec::new(), GameRng::new(1)).unwrap();
        board.shuffle_remaining();
        assert!(board.tiles().is_empty());
    }

    #[test]
    fn test_shuffle_until_playable_finds_moves() {
        let mut board = Board::new(LayoutVariant::Turtle, Difficulty::Medium, GameRng::new(2));
        let attempts = board.shuffle_until_playable(100);
        assert!(matches!(attempts, Some(n) if (1..=100).contains(&n)));
        assert!(board.has_valid_moves());
    }

    #[test]
    fn test_shuffle_until_playable_gives_up() {
        // One stacked pair can never be played, whatever the faces
        let face = Face::new(Suit::Cups, 4);
        let tiles = vec![
            Tile::new(TileId(0), face, Position::new(0, 0, 0)),
            Tile::new(TileId(1), face, Position::new(0, 0, 1)),
        ];
        let mut board = Board::from_tiles(tiles, GameRng::new(1)).unwrap();

        assert_eq!(board.shuffle_until_playable(5), None);
        assert_eq!(board.shuffle_until_playable(0), None);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Board::new(LayoutVariant::Turtle, Difficulty::Hard, GameRng::new(33));
        let mut b = Board::new(LayoutVariant::Turtle, Difficulty::Hard, GameRng::new(33));
        a.shuffle_remaining();
        b.shuffle_remaining();

        let faces = |board: &Board| board.tiles().iter().map(|t| t.face).collect::<Vec<_>>();
        assert_eq!(faces(&a), faces(&b));
    }
}
