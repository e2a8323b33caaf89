//! Saved games.
//!
//! A `SavedGame` captures what is needed to resume play: the tile records,
//! score, layout, difficulty, shuffles used and both RNG streams. Undo
//! history is not saved; a restored session starts with an empty history.
//! Snapshots are encoded with bincode.

use serde::{Deserialize, Serialize};

use super::controller::Session;
use super::outcome::Selection;
use crate::board::{Board, TileRecord};
use crate::core::{Difficulty, GameRng, GameRngState, LayoutVariant, SessionConfig, StateError};
use crate::tiles::Tile;

/// Serializable snapshot of a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedGame {
    pub score: u32,
    pub layout: LayoutVariant,
    pub difficulty: Difficulty,
    pub shuffles_used: u32,
    pub tiles: Vec<TileRecord>,
    pub board_rng: GameRngState,
    pub session_rng: GameRngState,
}

impl SavedGame {
    /// Encode to bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, StateError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, StateError> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Session {
    /// Capture the current game.
    #[must_use]
    pub fn snapshot(&self) -> SavedGame {
        SavedGame {
            score: self.score,
            layout: self.layout,
            difficulty: self.difficulty,
            shuffles_used: self.shuffles_used,
            tiles: self.board.get_state(),
            board_rng: self.board.rng_state(),
            session_rng: self.rng.state(),
        }
    }

    /// Encode the current game for storage.
    pub fn save(&self) -> Result<Vec<u8>, StateError> {
        self.snapshot().to_bytes()
    }

    /// Rebuild a session from a snapshot.
    ///
    /// Remaining count and terminal state are recomputed from the tiles.
    pub fn from_snapshot(saved: SavedGame, config: SessionConfig) -> Result<Self, StateError> {
        let tiles: Vec<Tile> = saved.tiles.into_iter().map(Tile::from).collect();
        let board = Board::from_tiles(tiles, GameRng::from_state(&saved.board_rng))?;
        let rng = GameRng::from_state(&saved.session_rng);

        let mut session = Self::from_parts(config, rng, board, saved.layout, saved.difficulty);
        session.score = saved.score;
        session.shuffles_used = saved.shuffles_used;
        session.selection = restore_selection(&mut session.board);
        session.evaluate_end();
        Ok(session)
    }

    /// Decode a stored game.
    ///
    /// Malformed data is logged and treated as no saved game.
    #[must_use]
    pub fn restore(bytes: &[u8], config: SessionConfig) -> Option<Self> {
        match SavedGame::from_bytes(bytes).and_then(|saved| Self::from_snapshot(saved, config)) {
            Ok(session) => {
                log::info!(
                    "Restored game: {} tiles left on {}, score {}",
                    session.remaining,
                    session.layout,
                    session.score
                );
                Some(session)
            }
            Err(err) => {
                log::warn!("Ignoring saved game: {}", err);
                None
            }
        }
    }
}

/// Keep at most one selected tile.
///
/// A single selected visible tile becomes the pending selection. Every other
/// selection flag is cleared, including those on removed tiles.
fn restore_selection(board: &mut Board) -> Selection {
    let pending = {
        let mut selected = board.selected_tiles().filter(|tile| tile.visible).map(|tile| tile.id);
        match (selected.next(), selected.next()) {
            (Some(id), None) => Some(id),
            _ => None,
        }
    };

    board.clear_selection();
    match pending {
        Some(id) => {
            board.set_selected(id, true);
            Selection::One(id)
        }
        None => {
            log::debug!("Restored game has no single pending tile, selection cleared");
            Selection::None
        }
    }
}
