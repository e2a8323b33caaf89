//! Flat tile records for persistence.
//!
//! `get_state` exports one record per tile (hidden tiles included) and
//! `set_state` rebuilds the tile collection from them verbatim, so a
//! round trip reproduces the same IDs, positions, faces and flags.

use serde::{Deserialize, Serialize};

use super::table::{checked_index, Board};
use crate::core::{StateError, TileId};
use crate::tiles::{Face, Position, Suit, Tile};

/// One tile, flattened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileRecord {
    pub suit: Suit,
    pub rank: u8,
    pub id: TileId,
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub visible: bool,
    pub selected: bool,
}

impl From<&Tile> for TileRecord {
    fn from(tile: &Tile) -> Self {
        Self {
            suit: tile.face.suit,
            rank: tile.face.rank,
            id: tile.id,
            x: tile.position.x,
            y: tile.position.y,
            z: tile.position.z,
            visible: tile.visible,
            selected: tile.selected,
        }
    }
}

impl From<TileRecord> for Tile {
    fn from(record: TileRecord) -> Self {
        Tile {
            id: record.id,
            face: Face::new(record.suit, record.rank),
            position: Position::new(record.x, record.y, record.z),
            visible: record.visible,
            selected: record.selected,
        }
    }
}

impl Board {
    /// Export every tile as a flat record, in deal order.
    #[must_use]
    pub fn get_state(&self) -> Vec<TileRecord> {
        self.tiles.iter().map(TileRecord::from).collect()
    }

    /// Replace the tile collection with the given records.
    ///
    /// The layout becomes the record positions. On error (duplicate IDs)
    /// the board is left untouched.
    pub fn set_state(&mut self, records: &[TileRecord]) -> Result<(), StateError> {
        let tiles: Vec<Tile> = records.iter().copied().map(Tile::from).collect();
        let index = checked_index(&tiles)?;

        self.layout = tiles.iter().map(|tile| tile.position).collect();
        self.tiles = tiles;
        self.index = index;
        Ok(())
    }
}
