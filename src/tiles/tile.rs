//! Tile instances and board positions.
//!
//! A `Tile` is a face placed at a fixed `Position`. Only `visible` and
//! `selected` change during play; a shuffle may also swap faces between
//! tiles, but never positions or IDs.

use serde::{Deserialize, Serialize};

use super::face::Face;
use crate::core::TileId;

/// Footprint width of a tile in logical grid units.
pub const TILE_WIDTH: i32 = 2;

/// Footprint height of a tile in logical grid units.
pub const TILE_HEIGHT: i32 = 2;

/// A slot on the logical grid. `z` is the stacking layer, 0 = table level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Position {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Left edge of the footprint.
    #[must_use]
    pub const fn left(&self) -> i32 {
        self.x
    }

    /// Right edge of the footprint (exclusive).
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + TILE_WIDTH
    }

    /// Top edge of the footprint.
    #[must_use]
    pub const fn top(&self) -> i32 {
        self.y
    }

    /// Bottom edge of the footprint (exclusive).
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + TILE_HEIGHT
    }

    /// Whether the vertical ranges of two footprints overlap.
    #[must_use]
    pub const fn overlaps_rows(&self, other: &Position) -> bool {
        other.top() < self.bottom() && other.bottom() > self.top()
    }

    /// Whether two footprints overlap, ignoring layers.
    ///
    /// Strict on both axes: footprints sharing only an edge do not overlap.
    #[must_use]
    pub const fn overlaps(&self, other: &Position) -> bool {
        other.left() < self.right() && other.right() > self.left() && self.overlaps_rows(other)
    }
}

impl From<(i32, i32, i32)> for Position {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self { x, y, z }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{})", self.x, self.y, self.z)
    }
}

/// A tile on a board.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Tile {
    /// Unique ID, fixed for the lifetime of the board.
    pub id: TileId,

    /// Current face. Only a shuffle changes it.
    pub face: Face,

    /// Fixed slot.
    pub position: Position,

    /// False once the tile has been matched away.
    pub visible: bool,

    /// True while the tile is the pending selection.
    pub selected: bool,
}

impl Tile {
    /// Create a visible, unselected tile.
    #[must_use]
    pub fn new(id: TileId, face: Face, position: Position) -> Self {
        Self {
            id,
            face,
            position,
            visible: true,
            selected: false,
        }
    }

    /// Whether this tile and `other` form a removable pair.
    ///
    /// A tile never matches itself.
    #[must_use]
    pub fn matches(&self, other: &Tile) -> bool {
        self.id != other.id && self.face.matches(&other.face)
    }
}

/// Tiles are identified by ID alone.
impl PartialEq for Tile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Tile {}

impl std::hash::Hash for Tile {
    fn hash<H: std::hash::Hasher>(&self, hasher: &mut H) {
        self.id.hash(hasher);
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} (ID:{}) at {}]", self.face, self.id.0, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::Suit;

    #[test]
    fn test_footprint_edges() {
        let pos = Position::new(4, 6, 1);
        assert_eq!(pos.left(), 4);
        assert_eq!(pos.right(), 6);
        assert_eq!(pos.top(), 6);
        assert_eq!(pos.bottom(), 8);
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = Position::new(0, 0, 0);

        assert!(a.overlaps(&Position::new(1, 1, 0)));
        assert!(a.overlaps(&Position::new(0, 0, 1)));
        // Touching edges only
        assert!(!a.overlaps(&Position::new(2, 0, 0)));
        assert!(!a.overlaps(&Position::new(0, 2, 0)));
        assert!(!a.overlaps(&Position::new(-2, 0, 0)));
    }

    #[test]
    fn test_rows_overlap_with_half_offset() {
        let a = Position::new(0, 0, 0);
        assert!(a.overlaps_rows(&Position::new(2, 1, 0)));
        assert!(a.overlaps_rows(&Position::new(2, -1, 0)));
        assert!(!a.overlaps_rows(&Position::new(2, 2, 0)));
    }

    #[test]
    fn test_new_tile_is_visible_and_unselected() {
        let tile = Tile::new(TileId(3), Face::new(Suit::Cups, 2), Position::new(0, 0, 0));
        assert!(tile.visible);
        assert!(!tile.selected);
    }

    #[test]
    fn test_tile_never_matches_itself() {
        let tile = Tile::new(TileId(3), Face::new(Suit::Cups, 2), Position::new(0, 0, 0));
        let twin = Tile::new(TileId(4), Face::new(Suit::Cups, 2), Position::new(2, 0, 0));

        assert!(!tile.matches(&tile));
        assert!(tile.matches(&twin));
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = Tile::new(TileId(1), Face::new(Suit::Cups, 2), Position::new(0, 0, 0));
        let mut b = a.clone();
        b.face = Face::new(Suit::King, 1);
        b.visible = false;

        assert_eq!(a, b);
        assert_ne!(a, Tile::new(TileId(2), a.face, a.position));
    }

    #[test]
    fn test_display() {
        let tile = Tile::new(TileId(9), Face::new(Suit::Swords, 5), Position::new(2, 4, 1));
        assert_eq!(tile.to_string(), "[Swords-5 (ID:9) at (2,4,1)]");
    }
}
