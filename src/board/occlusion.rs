//! The occlusion rule: which tiles are free to select.
//!
//! A visible tile is free when
//! 1. no visible tile on the layer directly above overlaps its footprint, and
//! 2. it is not pinned on both sides, i.e. there is not both a visible tile
//!    whose right edge touches its left edge and one whose left edge touches
//!    its right edge, on the same layer with overlapping rows.
//!
//! Hidden tiles never block. A tile pinned on one side only is still free.

use smallvec::SmallVec;

use super::table::Board;
use crate::core::TileId;
use crate::tiles::Tile;

/// Which visible tiles keep a tile from being selected.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Blockers {
    /// Tiles on the layer above overlapping the footprint.
    pub above: SmallVec<[TileId; 4]>,
    /// A same-layer neighbour touching the left edge.
    pub left: Option<TileId>,
    /// A same-layer neighbour touching the right edge.
    pub right: Option<TileId>,
}

impl Blockers {
    /// Whether these blockers make the tile unselectable.
    #[must_use]
    pub fn is_blocked(&self) -> bool {
        !self.above.is_empty() || (self.left.is_some() && self.right.is_some())
    }
}

impl std::fmt::Display for Blockers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.above.is_empty() {
            write!(f, "above by")?;
            for id in &self.above {
                write!(f, " {}", id)?;
            }
            if self.left.is_some() || self.right.is_some() {
                write!(f, "; ")?;
            }
        }
        match (self.left, self.right) {
            (Some(left), Some(right)) => write!(f, "laterally by {} and {}", left, right),
            (Some(side), None) | (None, Some(side)) => write!(f, "one side by {}", side),
            (None, None) if self.above.is_empty() => write!(f, "free"),
            (None, None) => Ok(()),
        }
    }
}

impl Board {
    /// Whether the tile with this ID can be selected.
    ///
    /// False for unknown IDs and hidden tiles.
    #[must_use]
    pub fn can_move(&self, id: TileId) -> bool {
        self.tile(id).is_some_and(|tile| tile.visible && self.is_free(tile))
    }

    /// The occlusion rule for a tile, regardless of its own visibility.
    ///
    /// O(tile count).
    #[must_use]
    pub fn is_free(&self, tile: &Tile) -> bool {
        let pos = tile.position;
        let mut pinned_left = false;
        let mut pinned_right = false;

        for other in self.neighbours(tile.id) {
            let o = other.position;
            if o.z == pos.z + 1 && pos.overlaps(&o) {
                return false;
            }
            if o.z == pos.z && pos.overlaps_rows(&o) {
                pinned_left |= o.right() == pos.left();
                pinned_right |= o.left() == pos.right();
            }
        }

        !(pinned_left && pinned_right)
    }

    /// Every visible tile that covers or pins the tile with this ID.
    ///
    /// Returns `None` for unknown IDs.
    #[must_use]
    pub fn blockers(&self, id: TileId) -> Option<Blockers> {
        let tile = self.tile(id)?;
        let pos = tile.position;
        let mut blockers = Blockers::default();

        for other in self.neighbours(tile.id) {
            let o = other.position;
            if o.z == pos.z + 1 && pos.overlaps(&o) {
                blockers.above.push(other.id);
            }
            if o.z == pos.z && pos.overlaps_rows(&o) {
                if o.right() == pos.left() {
                    blockers.left = Some(other.id);
                }
                if o.left() == pos.right() {
                    blockers.right = Some(other.id);
                }
            }
        }

        Some(blockers)
    }

    /// Visible tiles other than the one with this ID.
    fn neighbours(&self, id: TileId) -> impl Iterator<Item = &Tile> {
        self.tiles
            .iter()
            .filter(move |other| other.visible && other.id != id)
    }
}
