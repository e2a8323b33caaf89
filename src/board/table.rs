//! The board: tile ownership, construction and lookup.

use rustc_hash::FxHashMap;

use crate::core::{Difficulty, GameRng, GameRngState, LayoutVariant, StateError, TileId};
use crate::deck::{generate_deck, FacePool};
use crate::layout;
use crate::tiles::{Position, Tile};

/// Default maximum number of tiles dealt onto a board.
pub const DEFAULT_DECK_BUDGET: usize = 144;

/// Owns every tile of one game.
///
/// Tiles are kept in deal order, which is the layout's slot order. Removed
/// tiles stay in the collection, hidden, so undo can bring them back.
#[derive(Clone, Debug)]
pub struct Board {
    pub(super) tiles: Vec<Tile>,
    pub(super) index: FxHashMap<TileId, usize>,
    pub(super) layout: Vec<Position>,
    pub(super) rng: GameRng,
}

impl Board {
    /// Deal a new board with the default deck budget.
    ///
    /// The deal is drawn from the `"deck"` context of `rng`; `rng` itself is
    /// kept for in-play reshuffles.
    ///
    /// ```
    /// use baraja::board::Board;
    /// use baraja::core::{Difficulty, GameRng, LayoutVariant};
    ///
    /// let board = Board::new(LayoutVariant::Fortress, Difficulty::Hard, GameRng::new(42));
    /// assert_eq!(board.tiles().len(), 136);
    /// assert_eq!(board.visible_count(), 136);
    /// ```
    #[must_use]
    pub fn new(variant: LayoutVariant, difficulty: Difficulty, rng: GameRng) -> Self {
        Self::with_budget(variant, difficulty, DEFAULT_DECK_BUDGET, rng)
    }

    /// Deal a new board, dealing at most `budget` tiles.
    ///
    /// Slots beyond the deck size stay empty; lower layers fill first.
    #[must_use]
    pub fn with_budget(variant: LayoutVariant, difficulty: Difficulty, budget: usize, rng: GameRng) -> Self {
        let layout = layout::generate(variant);
        let pool = FacePool::for_difficulty(difficulty);
        let target = layout.len().min(budget);
        let deck = generate_deck(&pool, target, &mut rng.for_context("deck"));

        let tiles: Vec<Tile> = deck
            .into_iter()
            .zip(layout.iter())
            .map(|(entry, &position)| Tile::new(entry.id, entry.face, position))
            .collect();

        log::debug!(
            "Dealt {} tiles onto {} ({} slots, {})",
            tiles.len(),
            variant,
            layout.len(),
            difficulty
        );

        let index = build_index(&tiles);
        Self {
            tiles,
            index,
            layout,
            rng,
        }
    }

    /// Deal a board from layout and difficulty names.
    ///
    /// Unknown names fall back to the defaults; this never fails.
    #[must_use]
    pub fn from_names(layout: &str, difficulty: &str, rng: GameRng) -> Self {
        Self::new(
            LayoutVariant::from_name(layout),
            Difficulty::from_name(difficulty),
            rng,
        )
    }

    /// Build a board from explicit tiles, in the given order.
    ///
    /// Fails if two tiles share an ID.
    pub fn from_tiles(tiles: Vec<Tile>, rng: GameRng) -> Result<Self, StateError> {
        let index = checked_index(&tiles)?;
        let layout = tiles.iter().map(|tile| tile.position).collect();
        Ok(Self {
            tiles,
            index,
            layout,
            rng,
        })
    }

    // === Accessors ===

    /// All tiles, hidden ones included, in deal order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Look up a tile by ID.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.index.get(&id).map(|&i| &self.tiles[i])
    }

    /// Slots of the active layout.
    #[must_use]
    pub fn layout(&self) -> &[Position] {
        &self.layout
    }

    /// Iterate over tiles still in play.
    pub fn visible_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.visible)
    }

    /// Number of tiles still in play.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible_tiles().count()
    }

    /// Tiles currently flagged as selected.
    pub fn selected_tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|tile| tile.selected)
    }

    /// State of the reshuffle RNG, for saved games.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    // === Mutation (session only) ===

    pub(crate) fn tile_mut(&mut self, id: TileId) -> Option<&mut Tile> {
        let &i = self.index.get(&id)?;
        Some(&mut self.tiles[i])
    }

    /// Set the visibility flag. Returns false for unknown IDs.
    pub(crate) fn set_visible(&mut self, id: TileId, visible: bool) -> bool {
        self.tile_mut(id).map(|tile| tile.visible = visible).is_some()
    }

    /// Set the selection flag. Returns false for unknown IDs.
    pub(crate) fn set_selected(&mut self, id: TileId, selected: bool) -> bool {
        self.tile_mut(id).map(|tile| tile.selected = selected).is_some()
    }

    /// Clear the selection flag on every tile.
    pub(crate) fn clear_selection(&mut self) {
        for tile in &mut self.tiles {
            tile.selected = false;
        }
    }
}

pub(super) fn build_index(tiles: &[Tile]) -> FxHashMap<TileId, usize> {
    tiles.iter().enumerate().map(|(i, tile)| (tile.id, i)).collect()
}

pub(super) fn checked_index(tiles: &[Tile]) -> Result<FxHashMap<TileId, usize>, StateError> {
    let mut index = FxHashMap::default();
    for (i, tile) in tiles.iter().enumerate() {
        if index.insert(tile.id, i).is_some() {
            return Err(StateError::DuplicateId(tile.id));
        }
    }
    Ok(index)
}
