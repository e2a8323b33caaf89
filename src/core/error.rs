//! Error types.
//!
//! Gameplay itself never fails: invalid clicks, empty undo stacks and
//! exhausted shuffles are reported as inert outcomes by the session. Errors
//! only come from checking layouts and from importing saved tile state.

use thiserror::Error;

use super::id::TileId;
use crate::tiles::Position;

/// A layout that breaks the slot invariants.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Layout has an odd number of slots ({0})")]
    OddSlotCount(usize),
    #[error("Slot {0} appears more than once")]
    DuplicateSlot(Position),
    #[error("Slots {0} and {1} overlap on the same layer")]
    Overlap(Position, Position),
    #[error("Slot {0} is not fully supported by the layer below")]
    Floating(Position),
}

/// Tile state that cannot be imported.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Tile id {0} appears more than once")]
    DuplicateId(TileId),
    #[error("Saved game could not be encoded or decoded: {0}")]
    Codec(#[from] bincode::Error),
}
