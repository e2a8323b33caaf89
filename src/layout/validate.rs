//! Layout checks.
//!
//! The board trusts its layout, so layouts are checked here instead:
//! at test time for the built-in shapes, and by callers that accept
//! layouts from elsewhere.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::LayoutError;
use crate::tiles::{Position, TILE_HEIGHT, TILE_WIDTH};

/// Check that a slot list forms a playable layout.
///
/// - the slot count is even
/// - no slot appears twice
/// - no two footprints overlap on the same layer
/// - every unit cell of a raised footprint rests on a footprint one layer down
pub fn validate_layout(slots: &[Position]) -> Result<(), LayoutError> {
    if slots.len() % 2 != 0 {
        return Err(LayoutError::OddSlotCount(slots.len()));
    }

    let mut seen = FxHashSet::default();
    for &pos in slots {
        if !seen.insert(pos) {
            return Err(LayoutError::DuplicateSlot(pos));
        }
    }

    // Unit cell -> owning slot, per layer
    let mut cells: FxHashMap<(i32, i32, i32), Position> = FxHashMap::default();
    for &pos in slots {
        for cell in footprint_cells(pos) {
            if let Some(&other) = cells.get(&cell) {
                return Err(LayoutError::Overlap(other, pos));
            }
            cells.insert(cell, pos);
        }
    }

    for &pos in slots.iter().filter(|pos| pos.z > 0) {
        let supported = footprint_cells(pos).all(|(x, y, z)| cells.contains_key(&(x, y, z - 1)));
        if !supported {
            return Err(LayoutError::Floating(pos));
        }
    }

    Ok(())
}

fn footprint_cells(pos: Position) -> impl Iterator<Item = (i32, i32, i32)> {
    (0..TILE_WIDTH).flat_map(move |dx| (0..TILE_HEIGHT).map(move |dy| (pos.x + dx, pos.y + dy, pos.z)))
}
