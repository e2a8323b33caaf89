//! Tile identification.
//!
//! Every tile on a board gets a `TileId` when the deck is generated. IDs are
//! allocated sequentially from zero, are never reused within a board, and
//! survive shuffles and save/restore unchanged.
//!
//! Equality between tiles is equality of IDs, never of faces or positions.
//!
//! ```
//! use baraja::core::TileId;
//!
//! let first = TileId::FIRST;
//! assert_eq!(first.next(), TileId(1));
//! assert_eq!(format!("{}", TileId(7)), "Tile(7)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier for a tile within one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// The first ID handed out by deck generation.
    pub const FIRST: TileId = TileId(0);

    /// The ID allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_allocation() {
        let a = TileId::FIRST;
        let b = a.next();
        let c = b.next();

        assert_eq!(a.raw(), 0);
        assert_eq!(b.raw(), 1);
        assert_eq!(c.raw(), 2);
        assert!(a < b && b < c);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", TileId(42)), "Tile(42)");
    }

    #[test]
    fn test_serialization_is_plain_number() {
        let id = TileId(123);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "123");

        let deserialized: TileId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
