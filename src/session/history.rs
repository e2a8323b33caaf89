//! Undo history.
//!
//! Each successful match pushes a `MatchRecord`. The history is a persistent
//! vector (`im::Vector`), so cloning a session to explore alternatives
//! shares the history structurally instead of copying it.

use serde::{Deserialize, Serialize};

use crate::core::TileId;

/// One removed pair and the points it earned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub first: TileId,
    pub second: TileId,
    pub points: u32,
}

impl MatchRecord {
    #[must_use]
    pub fn new(first: TileId, second: TileId, points: u32) -> Self {
        Self { first, second, points }
    }

    /// Both tile IDs of the pair.
    #[must_use]
    pub fn tiles(&self) -> [TileId; 2] {
        [self.first, self.second]
    }
}

impl std::fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} + {} (+{})", self.first, self.second, self.points)
    }
}
