//! The board engine.
//!
//! ## Key Types
//!
//! - `Board`: Owns the tiles of one game and answers rule queries
//! - `Blockers`: Which tiles cover or pin a tile
//! - `TileRecord`: Flat per-tile record for persistence
//!
//! ## Rules
//!
//! - **Occlusion** (`can_move`): a tile is free when nothing visible covers it
//!   from the layer above and it is not pinned on both sides.
//! - **Matching** (`is_match`): faces match per `Suit::match_class`.
//! - **Moves** (`has_valid_moves`, `hint_pair`): any matching pair of free
//!   tiles.
//! - **Reshuffle** (`shuffle_remaining`): permute faces among visible tiles.
//!
//! The board does not track score, selection state or history; that is the
//! session's job.

pub mod occlusion;
pub mod record;
pub mod scan;
pub mod shuffle;
pub mod table;

pub use occlusion::Blockers;
pub use record::TileRecord;
pub use table::{Board, DEFAULT_DECK_BUDGET};
