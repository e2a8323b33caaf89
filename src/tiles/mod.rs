//! Tiles: faces, the match rule, positions and tile instances.
//!
//! ## Key Types
//!
//! - `Suit`: Closed set of tile categories with a match-class table
//! - `Face`: `(suit, rank)` identity shared by interchangeable tiles
//! - `Position`: Slot on the even-stepped 3D grid
//! - `Tile`: A face placed at a position, plus visibility and selection

pub mod face;
pub mod tile;

pub use face::{Face, MatchClass, Suit, MAX_COURT_RANK, MAX_PIP_RANK};
pub use tile::{Position, Tile, TILE_HEIGHT, TILE_WIDTH};
