//! Deck generation: difficulty face pools and pairwise dealing.
//!
//! ## Key Types
//!
//! - `FacePool`: Face types eligible for a difficulty profile
//! - `DeckEntry`: A generated tile identity (ID + face) awaiting a slot
//! - `generate_deck`: Shuffled, evenly paired deck of a requested size

pub mod generator;
pub mod pool;

pub use generator::{generate_deck, DeckEntry};
pub use pool::{FacePool, EASY_MAX_RANK};
