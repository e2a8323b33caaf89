//! # baraja
//!
//! Board engine for a Mahjong-style tile matching solitaire played with
//! Spanish-deck faces.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: No rendering, audio or OS handles. A presentation shell
//!    calls session actions and redraws from the tile records.
//!
//! 2. **Deterministic**: Every deal and reshuffle comes from a seeded
//!    `GameRng`, so a seed and a sequence of clicks replay exactly.
//!
//! 3. **Quiet Failure**: Actions never return errors. Blocked clicks, empty
//!    undo and exhausted shuffles come back as inert outcomes.
//!
//! ## Architecture
//!
//! - **Layouts** are static slot lists on an even-stepped 3D grid; each tile
//!   covers a 2x2 footprint so half-offsets partially overlap.
//!
//! - **Decks** are drawn in pairs from a difficulty pool, so every face has
//!   a partner before occlusion is considered.
//!
//! - **Removed tiles stay on the board**, hidden, which makes undo a flag
//!   flip and keeps IDs stable.
//!
//! ## Modules
//!
//! - `core`: Tile IDs, RNG, configuration and errors
//! - `tiles`: Suits, faces, the match rule, positions
//! - `layout`: Layout variants and validation
//! - `deck`: Difficulty pools and deck generation
//! - `board`: Occlusion, pair scan, reshuffle, state records
//! - `session`: Selection, score, undo, hints, saved games

pub mod core;
pub mod tiles;
pub mod layout;
pub mod deck;
pub mod board;
pub mod session;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{
    TileId,
    GameRng, GameRngState,
    LayoutVariant, Difficulty, SessionConfig,
    LayoutError, StateError,
};

pub use crate::tiles::{Face, MatchClass, Position, Suit, Tile};

pub use crate::board::{Blockers, Board, TileRecord};

pub use crate::session::{
    Session, SavedGame, MatchRecord,
    SelectOutcome, UndoOutcome, HintOutcome, ShuffleOutcome,
    Selection, TerminalState,
};
