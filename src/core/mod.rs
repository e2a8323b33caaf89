//! Core types: tile IDs, RNG, configuration and errors.
//!
//! These are shared by every other module and carry no game rules.

pub mod config;
pub mod error;
pub mod id;
pub mod rng;

pub use config::{Difficulty, LayoutVariant, SessionConfig};
pub use error::{LayoutError, StateError};
pub use id::TileId;
pub use rng::{GameRng, GameRngState};
