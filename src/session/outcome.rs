//! Results of session actions.
//!
//! Actions never fail. An action that cannot apply returns one of the inert
//! variants (`Ignored`, `Blocked`, `NoHistory`, `NoMoves`, `Unavailable`)
//! and leaves the session exactly as it was.

use serde::{Deserialize, Serialize};

use super::history::MatchRecord;
use crate::core::TileId;

/// Whether play is still going on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminalState {
    #[default]
    Playing,
    /// Every tile has been removed. Final.
    Won,
    /// Tiles remain but no pair is available. Undo or a successful shuffle
    /// resumes play.
    Lost,
}

impl TerminalState {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TerminalState::Playing => "playing",
            TerminalState::Won => "won",
            TerminalState::Lost => "lost",
        }
    }
}

impl std::fmt::Display for TerminalState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The pending-selection state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    One(TileId),
}

impl Selection {
    /// The pending tile, if one is selected.
    #[must_use]
    pub fn pending(self) -> Option<TileId> {
        match self {
            Selection::None => None,
            Selection::One(id) => Some(id),
        }
    }
}

/// Result of clicking a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Unknown or already removed tile, or the game is won.
    Ignored,
    /// The tile is covered or pinned on both sides.
    Blocked(TileId),
    /// The tile became the pending selection.
    Selected(TileId),
    /// The pending tile was clicked again and released.
    Deselected(TileId),
    /// A non-matching tile replaced the pending selection.
    Reselected { from: TileId, to: TileId },
    /// The pair was removed.
    Matched(MatchRecord),
}

impl SelectOutcome {
    /// Short lowercase label, for presentation layers.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            SelectOutcome::Ignored => "ignored",
            SelectOutcome::Blocked(_) => "blocked",
            SelectOutcome::Selected(_) => "selected",
            SelectOutcome::Deselected(_) => "deselected",
            SelectOutcome::Reselected { .. } => "reselected",
            SelectOutcome::Matched(_) => "matched",
        }
    }
}

/// Result of an undo.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The game is won; undo no longer applies.
    Ignored,
    NoHistory,
    /// This pair is back on the board.
    Restored(MatchRecord),
}

/// Result of asking for a hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HintOutcome {
    /// No pair is available; nothing was charged.
    NoMoves,
    /// A pair was shown and `charged` points were deducted.
    Shown { pair: (TileId, TileId), charged: u32 },
}

/// Result of a shuffle action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShuffleOutcome {
    /// No shuffles left, nothing to shuffle, or the game is won.
    Unavailable,
    /// The board has moves after `attempts` reshuffles.
    Playable { attempts: u32 },
    /// Every reshuffle left the board without moves; the game is lost.
    Stuck,
}
