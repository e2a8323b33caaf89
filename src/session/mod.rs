//! Game sessions: the layer between a presentation shell and the board.
//!
//! ## Key Types
//!
//! - `Session`: Selection state machine, score, undo, hints and shuffles
//! - `SelectOutcome`, `UndoOutcome`, `HintOutcome`, `ShuffleOutcome`: What an
//!   action did
//! - `TerminalState`: Playing, won or lost
//! - `SavedGame`: Snapshot for persistence

pub mod controller;
pub mod history;
pub mod outcome;
pub mod save;

pub use controller::Session;
pub use history::MatchRecord;
pub use outcome::{HintOutcome, SelectOutcome, Selection, ShuffleOutcome, TerminalState, UndoOutcome};
pub use save::SavedGame;
