//! The session controller.
//!
//! A `Session` owns the current board and everything the board does not
//! know about: score, the pending selection, undo history, the shown hint,
//! the shuffle allowance and whether the game is won or lost.
//!
//! ## Selection
//!
//! | state | click | result |
//! |---|---|---|
//! | none pending | free tile `t` | `t` pending |
//! | `p` pending | `p` | none pending |
//! | `p` pending | free `t`, matches `p` | pair removed, none pending |
//! | `p` pending | free `t`, no match | `t` pending |
//!
//! Clicks on covered or pinned tiles change nothing. After every match the
//! game is won when no tile remains, lost when no pair is available.

use im::Vector;

use super::history::MatchRecord;
use super::outcome::{HintOutcome, SelectOutcome, Selection, ShuffleOutcome, TerminalState, UndoOutcome};
use crate::board::Board;
use crate::core::{Difficulty, GameRng, LayoutVariant, SessionConfig, TileId};

/// One player's game in progress.
#[derive(Clone, Debug)]
pub struct Session {
    pub(super) config: SessionConfig,
    pub(super) rng: GameRng,
    pub(super) board: Board,
    pub(super) layout: LayoutVariant,
    pub(super) difficulty: Difficulty,
    pub(super) score: u32,
    pub(super) selection: Selection,
    pub(super) hint: Option<(TileId, TileId)>,
    pub(super) history: Vector<MatchRecord>,
    pub(super) remaining: usize,
    pub(super) terminal: TerminalState,
    pub(super) shuffles_used: u32,
}

impl Session {
    /// Start a session on the default layout and difficulty.
    ///
    /// ```
    /// use baraja::core::SessionConfig;
    /// use baraja::session::{Session, TerminalState};
    ///
    /// let session = Session::new(SessionConfig::default());
    /// assert_eq!(session.score(), 0);
    /// assert_eq!(session.remaining(), 142);
    /// assert_eq!(session.terminal_state(), TerminalState::Playing);
    /// ```
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        Self::with_game(config, LayoutVariant::default(), Difficulty::default())
    }

    /// Start a session on the given layout and difficulty.
    #[must_use]
    pub fn with_game(config: SessionConfig, layout: LayoutVariant, difficulty: Difficulty) -> Self {
        let mut rng = GameRng::new(config.seed);
        let board = Board::with_budget(layout, difficulty, config.deck_budget, rng.fork());
        let mut session = Self::from_parts(config, rng, board, layout, difficulty);
        session.prepare_deal();
        session
    }

    /// Play on a prepared board.
    ///
    /// The board is taken as is: no reshuffle, terminal state evaluated
    /// immediately. `layout` and `difficulty` are what `restart` deals and
    /// what a save records.
    #[must_use]
    pub fn from_board(
        config: SessionConfig,
        board: Board,
        layout: LayoutVariant,
        difficulty: Difficulty,
    ) -> Self {
        let rng = GameRng::new(config.seed);
        let mut session = Self::from_parts(config, rng, board, layout, difficulty);
        session.evaluate_end();
        session
    }

    pub(super) fn from_parts(
        config: SessionConfig,
        rng: GameRng,
        board: Board,
        layout: LayoutVariant,
        difficulty: Difficulty,
    ) -> Self {
        let remaining = board.visible_count();
        Self {
            config,
            rng,
            board,
            layout,
            difficulty,
            score: 0,
            selection: Selection::None,
            hint: None,
            history: Vector::new(),
            remaining,
            terminal: TerminalState::Playing,
            shuffles_used: 0,
        }
    }

    // === Actions ===

    /// Click on a tile.
    pub fn select(&mut self, id: TileId) -> SelectOutcome {
        if self.terminal == TerminalState::Won {
            return SelectOutcome::Ignored;
        }
        if !self.board.tile(id).is_some_and(|tile| tile.visible) {
            log::debug!("Click on unknown or removed {}", id);
            return SelectOutcome::Ignored;
        }
        if !self.board.can_move(id) {
            if let Some(blockers) = self.board.blockers(id) {
                log::debug!("{} is blocked {}", id, blockers);
            }
            return SelectOutcome::Blocked(id);
        }

        match self.selection {
            Selection::None => {
                self.board.set_selected(id, true);
                self.selection = Selection::One(id);
                SelectOutcome::Selected(id)
            }
            Selection::One(pending) if pending == id => {
                self.board.set_selected(id, false);
                self.selection = Selection::None;
                SelectOutcome::Deselected(id)
            }
            Selection::One(pending) if self.board.is_match(pending, id) => {
                SelectOutcome::Matched(self.remove_pair(pending, id))
            }
            Selection::One(pending) => {
                self.board.set_selected(pending, false);
                self.board.set_selected(id, true);
                self.selection = Selection::One(id);
                SelectOutcome::Reselected { from: pending, to: id }
            }
        }
    }

    /// Put the most recently removed pair back.
    ///
    /// Refunds its points (score stays at least 0) and leaves a lost game.
    /// Clears the pending selection and the shown hint.
    pub fn undo(&mut self) -> UndoOutcome {
        if self.terminal == TerminalState::Won {
            return UndoOutcome::Ignored;
        }
        let Some(record) = self.history.pop_back() else {
            return UndoOutcome::NoHistory;
        };

        self.board.clear_selection();
        self.selection = Selection::None;
        self.hint = None;
        for id in record.tiles() {
            self.board.set_visible(id, true);
        }
        self.score = self.score.saturating_sub(record.points);
        self.remaining += 2;

        if self.terminal == TerminalState::Lost {
            log::info!("Undo resumes play with {} tiles left", self.remaining);
            self.terminal = TerminalState::Playing;
        }
        log::debug!("Undid {}", record);
        UndoOutcome::Restored(record)
    }

    /// Show an available pair for `hint_cost` points.
    ///
    /// Nothing is charged when no pair exists.
    pub fn hint(&mut self) -> HintOutcome {
        let Some(pair) = self.board.hint_pair() else {
            log::debug!("Hint requested with no moves available");
            return HintOutcome::NoMoves;
        };

        let charged = self.score.min(self.config.hint_cost);
        self.score -= charged;
        self.hint = Some(pair);
        log::debug!("Hint {} and {} for {} points", pair.0, pair.1, charged);
        HintOutcome::Shown { pair, charged }
    }

    /// Reshuffle the remaining tiles until a pair is available.
    ///
    /// Consumes one of `max_shuffles`. When every retry fails the game is
    /// lost; when one succeeds a lost game resumes.
    pub fn shuffle(&mut self) -> ShuffleOutcome {
        if self.terminal == TerminalState::Won || self.remaining == 0 {
            return ShuffleOutcome::Unavailable;
        }
        if self.shuffles_left() == 0 {
            log::debug!("No shuffles left");
            return ShuffleOutcome::Unavailable;
        }

        self.shuffles_used += 1;
        self.selection = Selection::None;
        self.hint = None;

        match self.board.shuffle_until_playable(self.config.shuffle_attempts) {
            Some(attempts) => {
                if self.terminal == TerminalState::Lost {
                    log::info!("Shuffle resumes play with {} tiles left", self.remaining);
                }
                self.terminal = TerminalState::Playing;
                ShuffleOutcome::Playable { attempts }
            }
            None => {
                log::info!("Game lost with {} tiles left, score {}", self.remaining, self.score);
                self.terminal = TerminalState::Lost;
                ShuffleOutcome::Stuck
            }
        }
    }

    /// Replace the board with a fresh deal and reset all progress.
    pub fn new_game(&mut self, layout: LayoutVariant, difficulty: Difficulty) {
        let board = Board::with_budget(layout, difficulty, self.config.deck_budget, self.rng.fork());

        self.board = board;
        self.layout = layout;
        self.difficulty = difficulty;
        self.score = 0;
        self.selection = Selection::None;
        self.hint = None;
        self.history = Vector::new();
        self.remaining = self.board.visible_count();
        self.terminal = TerminalState::Playing;
        self.shuffles_used = 0;

        log::info!("New game: {} tiles on {} ({})", self.remaining, layout, difficulty);
        self.prepare_deal();
    }

    /// Start over with a new deal on the current layout and difficulty.
    pub fn restart(&mut self) {
        self.new_game(self.layout, self.difficulty);
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn layout(&self) -> LayoutVariant {
        self.layout
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Tiles still in play.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    #[must_use]
    pub fn terminal_state(&self) -> TerminalState {
        self.terminal
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The pair shown by the last hint, until the board changes.
    #[must_use]
    pub fn shown_hint(&self) -> Option<(TileId, TileId)> {
        self.hint
    }

    /// Removed pairs, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MatchRecord> {
        &self.history
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.terminal != TerminalState::Won && !self.history.is_empty()
    }

    #[must_use]
    pub fn shuffles_used(&self) -> u32 {
        self.shuffles_used
    }

    #[must_use]
    pub fn shuffles_left(&self) -> u32 {
        self.config.max_shuffles.saturating_sub(self.shuffles_used)
    }

    /// Every pair currently available.
    #[must_use]
    pub fn matching_pairs(&self) -> Vec<(TileId, TileId)> {
        self.board.matching_pairs()
    }

    // === Internals ===

    fn remove_pair(&mut self, first: TileId, second: TileId) -> MatchRecord {
        let record = MatchRecord::new(first, second, self.config.match_points);

        for id in record.tiles() {
            self.board.set_selected(id, false);
            self.board.set_visible(id, false);
        }
        self.score = self.score.saturating_add(record.points);
        self.history.push_back(record);
        self.remaining = self.remaining.saturating_sub(2);
        self.selection = Selection::None;
        self.hint = None;

        log::debug!("Matched {}, {} tiles left", record, self.remaining);
        self.evaluate_end();
        record
    }

    /// Reshuffle a fresh deal that starts without moves. Free of charge.
    fn prepare_deal(&mut self) {
        if self.remaining > 0 && !self.board.has_valid_moves() {
            log::debug!("Fresh deal has no moves, reshuffling");
            self.board.shuffle_until_playable(self.config.shuffle_attempts);
        }
        self.evaluate_end();
    }

    pub(super) fn evaluate_end(&mut self) {
        if self.remaining == 0 {
            if self.terminal != TerminalState::Won {
                log::info!("Game won with score {}", self.score);
            }
            self.terminal = TerminalState::Won;
        } else if !self.board.has_valid_moves() {
            if self.terminal != TerminalState::Lost {
                log::info!("Game lost with {} tiles left, score {}", self.remaining, self.score);
            }
            self.terminal = TerminalState::Lost;
        } else {
            self.terminal = TerminalState::Playing;
        }
    }
}
