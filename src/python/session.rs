//! Session bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::board::TileRecord;
use crate::core::{Difficulty, LayoutVariant, SessionConfig, TileId};
use crate::session::{HintOutcome, Session, ShuffleOutcome, UndoOutcome};

/// Python view of one tile.
#[pyclass(name = "Tile", frozen)]
#[derive(Clone, Debug)]
pub struct PyTile(pub TileRecord);

#[pymethods]
impl PyTile {
    #[getter]
    fn id(&self) -> u32 {
        self.0.id.raw()
    }

    #[getter]
    fn suit(&self) -> String {
        self.0.suit.to_string()
    }

    #[getter]
    fn rank(&self) -> u8 {
        self.0.rank
    }

    /// Slot as `(x, y, z)` in half-tile units.
    #[getter]
    fn position(&self) -> (i32, i32, i32) {
        (self.0.x, self.0.y, self.0.z)
    }

    #[getter]
    fn visible(&self) -> bool {
        self.0.visible
    }

    #[getter]
    fn selected(&self) -> bool {
        self.0.selected
    }

    fn __repr__(&self) -> String {
        format!(
            "Tile(id={}, face={}-{}, at=({}, {}, {}))",
            self.0.id.raw(),
            self.0.suit,
            self.0.rank,
            self.0.x,
            self.0.y,
            self.0.z
        )
    }
}

/// Python wrapper for Session.
///
/// Actions return short status strings so the UI can pick a sound or an
/// animation without importing outcome types.
#[pyclass(name = "Session")]
pub struct PySession {
    inner: Session,
}

#[pymethods]
impl PySession {
    /// Start a session.
    ///
    /// # Arguments
    /// - seed: RNG seed for deterministic deals
    /// - layout: "turtle", "butterfly" or "fortress"
    /// - difficulty: "easy", "medium" or "hard"
    /// - max_shuffles: Shuffle actions allowed per game
    #[new]
    #[pyo3(signature = (seed = 42, layout = "turtle", difficulty = "medium", max_shuffles = 3))]
    fn new(seed: u64, layout: &str, difficulty: &str, max_shuffles: u32) -> Self {
        let config = SessionConfig::default()
            .with_seed(seed)
            .with_max_shuffles(max_shuffles);
        let inner = Session::with_game(
            config,
            LayoutVariant::from_name(layout),
            Difficulty::from_name(difficulty),
        );
        Self { inner }
    }

    /// Click on a tile. Returns "ignored", "blocked", "selected",
    /// "deselected", "reselected" or "matched".
    fn select(&mut self, id: u32) -> &'static str {
        self.inner.select(TileId(id)).kind()
    }

    /// Undo the last match. Returns true when a pair came back.
    fn undo(&mut self) -> bool {
        matches!(self.inner.undo(), UndoOutcome::Restored(_))
    }

    /// Show a pair, or None when no move exists.
    fn hint(&mut self) -> Option<(u32, u32)> {
        match self.inner.hint() {
            HintOutcome::Shown { pair: (a, b), .. } => Some((a.raw(), b.raw())),
            HintOutcome::NoMoves => None,
        }
    }

    /// Reshuffle. Returns "playable", "stuck" or "unavailable".
    fn shuffle(&mut self) -> &'static str {
        match self.inner.shuffle() {
            ShuffleOutcome::Playable { .. } => "playable",
            ShuffleOutcome::Stuck => "stuck",
            ShuffleOutcome::Unavailable => "unavailable",
        }
    }

    fn new_game(&mut self, layout: &str, difficulty: &str) {
        self.inner
            .new_game(LayoutVariant::from_name(layout), Difficulty::from_name(difficulty));
    }

    fn restart(&mut self) {
        self.inner.restart();
    }

    /// Encode the game for storage.
    fn save<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes = self
            .inner
            .save()
            .map_err(|err| PyValueError::new_err(err.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Resume a stored game, or None when the data is unreadable.
    #[staticmethod]
    #[pyo3(signature = (data, max_shuffles = 3))]
    fn restore(data: &[u8], max_shuffles: u32) -> Option<Self> {
        let config = SessionConfig::default().with_max_shuffles(max_shuffles);
        Session::restore(data, config).map(|inner| Self { inner })
    }

    /// Every tile, removed ones included, in draw order.
    fn tiles(&self) -> Vec<PyTile> {
        self.inner.board().get_state().into_iter().map(PyTile).collect()
    }

    fn can_move(&self, id: u32) -> bool {
        self.inner.board().can_move(TileId(id))
    }

    /// Every pair currently available.
    fn matching_pairs(&self) -> Vec<(u32, u32)> {
        self.inner
            .matching_pairs()
            .into_iter()
            .map(|(a, b)| (a.raw(), b.raw()))
            .collect()
    }

    #[getter]
    fn score(&self) -> u32 {
        self.inner.score()
    }

    #[getter]
    fn remaining(&self) -> usize {
        self.inner.remaining()
    }

    /// "playing", "won" or "lost".
    #[getter]
    fn terminal_state(&self) -> &'static str {
        self.inner.terminal_state().name()
    }

    #[getter]
    fn shuffles_left(&self) -> u32 {
        self.inner.shuffles_left()
    }

    #[getter]
    fn selected(&self) -> Option<u32> {
        self.inner.selection().pending().map(TileId::raw)
    }

    #[getter]
    fn layout(&self) -> &'static str {
        self.inner.layout().name()
    }

    #[getter]
    fn difficulty(&self) -> &'static str {
        self.inner.difficulty().name()
    }

    fn __repr__(&self) -> String {
        format!(
            "Session(layout={}, score={}, remaining={}, state={})",
            self.inner.layout(),
            self.inner.score(),
            self.inner.remaining(),
            self.inner.terminal_state()
        )
    }
}
