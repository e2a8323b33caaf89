//! Python bindings for the baraja board engine.
//!
//! The pygame shell drives a `Session` and redraws from `tiles()` after
//! every action.
//!
//! # Quick Start
//!
//! ```python
//! import baraja
//!
//! session = baraja.Session(seed=7, layout="butterfly", difficulty="easy")
//!
//! pair = session.hint()
//! if pair is not None:
//!     session.select(pair[0])
//!     session.select(pair[1])
//!
//! for tile in session.tiles():
//!     if tile.visible:
//!         draw(tile.suit, tile.rank, *tile.position)
//!
//! data = session.save()
//! resumed = baraja.Session.restore(data)
//! ```

use pyo3::prelude::*;

mod session;

pub use session::*;

/// baraja: Spanish-deck tile matching solitaire.
#[pymodule]
fn baraja(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_class::<PyTile>()?;
    Ok(())
}
