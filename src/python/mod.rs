//! Python bindings for the cube catalog.
//!
//! # Quick Start
//!
//! ```python
//! import cube_catalog
//!
//! catalog = cube_catalog.Catalog.from_json(open("cubes.json").read())
//!
//! status, cards = catalog.render(category="Feu", query="braise")
//! for card in cards:
//!     print(card.title, card.stat_lines)
//! ```

use pyo3::prelude::*;

mod py_catalog;

pub use py_catalog::*;

/// cube_catalog: sorting, filtering and card projection for cube records.
#[pymodule]
fn cube_catalog(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCatalog>()?;
    m.add_class::<PyCard>()?;

    Ok(())
}
