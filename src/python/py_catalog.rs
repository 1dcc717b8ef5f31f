//! Catalog bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::CubeCard;
use crate::core::CatalogConfig;
use crate::filter::FilterState;
use crate::load::parse_records;
use crate::render::html;
use crate::session::{CatalogSession, LoadState};

/// Python wrapper for CubeCard.
#[pyclass(name = "Card")]
#[derive(Clone)]
pub struct PyCard(pub CubeCard);

#[pymethods]
impl PyCard {
    /// Get the card title.
    #[getter]
    fn title(&self) -> String {
        self.0.title.clone()
    }

    /// Get the badges as `(text, style_class)` pairs.
    #[getter]
    fn badges(&self) -> Vec<(String, String)> {
        self.0
            .badges
            .iter()
            .map(|b| (b.text.clone(), b.style_class.to_string()))
            .collect()
    }

    /// Get the stat lines.
    #[getter]
    fn stat_lines(&self) -> Vec<String> {
        self.0.stat_lines.clone()
    }

    /// Get the rarity styling class (empty when unrecognized).
    #[getter]
    fn card_style_class(&self) -> &'static str {
        self.0.card_style_class
    }

    /// Get the full CSS class list of the card.
    fn css_class(&self) -> String {
        self.0.css_class()
    }

    /// Render the card as HTML.
    fn to_html(&self) -> String {
        html::render_card(&self.0)
    }

    fn __repr__(&self) -> String {
        format!("Card({:?})", self.0.title)
    }
}

/// Python wrapper for a catalog session.
#[pyclass(name = "Catalog")]
pub struct PyCatalog {
    session: CatalogSession,
}

#[pymethods]
impl PyCatalog {
    /// Create a catalog, loading records from `path` when given.
    ///
    /// A failed load is not raised: the catalog reports it through `render`.
    #[new]
    #[pyo3(signature = (path = None))]
    fn new(path: Option<String>) -> Self {
        let mut config = CatalogConfig::default();
        let load = path.is_some();
        if let Some(path) = path {
            config = config.with_source_path(path);
        }

        let mut session = CatalogSession::new(config);
        if load {
            session.load_from_source();
        }
        Self { session }
    }

    /// Create a catalog from a JSON array of records.
    #[staticmethod]
    fn from_json(json: &str) -> PyResult<Self> {
        let records = parse_records(json).map_err(|e| PyValueError::new_err(e.to_string()))?;
        let mut session = CatalogSession::default();
        session.complete_load(Ok(records));
        Ok(Self { session })
    }

    /// Render the visible cards.
    ///
    /// Returns `(status_text, cards)`.
    #[pyo3(signature = (category = "", query = ""))]
    fn render(&self, category: &str, query: &str) -> (String, Vec<PyCard>) {
        let filter = FilterState::new().with_category(category).with_query(query);
        let output = self.session.render(&filter);
        let status = self.session.status_text(&output);
        (status, output.cards.into_iter().map(PyCard).collect())
    }

    /// Render the status line and visible cards as HTML.
    #[pyo3(signature = (category = "", query = ""))]
    fn render_html(&self, category: &str, query: &str) -> String {
        let filter = FilterState::new().with_category(category).with_query(query);
        html::render_page(&self.session.render(&filter), self.session.config())
    }

    /// Get the distinct categories, sorted.
    fn categories(&self) -> Vec<String> {
        self.session.categories()
    }

    /// Check whether loading failed.
    #[getter]
    fn failed(&self) -> bool {
        matches!(self.session.state(), LoadState::Failed(_))
    }

    fn __len__(&self) -> usize {
        self.session.catalog().len()
    }

    fn __repr__(&self) -> String {
        format!("Catalog(records={})", self.session.catalog().len())
    }
}
