//! Catalog session: load state and rendering against the current snapshot.
//!
//! The session starts `Pending` with an empty collection. Completing the load
//! is the single state transition: success installs the sorted `Catalog`,
//! failure is terminal. Renders always read the current snapshot and never
//! modify it.

use crate::core::{CatalogConfig, LoadError};
use crate::filter::{category_options, FilterOption, FilterState};
use crate::load::load_records;
use crate::records::{Catalog, CubeRecord};
use crate::render::{build_visible_cards, RenderOutput, Status};

/// Load state of a session.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LoadState {
    /// The load has not completed yet.
    #[default]
    Pending,
    /// Records are loaded and sorted.
    Ready(Catalog),
    /// Loading failed; the collection stays empty.
    Failed(String),
}

impl LoadState {
    /// Check if the load has completed, successfully or not.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }
}

/// A browsing session over one catalog.
///
/// ## Example
///
/// ```
/// use cube_catalog::filter::FilterState;
/// use cube_catalog::records::CubeRecord;
/// use cube_catalog::render::Status;
/// use cube_catalog::session::CatalogSession;
///
/// let mut session = CatalogSession::default();
/// assert_eq!(session.render(&FilterState::new()).status, Status::NoData);
///
/// session.complete_load(Ok(vec![CubeRecord::new().with_attr("Element", "Feu")]));
/// assert_eq!(
///     session.render(&FilterState::new()).status,
///     Status::Showing { visible: 1, total: 1 }
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct CatalogSession {
    config: CatalogConfig,
    state: LoadState,
    empty: Catalog,
}

impl CatalogSession {
    /// Create a pending session.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            state: LoadState::Pending,
            empty: Catalog::empty(),
        }
    }

    /// Get the session configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Get the load state.
    #[must_use]
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Complete the load.
    ///
    /// Only the first completion is applied; later ones are ignored.
    /// Returns `true` if this call changed the state.
    pub fn complete_load(&mut self, result: Result<Vec<CubeRecord>, LoadError>) -> bool {
        if self.state.is_settled() {
            tracing::warn!("load already completed, ignoring new result");
            return false;
        }

        self.state = match result {
            Ok(records) => {
                let catalog = Catalog::new(records);
                tracing::info!(records = catalog.len(), "catalog ready");
                LoadState::Ready(catalog)
            }
            Err(err) => {
                tracing::error!(error = %err, "catalog load failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }

    /// Load records from `config.source_path` and complete the load.
    pub fn load_from_source(&mut self) -> bool {
        let result = load_records(&self.config.source_path);
        self.complete_load(result)
    }

    /// Current snapshot (empty unless the load succeeded).
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        match &self.state {
            LoadState::Ready(catalog) => catalog,
            LoadState::Pending | LoadState::Failed(_) => &self.empty,
        }
    }

    /// Distinct categories of the current snapshot.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.catalog().categories()
    }

    /// Category selector entries for the current snapshot.
    #[must_use]
    pub fn category_options(&self) -> Vec<FilterOption> {
        category_options(self.catalog(), &self.config)
    }

    /// Render the current snapshot under `filter`.
    #[must_use]
    pub fn render(&self, filter: &FilterState) -> RenderOutput {
        match &self.state {
            LoadState::Failed(_) => RenderOutput::empty(Status::LoadFailed),
            LoadState::Pending | LoadState::Ready(_) => build_visible_cards(self.catalog(), filter),
        }
    }

    /// Render the status line of an output with the session wording.
    #[must_use]
    pub fn status_text(&self, output: &RenderOutput) -> String {
        output.status_text(&self.config)
    }
}
