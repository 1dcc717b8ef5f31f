//! Visible card computation.

use serde::Serialize;

use super::status::Status;
use crate::cards::{project_card, CubeCard};
use crate::core::CatalogConfig;
use crate::filter::FilterState;
use crate::records::Catalog;

/// Result of one render pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RenderOutput {
    /// Summary of the pass.
    pub status: Status,
    /// Visible cards in catalog order.
    pub cards: Vec<CubeCard>,
}

impl RenderOutput {
    /// Output of a pass that produced no card.
    #[must_use]
    pub fn empty(status: Status) -> Self {
        Self {
            status,
            cards: Vec::new(),
        }
    }

    /// Render the status line with the configured wording.
    #[must_use]
    pub fn status_text(&self, config: &CatalogConfig) -> String {
        self.status.text(config)
    }

    /// Number of visible cards.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.len()
    }
}

/// Compute the cards visible under `filter`.
///
/// Every call starts from the catalog snapshot; nothing carries over from a
/// previous pass.
///
/// ## Example
///
/// ```
/// use cube_catalog::filter::FilterState;
/// use cube_catalog::records::{Catalog, CubeRecord};
/// use cube_catalog::render::{build_visible_cards, Status};
///
/// let catalog = Catalog::new(vec![
///     CubeRecord::new().with_attr("Element", "Feu"),
///     CubeRecord::new().with_attr("Element", "Eau"),
/// ]);
///
/// let output = build_visible_cards(&catalog, &FilterState::new().with_category("Feu"));
/// assert_eq!(output.status, Status::Showing { visible: 1, total: 2 });
/// ```
#[must_use]
pub fn build_visible_cards(catalog: &Catalog, filter: &FilterState) -> RenderOutput {
    if catalog.is_empty() {
        return RenderOutput::empty(Status::NoData);
    }

    let cards: Vec<CubeCard> = catalog
        .iter()
        .filter(|record| filter.matches(record))
        .map(project_card)
        .collect();

    let total = catalog.len();
    tracing::debug!(visible = cards.len(), total, "rendered catalog");

    let status = if cards.is_empty() {
        Status::NoMatches
    } else {
        Status::Showing {
            visible: cards.len(),
            total,
        }
    };

    RenderOutput { status, cards }
}

impl Catalog {
    /// Compute the cards visible under `filter`.
    #[must_use]
    pub fn render(&self, filter: &FilterState) -> RenderOutput {
        build_visible_cards(self, filter)
    }
}
