//! Status line shown above the card list.

use serde::Serialize;

use crate::core::CatalogConfig;

/// Outcome of a render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Status {
    /// The collection is empty; nothing was filtered.
    NoData,
    /// Loading failed; the collection stays empty for the session.
    LoadFailed,
    /// Records exist but none passes the filters.
    NoMatches,
    /// `visible` of `total` records pass the filters.
    Showing { visible: usize, total: usize },
}

impl Status {
    /// Render the status with the configured wording.
    #[must_use]
    pub fn text(&self, config: &CatalogConfig) -> String {
        match *self {
            Status::NoData => config.no_data_message.clone(),
            Status::LoadFailed => config.load_failed_message.clone(),
            Status::NoMatches => config.no_matches_message.clone(),
            Status::Showing { visible, total } => config.summary(visible, total),
        }
    }
}
