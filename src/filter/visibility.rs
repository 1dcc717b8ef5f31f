//! Record visibility under the current filters.

use super::query::FilterState;
use crate::records::{CubeRecord, MetaKey};

/// Check whether a record passes both filters.
///
/// - A non-empty `active_category` must equal the record's `Element` exactly.
/// - A non-empty `query` (already trimmed and lowercased) must occur in the
///   lowercased, space-joined values of the record. Accents are matched
///   literally.
#[must_use]
pub fn is_visible(record: &CubeRecord, active_category: &str, query: &str) -> bool {
    matches_category(record, active_category) && matches_query(record, query)
}

fn matches_category(record: &CubeRecord, active_category: &str) -> bool {
    if active_category.is_empty() {
        return true;
    }
    record
        .meta(MetaKey::Element)
        .is_some_and(|element| element.to_text() == active_category)
}

fn matches_query(record: &CubeRecord, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    record.joined_values().to_lowercase().contains(query)
}

impl FilterState {
    /// Check whether a record passes this filter.
    #[must_use]
    pub fn matches(&self, record: &CubeRecord) -> bool {
        is_visible(record, &self.category, self.query.as_str())
    }
}
