//! Filter inputs.

use serde::{Deserialize, Serialize};

/// Free-text search query, trimmed and lowercased.
///
/// ```
/// use cube_catalog::filter::Query;
///
/// assert_eq!(Query::new("  FEU ").as_str(), "feu");
/// assert!(Query::new("   ").is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Query(String);

impl Query {
    /// Prepare raw user input.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase().trim().to_string())
    }

    /// The prepared query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if the query imposes no constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for Query {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Current state of the category selector and search box.
///
/// An empty category means "all categories".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    /// Selected `Element`, compared exactly.
    pub category: String,
    /// Search query.
    pub query: Query,
}

impl FilterState {
    /// A filter that lets every record through.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a category (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the search query from raw input (builder pattern).
    #[must_use]
    pub fn with_query(mut self, raw: &str) -> Self {
        self.query = Query::new(raw);
        self
    }

    /// Check if neither filter is active.
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.category.is_empty() && self.query.is_empty()
    }
}
