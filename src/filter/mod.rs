//! Filtering: category selection, free-text search and the category domain.
//!
//! ## Key Types
//!
//! - `Query`: Trimmed, lowercased search text
//! - `FilterState`: Category + query currently applied
//! - `FilterOption`: Entry of the category selector

pub mod categories;
pub mod query;
pub mod visibility;

pub use categories::{category_options, distinct_categories, FilterOption};
pub use query::{FilterState, Query};
pub use visibility::is_visible;
