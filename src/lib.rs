//! # cube-catalog
//!
//! Sorting, filtering and card projection for a browsable catalog of cubes.
//!
//! Each cube is an open mapping of attributes. Four of them carry meaning:
//! `Nom` (name), `Element` (category), `Rang` (rarity tier) and `Numero`
//! (ordinal). Every other attribute is a stat shown on the card.
//!
//! ## Pipeline
//!
//! 1. **Load**: records arrive from a JSON array (`load`), or from any other
//!    source as `Vec<CubeRecord>`.
//! 2. **Sort once**: `Catalog::new` orders records by element, rarity tier
//!    and number, then freezes them.
//! 3. **Render on every filter change**: `build_visible_cards` keeps the
//!    records passing the category and search filters and projects each one
//!    into a `CubeCard`, along with a status summary.
//!
//! The render output is plain data. `render::html` and the optional Python
//! bindings are two presentation adapters built on top of it.
//!
//! ## Modules
//!
//! - `text`: Accent-insensitive normalization and locale-aware ordering
//! - `records`: Record model and the sorted catalog snapshot
//! - `ranking`: Rarity table and record comparator
//! - `classify`: Rarity and category styling classes
//! - `filter`: Visibility rules and the category domain
//! - `cards`: Card projection
//! - `render`: Render pass, status and HTML adapter
//! - `session`: Load state machine around a catalog
//! - `load`: JSON loading
//! - `core`: Configuration and errors

pub mod core;
pub mod text;
pub mod records;
pub mod ranking;
pub mod classify;
pub mod filter;
pub mod cards;
pub mod render;
pub mod session;
pub mod load;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{CatalogConfig, LoadError};

pub use crate::text::{locale_cmp, normalize};

pub use crate::records::{AttributeKey, AttributeValue, Catalog, CubeRecord, MetaKey};

pub use crate::ranking::{compare_records, sort_records, RankTable};

pub use crate::classify::{badge_class, rarity_class, ElementBadge, RarityClass};

pub use crate::filter::{
    category_options, distinct_categories, is_visible, FilterOption, FilterState, Query,
};

pub use crate::cards::{project_card, Badge, CubeCard};

pub use crate::render::{build_visible_cards, RenderOutput, Status};

pub use crate::session::{CatalogSession, LoadState};

pub use crate::load::{load_records, parse_records, read_records};
