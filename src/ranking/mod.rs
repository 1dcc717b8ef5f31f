//! Catalog ordering: rarity tiers and the record comparator.

pub mod comparator;
pub mod rank_table;

pub use comparator::{compare_records, parse_leading_int, sort_records};
pub use rank_table::{RankTable, RANK_ORDER};
