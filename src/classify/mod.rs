//! Presentation classes derived from record fields.
//!
//! - `rarity_class`: card styling from `Rang` (normalized, exact match)
//! - `badge_class`: badge styling from `Element` (lowercased, substring match)

pub mod element;
pub mod rarity;

pub use element::{badge_class, ElementBadge, GENERIC_BADGE_CLASS};
pub use rarity::{rarity_class, RarityClass};
