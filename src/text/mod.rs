//! Text primitives: canonical form and locale-aware ordering.

pub mod collation;
pub mod normalize;

pub use collation::locale_cmp;
pub use normalize::normalize;
