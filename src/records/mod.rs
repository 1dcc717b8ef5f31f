//! Record model: open attribute mappings and the sorted catalog.
//!
//! ## Key Types
//!
//! - `AttributeKey` / `AttributeValue`: One attribute of a record
//! - `MetaKey`: The four attributes with fixed meaning
//! - `CubeRecord`: Ordered attribute mapping for one cube
//! - `Catalog`: Sorted immutable snapshot of all records

pub mod attributes;
pub mod catalog;
pub mod record;

pub use attributes::{AttributeKey, AttributeValue, MetaKey};
pub use catalog::Catalog;
pub use record::CubeRecord;
