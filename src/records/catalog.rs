//! Sorted, immutable record collection.
//!
//! A `Catalog` is built once from the records delivered by the loader and
//! never changes afterwards. It is backed by `im::Vector`, so cloning a
//! snapshot for a presentation adapter is O(1).

use im::Vector;
use serde::Serialize;

use super::record::CubeRecord;
use crate::filter::distinct_categories;
use crate::ranking::sort_records;

/// Immutable snapshot of the sorted collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Catalog {
    records: Vector<CubeRecord>,
}

impl Catalog {
    /// Sort `records` into catalog order and freeze them.
    ///
    /// Records that compare equal keep their delivery order.
    #[must_use]
    pub fn new(mut records: Vec<CubeRecord>) -> Self {
        sort_records(&mut records);
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// An empty catalog (nothing loaded yet).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog holds no record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Get a record by sorted position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CubeRecord> {
        self.records.get(index)
    }

    /// Iterate over records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CubeRecord> {
        self.records.iter()
    }

    /// Distinct `Element` values, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        distinct_categories(self.iter())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CubeRecord;
    type IntoIter = im::vector::Iter<'a, CubeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CubeRecord> for Catalog {
    fn from_iter<I: IntoIterator<Item = CubeRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
