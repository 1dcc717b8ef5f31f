//! Category filter domain.
//!
//! The set of categories is never declared: it is whatever `Element` values
//! the loaded records carry.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::CatalogConfig;
use crate::records::{CubeRecord, MetaKey};
use crate::text::locale_cmp;

/// One entry of the category selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    /// Value stored in `FilterState::category`.
    pub value: String,
    /// Text shown to the user.
    pub label: String,
}

/// Distinct non-empty `Element` values, in locale order.
#[must_use]
pub fn distinct_categories<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a CubeRecord>,
{
    let mut seen = FxHashSet::default();
    let mut categories: Vec<String> = records
        .into_iter()
        .filter_map(|record| record.meta_text(MetaKey::Element))
        .filter(|element| seen.insert(element.to_string()))
        .map(|element| element.into_owned())
        .collect();

    categories.sort_by(|a, b| locale_cmp(a, b).then_with(|| a.cmp(b)));
    categories
}

/// Selector entries: an "all categories" entry followed by every category.
#[must_use]
pub fn category_options<'a, I>(records: I, config: &CatalogConfig) -> Vec<FilterOption>
where
    I: IntoIterator<Item = &'a CubeRecord>,
{
    let all = FilterOption {
        value: String::new(),
        label: config.all_categories_label.clone(),
    };

    std::iter::once(all)
        .chain(distinct_categories(records).into_iter().map(|category| FilterOption {
            value: category.clone(),
            label: category,
        }))
        .collect()
}
