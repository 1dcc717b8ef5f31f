//! Rarity styling.
//!
//! Unlike [`RankTable`](crate::ranking::RankTable), which matches raw labels,
//! the styling class is picked from the normalized label: `"Épique"` and
//! `"Epique"` share one class.

use serde::Serialize;

use crate::text::normalize;

/// Styling class of a card, derived from its `Rang`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RarityClass {
    Commun,
    Rare,
    Epique,
    Mythique,
    Exalte,
}

impl RarityClass {
    /// All classes in tier order.
    pub const ALL: [RarityClass; 5] = [
        RarityClass::Commun,
        RarityClass::Rare,
        RarityClass::Epique,
        RarityClass::Mythique,
        RarityClass::Exalte,
    ];

    /// Match an already normalized label.
    #[must_use]
    pub fn from_normalized(label: &str) -> Option<Self> {
        match label {
            "commun" => Some(RarityClass::Commun),
            "rare" => Some(RarityClass::Rare),
            "epique" => Some(RarityClass::Epique),
            "mythique" => Some(RarityClass::Mythique),
            "exalte" => Some(RarityClass::Exalte),
            _ => None,
        }
    }

    /// CSS class applied to the whole card.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            RarityClass::Commun => "rarity-commun",
            RarityClass::Rare => "rarity-rare",
            RarityClass::Epique => "rarity-epique",
            RarityClass::Mythique => "rarity-mythique",
            RarityClass::Exalte => "rarity-exalte",
        }
    }
}

/// Classify a raw `Rang` label.
///
/// ```
/// use cube_catalog::classify::{rarity_class, RarityClass};
///
/// assert_eq!(rarity_class("Épique"), Some(RarityClass::Epique));
/// assert_eq!(rarity_class("Légendaire"), None);
/// ```
#[must_use]
pub fn rarity_class(rang: &str) -> Option<RarityClass> {
    RarityClass::from_normalized(&normalize(rang))
}
