//! Rarity tiers.
//!
//! The table is matched against raw label text. Accented and unaccented
//! spellings occupy distinct positions, so `"Epique"` ranks just before
//! `"Épique"`.

use std::cmp::Ordering;

use crate::text::locale_cmp;

/// Recognized `Rang` labels, lowest tier first.
pub const RANK_ORDER: [&str; 7] = [
    "Commun", "Rare", "Epique", "Épique", "Mythique", "Exalte", "Éxalté",
];

/// Fixed ordering of rarity labels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RankTable;

impl RankTable {
    /// Position of `label` in the table, `None` when unranked.
    #[must_use]
    pub fn index_of(label: &str) -> Option<usize> {
        RANK_ORDER.iter().position(|rank| *rank == label)
    }

    /// Compare two raw labels.
    ///
    /// Ranked labels follow table order and precede unranked ones.
    /// Two unranked labels fall back to locale ordering.
    #[must_use]
    pub fn compare(a: &str, b: &str) -> Ordering {
        match (Self::index_of(a), Self::index_of(b)) {
            (Some(ia), Some(ib)) => ia.cmp(&ib),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => locale_cmp(a, b),
        }
    }
}
