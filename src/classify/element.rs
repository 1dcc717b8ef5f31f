//! Category badge styling.

use serde::Serialize;

/// Badge style of an `Element` value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementBadge {
    Air,
    Feu,
    Terre,
    Eau,
    Chaos,
    Lumiere,
    Generic,
}

/// Substring tokens checked in order; the first hit wins.
const TOKENS: [(&str, ElementBadge); 6] = [
    ("air", ElementBadge::Air),
    ("feu", ElementBadge::Feu),
    ("terre", ElementBadge::Terre),
    ("eau", ElementBadge::Eau),
    ("chaos", ElementBadge::Chaos),
    ("lumi", ElementBadge::Lumiere),
];

impl ElementBadge {
    /// CSS class of the badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            ElementBadge::Air => "badge badge-air",
            ElementBadge::Feu => "badge badge-feu",
            ElementBadge::Terre => "badge badge-terre",
            ElementBadge::Eau => "badge badge-eau",
            ElementBadge::Chaos => "badge badge-chaos",
            ElementBadge::Lumiere => "badge badge-lumiere",
            ElementBadge::Generic => GENERIC_BADGE_CLASS,
        }
    }
}

/// CSS class of a badge without category color.
pub const GENERIC_BADGE_CLASS: &str = "badge";

/// Classify an `Element` value.
///
/// Matching is case-insensitive but accent-sensitive; `"lumi"` covers both
/// `"Lumière"` and `"Lumiere"`.
#[must_use]
pub fn badge_class(element: &str) -> ElementBadge {
    let lower = element.to_lowercase();
    TOKENS
        .iter()
        .find(|(token, _)| lower.contains(token))
        .map_or(ElementBadge::Generic, |(_, badge)| *badge)
}
