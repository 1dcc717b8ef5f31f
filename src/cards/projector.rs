//! Card projection.
//!
//! `CubeCard` is everything a presentation layer needs to draw one record:
//! a title, up to two badges, the stat lines and the card styling class.

use serde::Serialize;
use smallvec::SmallVec;

use crate::classify::{badge_class, rarity_class, RarityClass, GENERIC_BADGE_CLASS};
use crate::records::{CubeRecord, MetaKey};

/// Prefix of the `Numero` term in card titles.
pub const NUMERO_PREFIX: &str = "N° ";

/// Base CSS class of every card.
pub const CARD_CLASS: &str = "cube-card";

/// A labelled badge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Badge {
    /// Badge text.
    pub text: String,
    /// CSS class of the badge.
    pub style_class: &'static str,
}

/// Display description of one record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CubeCard {
    /// `Nom`, `Element` and `N° Numero`, whichever are present.
    pub title: String,
    /// Category badge, then rarity badge.
    pub badges: SmallVec<[Badge; 2]>,
    /// Displayable stat values in record order.
    pub stat_lines: Vec<String>,
    /// Rarity styling, if the `Rang` is recognized.
    pub rarity: Option<RarityClass>,
    /// CSS class carried by the rarity, empty when there is none.
    pub card_style_class: &'static str,
}

impl CubeCard {
    /// Full CSS class list of the card element.
    #[must_use]
    pub fn css_class(&self) -> String {
        if self.card_style_class.is_empty() {
            CARD_CLASS.to_string()
        } else {
            format!("{CARD_CLASS} {}", self.card_style_class)
        }
    }

    /// Check if the card carries any badge.
    #[must_use]
    pub fn has_badges(&self) -> bool {
        !self.badges.is_empty()
    }
}

/// Derive the card of a record.
///
/// ## Example
///
/// ```
/// use cube_catalog::cards::project_card;
/// use cube_catalog::records::CubeRecord;
///
/// let cube = CubeRecord::new()
///     .with_attr("Nom", "Braise")
///     .with_attr("Element", "Feu")
///     .with_attr("Numero", "3")
///     .with_attr("Rang", "Rare")
///     .with_attr("Force", "12");
///
/// let card = project_card(&cube);
/// assert_eq!(card.title, "Braise Feu N° 3");
/// assert_eq!(card.stat_lines, ["12"]);
/// assert_eq!(card.css_class(), "cube-card rarity-rare");
/// ```
#[must_use]
pub fn project_card(record: &CubeRecord) -> CubeCard {
    let nom = record.meta_text(MetaKey::Nom);
    let element = record.meta_text(MetaKey::Element);
    let rang = record.meta_text(MetaKey::Rang);
    let numero = record.meta_text(MetaKey::Numero);

    let mut title_parts: SmallVec<[String; 3]> = SmallVec::new();
    if let Some(nom) = &nom {
        title_parts.push(nom.to_string());
    }
    if let Some(element) = &element {
        title_parts.push(element.to_string());
    }
    if let Some(numero) = &numero {
        title_parts.push(format!("{NUMERO_PREFIX}{numero}"));
    }

    let mut badges = SmallVec::new();
    if let Some(element) = &element {
        badges.push(Badge {
            text: element.to_string(),
            style_class: badge_class(element).css_class(),
        });
    }
    if let Some(rang) = &rang {
        badges.push(Badge {
            text: rang.to_string(),
            style_class: GENERIC_BADGE_CLASS,
        });
    }

    let stat_lines = record
        .stats()
        .filter(|(_, value)| value.is_displayable())
        .map(|(_, value)| value.to_text().into_owned())
        .collect();

    let rarity = rang.as_deref().and_then(rarity_class);

    CubeCard {
        title: title_parts.join(" "),
        badges,
        stat_lines,
        rarity,
        card_style_class: rarity.map_or("", RarityClass::css_class),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_card() {
        let cube = CubeRecord::new()
            .with_attr("Nom", "Orage")
            .with_attr("Element", "Air")
            .with_attr("Rang", "Épique")
            .with_attr("Numero", "7")
            .with_attr("Vitesse", "+3");

        let card = project_card(&cube);

        assert_eq!(card.title, "Orage Air N° 7");
        assert_eq!(
            card.badges.to_vec(),
            vec![
                Badge { text: "Air".to_string(), style_class: "badge badge-air" },
                Badge { text: "Épique".to_string(), style_class: "badge" },
            ]
        );
        assert_eq!(card.stat_lines, vec!["+3".to_string()]);
        assert_eq!(card.rarity, Some(RarityClass::Epique));
        assert_eq!(card.card_style_class, "rarity-epique");
    }

    #[test]
    fn test_stat_suppression() {
        let cube = CubeRecord::new()
            .with_attr("Nom", "X")
            .with_attr("Stat1", "0")
            .with_attr("Stat2", "")
            .with_attr("Stat3", "5");

        assert_eq!(project_card(&cube).stat_lines, vec!["5".to_string()]);
    }

    #[test]
    fn test_stat_order_and_numbers() {
        let cube = CubeRecord::new()
            .with_attr("B", 2i32)
            .with_attr("Element", "Eau")
            .with_attr("A", "1")
            .with_attr("C", 0i32);

        assert_eq!(project_card(&cube).stat_lines, vec!["2".to_string(), "1".to_string()]);
    }

    #[test]
    fn test_title_omits_missing_terms() {
        let only_numero = CubeRecord::new().with_attr("Numero", "12");
        assert_eq!(project_card(&only_numero).title, "N° 12");

        let nom_and_numero = CubeRecord::new().with_attr("Nom", "A").with_attr("Numero", "1");
        assert_eq!(project_card(&nom_and_numero).title, "A N° 1");

        let empty_element = CubeRecord::new().with_attr("Nom", "A").with_attr("Element", "");
        assert_eq!(project_card(&empty_element).title, "A");

        assert_eq!(project_card(&CubeRecord::new()).title, "");
    }

    #[test]
    fn test_badges_optional() {
        let only_rang = CubeRecord::new().with_attr("Rang", "Légendaire");
        let card = project_card(&only_rang);

        assert_eq!(card.badges.len(), 1);
        assert_eq!(card.badges[0].text, "Légendaire");
        assert_eq!(card.rarity, None);
        assert_eq!(card.card_style_class, "");
        assert_eq!(card.css_class(), "cube-card");

        assert!(!project_card(&CubeRecord::new()).has_badges());
    }

    #[test]
    fn test_generic_element_badge() {
        let cube = CubeRecord::new().with_attr("Element", "Ombre");
        assert_eq!(project_card(&cube).badges[0].style_class, "badge");
    }
}
