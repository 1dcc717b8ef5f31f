//! Catalog ordering.
//!
//! Records are grouped by `Element`, then ordered by rarity tier, then by
//! `Numero`. Each key only matters when all previous keys tie.

use std::borrow::Cow;
use std::cmp::Ordering;

use super::rank_table::RankTable;
use crate::records::{CubeRecord, MetaKey};
use crate::text::locale_cmp;

/// Compare two records in catalog order.
///
/// 1. `Element`, locale order (absent sorts as the empty string).
/// 2. `Rang`, see [`RankTable::compare`].
/// 3. `Numero`, numerically when both sides parse to different integers,
///    otherwise by locale order of the raw text.
#[must_use]
pub fn compare_records(a: &CubeRecord, b: &CubeRecord) -> Ordering {
    locale_cmp(&meta_or_empty(a, MetaKey::Element), &meta_or_empty(b, MetaKey::Element))
        .then_with(|| {
            RankTable::compare(&meta_or_empty(a, MetaKey::Rang), &meta_or_empty(b, MetaKey::Rang))
        })
        .then_with(|| compare_numeros(a, b))
}

/// Sort records in place into catalog order.
///
/// The sort is stable: records with equal keys keep their relative order.
pub fn sort_records(records: &mut [CubeRecord]) {
    records.sort_by(compare_records);
}

fn meta_or_empty(record: &CubeRecord, key: MetaKey) -> Cow<'_, str> {
    record.meta_text(key).unwrap_or(Cow::Borrowed(""))
}

fn compare_numeros(a: &CubeRecord, b: &CubeRecord) -> Ordering {
    let num_a = a.meta(MetaKey::Numero).and_then(|v| parse_leading_int(&v.to_text()));
    let num_b = b.meta(MetaKey::Numero).and_then(|v| parse_leading_int(&v.to_text()));

    match (num_a, num_b) {
        (Some(na), Some(nb)) if na != nb => na.cmp(&nb),
        _ => locale_cmp(
            &meta_or_empty(a, MetaKey::Numero),
            &meta_or_empty(b, MetaKey::Numero),
        ),
    }
}

/// Parse the integer prefix of `text`.
///
/// Leading whitespace and a sign are accepted, trailing characters ignored:
/// `" 12b"` parses as `12`. Returns `None` when no digit leads the text or
/// the value does not fit in an `i64`.
#[must_use]
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if end == 0 {
        return None;
    }

    let magnitude: i64 = unsigned[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(element: &str, rang: &str, numero: &str) -> CubeRecord {
        CubeRecord::new()
            .with_attr("Element", element)
            .with_attr("Rang", rang)
            .with_attr("Numero", numero)
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("12"), Some(12));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+4"), Some(4));
        assert_eq!(parse_leading_int("12b"), Some(12));
        assert_eq!(parse_leading_int("007"), Some(7));
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("b12"), None);
        assert_eq!(parse_leading_int("-"), None);
        assert_eq!(parse_leading_int("99999999999999999999"), None);
    }

    #[test]
    fn test_element_first() {
        let eau = cube("Eau", "Éxalté", "99");
        let feu = cube("Feu", "Commun", "1");
        assert_eq!(compare_records(&eau, &feu), Ordering::Less);
    }

    #[test]
    fn test_rank_second() {
        let commun = cube("Feu", "Commun", "10");
        let rare = cube("Feu", "Rare", "2");
        assert_eq!(compare_records(&commun, &rare), Ordering::Less);
    }

    #[test]
    fn test_unranked_sorts_after_ranked() {
        let unknown = cube("Feu", "Inconnu", "1");
        let ranked = cube("Feu", "Éxalté", "2");
        assert_eq!(compare_records(&unknown, &ranked), Ordering::Greater);
        assert_eq!(compare_records(&ranked, &unknown), Ordering::Less);
    }

    #[test]
    fn test_numeric_numero() {
        let two = cube("Feu", "Rare", "2");
        let ten = cube("Feu", "Rare", "10");
        assert_eq!(compare_records(&two, &ten), Ordering::Less);
    }

    #[test]
    fn test_numero_text_fallback() {
        // Equal numeric values fall back to the raw text.
        let padded = cube("Feu", "Rare", "01");
        let plain = cube("Feu", "Rare", "1");
        assert_eq!(compare_records(&padded, &plain), Ordering::Less);

        // Non-numeric values are compared as text.
        let a = cube("Feu", "Rare", "A");
        let b = cube("Feu", "Rare", "B");
        assert_eq!(compare_records(&a, &b), Ordering::Less);
        assert_eq!(compare_records(&b, &cube("Feu", "Rare", "3")), Ordering::Greater);
    }

    #[test]
    fn test_integer_numero_values() {
        let int = CubeRecord::new().with_attr("Element", "Feu").with_attr("Numero", 9i32);
        let text = cube("Feu", "", "10");
        assert_eq!(compare_records(&int, &text), Ordering::Less);
    }

    #[test]
    fn test_missing_keys() {
        let bare = CubeRecord::new();
        let feu = cube("Feu", "Rare", "1");
        assert_eq!(compare_records(&bare, &feu), Ordering::Less);
        assert_eq!(compare_records(&bare, &CubeRecord::new()), Ordering::Equal);
    }

    #[test]
    fn test_sort_scenario() {
        let mut records = vec![
            cube("Feu", "Rare", "2"),
            cube("Feu", "Commun", "10"),
            cube("Eau", "Mythique", "1"),
        ];
        sort_records(&mut records);

        assert_eq!(records[0], cube("Eau", "Mythique", "1"));
        assert_eq!(records[1], cube("Feu", "Commun", "10"));
        assert_eq!(records[2], cube("Feu", "Rare", "2"));
    }

    #[test]
    fn test_sort_is_stable() {
        let first = cube("Air", "Rare", "1").with_attr("Nom", "first");
        let second = cube("Air", "Rare", "1").with_attr("Nom", "second");
        let mut records = vec![first.clone(), cube("Air", "Commun", "5"), second.clone()];
        sort_records(&mut records);

        assert_eq!(records[1], first);
        assert_eq!(records[2], second);
    }
}
