//! Property-based tests for ordering, normalization and filtering.

use std::cmp::Ordering;

use cube_catalog::filter::{distinct_categories, is_visible, FilterState};
use cube_catalog::ranking::{compare_records, sort_records};
use cube_catalog::records::{AttributeValue, Catalog, CubeRecord};
use cube_catalog::text::{locale_cmp, normalize};
use proptest::prelude::*;
use proptest::sample::select;

const ELEMENTS: [&str; 7] = ["Feu", "Eau", "Air", "Terre", "Éther", "eau", ""];
const RANGS: [&str; 10] = [
    "Commun", "Rare", "Epique", "Épique", "Mythique", "Exalte", "Éxalté", "Divin", "rare", "",
];

/// Key used to remember the delivery position of generated records.
const POSITION_KEY: &str = "Position";

fn arb_numero() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{1,3}", "0[0-9]", "[a-c0-9]{0,3}", " ?-?[0-9]{1,2}"]
}

fn arb_record() -> impl Strategy<Value = CubeRecord> {
    (
        proptest::option::of(select(ELEMENTS.to_vec())),
        proptest::option::of(select(RANGS.to_vec())),
        proptest::option::of(arb_numero()),
        "[a-zé ]{0,6}",
    )
        .prop_map(|(element, rang, numero, nom)| {
            let mut record = CubeRecord::new().with_attr("Nom", nom);
            if let Some(element) = element {
                record.insert("Element", element);
            }
            if let Some(rang) = rang {
                record.insert("Rang", rang);
            }
            if let Some(numero) = numero {
                record.insert("Numero", numero);
            }
            record
        })
}

fn arb_records() -> impl Strategy<Value = Vec<CubeRecord>> {
    prop::collection::vec(arb_record(), 0..40).prop_map(|records| {
        records
            .into_iter()
            .enumerate()
            .map(|(i, record)| record.with_attr(POSITION_KEY, i as i64))
            .collect()
    })
}

fn position(record: &CubeRecord) -> i64 {
    match record.get(POSITION_KEY) {
        Some(AttributeValue::Int(i)) => *i,
        other => panic!("missing position: {other:?}"),
    }
}

proptest! {
    #[test]
    fn prop_compare_is_reflexive(a in arb_record()) {
        prop_assert_eq!(compare_records(&a, &a), Ordering::Equal);
    }

    #[test]
    fn prop_compare_is_antisymmetric(a in arb_record(), b in arb_record()) {
        prop_assert_eq!(compare_records(&a, &b), compare_records(&b, &a).reverse());
    }

    #[test]
    fn prop_compare_is_transitive(a in arb_record(), b in arb_record(), c in arb_record()) {
        let ab = compare_records(&a, &b);
        let bc = compare_records(&b, &c);
        if ab != Ordering::Greater && bc != Ordering::Greater {
            prop_assert_ne!(compare_records(&a, &c), Ordering::Greater);
        }
        if ab == Ordering::Equal && bc == Ordering::Equal {
            prop_assert_eq!(compare_records(&a, &c), Ordering::Equal);
        }
    }

    #[test]
    fn prop_sort_is_ordered_and_stable(records in arb_records()) {
        let mut sorted = records.clone();
        sort_records(&mut sorted);

        prop_assert_eq!(sorted.len(), records.len());
        for pair in sorted.windows(2) {
            let order = compare_records(&pair[0], &pair[1]);
            prop_assert_ne!(order, Ordering::Greater);
            if order == Ordering::Equal {
                prop_assert!(position(&pair[0]) < position(&pair[1]));
            }
        }
    }

    #[test]
    fn prop_filtering_preserves_order(records in arb_records(), query in "[a-zé0-9 ]{0,3}") {
        let catalog = Catalog::new(records);
        let filter = FilterState::new().with_query(&query);

        let visible: Vec<i64> = catalog
            .iter()
            .filter(|record| filter.matches(record))
            .map(position)
            .collect();
        let sorted: Vec<i64> = catalog.iter().map(position).collect();

        let mut remaining = sorted.iter();
        for pos in &visible {
            prop_assert!(remaining.any(|p| p == pos), "visible subset is not a subsequence");
        }
        prop_assert_eq!(catalog.render(&filter).cards.len(), visible.len());
    }

    #[test]
    fn prop_empty_filters_pass_through(record in arb_record()) {
        prop_assert!(is_visible(&record, "", ""));
    }

    #[test]
    fn prop_categories_are_sorted_distinct_non_empty(records in arb_records()) {
        let categories = distinct_categories(&records);

        prop_assert!(categories.iter().all(|c| !c.is_empty()));
        for pair in categories.windows(2) {
            prop_assert_ne!(&pair[0], &pair[1]);
            prop_assert_ne!(locale_cmp(&pair[0], &pair[1]), Ordering::Greater);
        }
        for record in &records {
            if let Some(element) = record.meta_text(cube_catalog::MetaKey::Element) {
                prop_assert!(categories.iter().any(|c| *c == *element));
            }
        }
    }

    #[test]
    fn prop_normalize_is_idempotent(text in "[a-zA-Z0-9 éèêëÉÈàâÀçÇôÔîïÎœŒßİ]{0,16}") {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once.clone());
        prop_assert!(once.chars().all(|c| !c.is_uppercase()));
    }

    #[test]
    fn prop_locale_cmp_is_antisymmetric(a in "[a-cA-Cé0-9 -]{0,5}", b in "[a-cA-Cé0-9 -]{0,5}") {
        prop_assert_eq!(locale_cmp(&a, &b), locale_cmp(&b, &a).reverse());
    }
}
