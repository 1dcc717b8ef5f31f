//! Locale-aware string ordering.
//!
//! No collation tables ship with the crate, so `locale_cmp` approximates the
//! root-locale collation with the usual multi-level comparison:
//!
//! 1. **Primary**: base characters, ignoring case and accents. Whitespace,
//!    punctuation and symbols sort before digits, digits before letters.
//! 2. **Secondary**: accents, compared left to right.
//! 3. **Tertiary**: case, lowercase first.
//! 4. **Identical**: canonical decomposition, so only canonically equivalent
//!    strings compare equal.
//!
//! Letters from different scripts are ordered by code point on the primary
//! level, which is where this departs from full UCA tables.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings the way a locale-aware comparator would.
///
/// ```
/// use std::cmp::Ordering;
/// use cube_catalog::text::locale_cmp;
///
/// assert_eq!(locale_cmp("eau", "Feu"), Ordering::Less);
/// assert_eq!(locale_cmp("Éclair", "Feu"), Ordering::Less);
/// assert_eq!(locale_cmp("a", "A"), Ordering::Less);
/// ```
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    primary(a)
        .cmp(primary(b))
        .then_with(|| secondary(a).cmp(secondary(b)))
        .then_with(|| tertiary(a).cmp(tertiary(b)))
        .then_with(|| a.nfd().cmp(b.nfd()))
}

/// Character class used as the leading primary weight.
fn group(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}

fn base_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().filter(|c| !is_combining_mark(*c))
}

fn primary(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    base_chars(s)
        .flat_map(char::to_lowercase)
        .map(|c| (group(c), c))
}

fn secondary(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn tertiary(s: &str) -> impl Iterator<Item = bool> + '_ {
    base_chars(s).map(char::is_uppercase)
}
