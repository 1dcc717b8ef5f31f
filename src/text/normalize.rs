//! Canonical text form for accent- and case-insensitive matching.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase `text` and strip its diacritics.
///
/// Characters are NFD-decomposed and combining marks dropped, so
/// `"Épique"` and `"epique"` share the same canonical form.
///
/// ```
/// use cube_catalog::text::normalize;
///
/// assert_eq!(normalize("Épique"), "epique");
/// assert_eq!(normalize(""), "");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    if lower.is_ascii() {
        return lower;
    }
    lower.nfd().filter(|c| !is_combining_mark(*c)).collect()
}
