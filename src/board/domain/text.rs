//! Text folding shared by label parsing and tag search.

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Folds text for accent- and case-insensitive comparison.
///
/// The input is decomposed (NFD), combining marks are dropped and the rest
/// is lower-cased, so `"URGÊNCIA"` folds to `"urgencia"`.
#[must_use]
pub fn fold_diacritics(value: &str) -> String {
    value
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalizes a user-facing tag: trims whitespace and rejects blanks.
#[must_use]
pub fn clean_tag(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// Cleans a tag list, trimming entries and removing blank ones.
///
/// Duplicates and order are preserved.
#[must_use]
pub fn clean_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| clean_tag(tag.as_ref()))
        .collect()
}
