//! Naive sentence filter.
//!
//! Text is split on every literal `.`; abbreviations, decimals and other
//! dotted constructs are split too.

/// Split `text` on the literal `.` character.
pub fn fragments(text: &str) -> impl Iterator<Item = &str> {
    text.split('.')
}

/// Fragments of `text` whose lowercase form contains the lowercase `keyword`.
///
/// An empty keyword matches every fragment, empty ones included. Order follows
/// the original text.
#[must_use]
pub fn filter_sentences<'a>(text: &'a str, keyword: &str) -> Vec<&'a str> {
    let needle = keyword.to_lowercase();
    fragments(text)
        .filter(|fragment| fragment.to_lowercase().contains(&needle))
        .collect()
}
