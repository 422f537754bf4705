// Sentence-level helpers: split into tokens and normalize each for analysis.

use crate::alphabet;

/// Lowercase (Turkish rules), fold circumflexes and drop apostrophes:
/// `Ankara'da` → `ankarada`.
pub fn normalize_word(word: &str) -> String {
    alphabet::normalize_circumflex(&alphabet::to_lower(word))
        .chars()
        .filter(|&c| !is_apostrophe(c))
        .collect()
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '’' | '‘')
}

/// Split on whitespace and strip surrounding punctuation. Apostrophes inside
/// a token are kept; [`normalize_word`] removes them.
pub fn split_sentence(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric() && !is_apostrophe(c)))
        .map(|w| w.trim_matches(is_apostrophe))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}
