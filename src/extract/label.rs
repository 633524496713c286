//! Label extraction: what an expense was for, or who a letter is addressed
//! to.

use std::sync::LazyLock;

use regex::Regex;

/// Text following a preposition ("pour", "chez", "à"), with a leading
/// article ("le", "la", "les", "l'") stripped. The capture runs over
/// lowercase letters, digits and spaces up to the next punctuation or the
/// end of the phrase.
static LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:pour|chez|à)\s+(?:l(?:es?|a)\s+|l')?([0-9a-zà-öø-ÿ][0-9a-zà-öø-ÿ ]*)")
        .unwrap()
});

/// Extract a label from a lowercased transcript.
///
/// The first preposition in the phrase wins. Captures that start with a
/// digit or that trim down to two characters or fewer are discarded, so
/// "pour 50 euros" yields nothing.
///
/// # Examples
///
/// ```
/// use portevoix::extract::extract_label;
///
/// assert_eq!(extract_label("50 euros pour la boulangerie").as_deref(), Some("boulangerie"));
/// assert_eq!(extract_label("une lettre pour l'urssaf").as_deref(), Some("urssaf"));
/// assert_eq!(extract_label("pour 50 euros"), None);
/// ```
pub fn extract_label(transcript: &str) -> Option<String> {
    let captures = LABEL_PATTERN.captures(transcript)?;
    let label = captures.get(1)?.as_str().trim();

    if label.chars().count() <= 2 {
        return None;
    }
    if label.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        return None;
    }

    Some(label.to_string())
}
