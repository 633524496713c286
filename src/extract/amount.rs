//! Monetary amount extraction.

use std::sync::LazyLock;

use regex::Regex;

/// First number in the phrase, with an optional decimal part and an
/// optional currency suffix. Speech-to-text writes decimals with a comma
/// as often as with a dot, so both are recognized.
static AMOUNT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:[.,]\d+)?)\s*(?:euros?\b|€)?").unwrap());

/// Extract the first monetary amount from a lowercased transcript.
///
/// Returns `None` when the phrase contains no number.
///
/// # Examples
///
/// ```
/// use portevoix::extract::extract_amount;
///
/// assert_eq!(extract_amount("j'ai payé 50 euros"), Some(50.0));
/// assert_eq!(extract_amount("une facture de 12,50"), Some(12.5));
/// assert_eq!(extract_amount("ajoute une dépense"), None);
/// ```
pub fn extract_amount(transcript: &str) -> Option<f64> {
    let captures = AMOUNT_PATTERN.captures(transcript)?;
    let raw = captures.get(1)?.as_str().replace(',', ".");
    raw.parse::<f64>().ok()
}
