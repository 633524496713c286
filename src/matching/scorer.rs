//! Dissimilarity scoring between query tokens and catalog keywords.
//!
//! Scores live in `[0.0, 1.0]` where `0.0` means identical and `1.0` means
//! nothing in common. A query scores against an intent by taking the minimum
//! over the intent's keywords, and against a catalog by scanning intents in
//! order and keeping the first strict improvement.

use crate::catalog::{Intent, IntentCatalog};
use crate::matching::levenshtein::normalized_distance;

/// A scored keyword hit inside a catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchCandidate<'a> {
    /// The intent the winning keyword belongs to.
    pub intent: &'a Intent,

    /// Dissimilarity in `[0.0, 1.0]`, lower is better.
    pub score: f64,

    /// The keyword that produced the score.
    pub keyword: &'a str,
}

/// Score a query string against a single keyword.
///
/// Equality and substring containment (either direction) are full-strength
/// hits and score `0.0`. Everything else falls back to the normalized
/// Levenshtein distance.
///
/// Containment is what keeps multi-word keywords reachable from single-word
/// queries: "mentions" is contained in "mentions légales" and scores `0.0`
/// without having to pay the edit distance for the missing words.
///
/// # Examples
///
/// ```
/// use portevoix::matching::keyword_score;
///
/// assert_eq!(keyword_score("profil", "profil"), 0.0);
/// assert_eq!(keyword_score("mentions", "mentions légales"), 0.0);
/// assert!((keyword_score("payé", "payer") - 0.4).abs() < 1e-9);
/// ```
pub fn keyword_score(query: &str, keyword: &str) -> f64 {
    if query == keyword {
        return 0.0;
    }

    // Empty strings are contained in everything, so containment only counts
    // when both sides are non-empty.
    if !query.is_empty()
        && !keyword.is_empty()
        && (query.contains(keyword) || keyword.contains(query))
    {
        return 0.0;
    }

    normalized_distance(query, keyword)
}

/// Score a query against one intent: the minimum over its keywords.
///
/// Returns the best score together with the keyword that produced it, or
/// `None` when the intent has no keywords. Ties keep the first keyword in
/// declaration order.
pub fn intent_score<'a>(query: &str, intent: &'a Intent) -> Option<(f64, &'a str)> {
    let mut best: Option<(f64, &'a str)> = None;

    for keyword in &intent.keywords {
        let score = keyword_score(query, keyword);
        if best.is_none_or(|(best_score, _)| score < best_score) {
            best = Some((score, keyword));
        }
    }

    best
}

/// Score a query against a whole catalog.
///
/// Intents are scanned in catalog order and a candidate is only replaced on
/// a strict improvement, so ties resolve to the earliest intent. An empty
/// query never matches.
pub fn best_candidate<'a>(catalog: &'a IntentCatalog, query: &str) -> Option<MatchCandidate<'a>> {
    if query.is_empty() {
        return None;
    }

    let mut best: Option<MatchCandidate<'a>> = None;

    for intent in catalog {
        let Some((score, keyword)) = intent_score(query, intent) else {
            continue;
        };

        if best.is_none_or(|candidate| score < candidate.score) {
            best = Some(MatchCandidate {
                intent,
                score,
                keyword,
            });
        }
    }

    best
}
