//! Best-match selection over the analyzed tokens of a transcript.
//!
//! Each retained token is scored against the whole catalog and the running
//! best is replaced only on a strict improvement, so earlier tokens win
//! ties. When no token retains a candidate, the trimmed, lowercased full
//! phrase gets one last chance. The final score still has to clear the
//! acceptance threshold before the interpreter navigates anywhere.

use crate::analysis::Token;
use crate::catalog::{Intent, IntentCatalog};
use crate::matching::scorer::best_candidate;

/// Default dissimilarity bound for accepting a match. A selection whose
/// score reaches this value is rejected.
pub const ACCEPT_THRESHOLD: f64 = 0.5;

/// Tunable knobs for [`BestMatchSelector`].
#[derive(Debug, Clone, Copy)]
pub struct SelectorConfig {
    /// Scores strictly below this value are accepted.
    pub accept_threshold: f64,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig {
            accept_threshold: ACCEPT_THRESHOLD,
        }
    }
}

/// The winning candidate for a transcript, before the acceptance check.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<'a> {
    /// The matched intent.
    pub intent: &'a Intent,

    /// The catalog keyword that produced the score.
    pub keyword: &'a str,

    /// Dissimilarity in `[0.0, 1.0]`, lower is better.
    pub score: f64,

    /// The query string that matched: a single token, or the full phrase
    /// when the fallback fired.
    pub query: String,
}

/// Picks the best intent for a tokenized transcript.
#[derive(Debug, Clone, Default)]
pub struct BestMatchSelector {
    config: SelectorConfig,
}

impl BestMatchSelector {
    /// Create a selector with the default acceptance threshold.
    pub fn new() -> Self {
        BestMatchSelector::default()
    }

    /// Create a selector with a custom configuration.
    pub fn with_config(config: SelectorConfig) -> Self {
        BestMatchSelector { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Select the best candidate for the given tokens.
    ///
    /// Tokens are scored in order against the catalog; the running best
    /// starts at `1.0` and is only replaced on a strict improvement. When no
    /// token beats `1.0`, the trimmed, lowercased transcript is scored as a
    /// single phrase under the same rule. Returns `None` when nothing in the
    /// transcript resembles any keyword at all.
    pub fn select<'a>(
        &self,
        catalog: &'a IntentCatalog,
        tokens: &[Token],
        transcript: &str,
    ) -> Option<Selection<'a>> {
        let mut best: Option<Selection<'a>> = None;

        for token in tokens {
            let Some(candidate) = best_candidate(catalog, &token.text) else {
                continue;
            };

            let current = best.as_ref().map_or(1.0, |selection| selection.score);
            if candidate.score < current {
                best = Some(Selection {
                    intent: candidate.intent,
                    keyword: candidate.keyword,
                    score: candidate.score,
                    query: token.text.clone(),
                });
            }
        }

        if best.is_none() {
            let phrase = transcript.trim().to_lowercase();
            if let Some(candidate) = best_candidate(catalog, &phrase) {
                if candidate.score < 1.0 {
                    best = Some(Selection {
                        intent: candidate.intent,
                        keyword: candidate.keyword,
                        score: candidate.score,
                        query: phrase,
                    });
                }
            }
        }

        best
    }

    /// Whether a score clears the acceptance threshold.
    pub fn is_accepted(&self, score: f64) -> bool {
        score < self.config.accept_threshold
    }
}
