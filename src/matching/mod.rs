//! Fuzzy matching of transcript tokens against the intent catalog.
//!
//! This module provides the dissimilarity metric, the per-intent keyword
//! scorer, and the best-match selector that together decide which intent an
//! utterance maps to.

pub mod levenshtein;
pub mod scorer;
pub mod selector;

pub use levenshtein::{levenshtein_distance, normalized_distance};
pub use scorer::{MatchCandidate, best_candidate, intent_score, keyword_score};
pub use selector::{ACCEPT_THRESHOLD, BestMatchSelector, Selection, SelectorConfig};
