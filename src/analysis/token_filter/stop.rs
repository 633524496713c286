//! Stop filter implementation.
//!
//! This module provides a filter that removes common words (stop words) that
//! carry no intent on their own. Includes a default French stop word list
//! covering pronouns, articles, prepositions, politeness forms, and the
//! request verbs that open most voice commands, with support for custom word
//! lists.
//!
//! # Examples
//!
//! ```
//! use portevoix::analysis::token_filter::Filter;
//! use portevoix::analysis::token_filter::stop::StopFilter;
//! use portevoix::analysis::token::Token;
//!
//! let filter = StopFilter::new(); // Uses the default French stop words
//! let tokens = vec![
//!     Token::new("montre", 0),
//!     Token::new("moi", 1),
//!     Token::new("profil", 2)
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! // "montre" and "moi" are removed as stop words
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "profil");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Default French stop words list.
///
/// Pronouns, determiners, conjunctions, prepositions, auxiliary and request
/// verbs, politeness forms, and common elided contractions. Entries are
/// lowercase; apply a lowercase filter before this one.
const DEFAULT_FRENCH_STOP_WORDS: &[&str] = &[
    "je", "tu", "il", "elle", "on", "nous", "vous", "ils", "elles", "moi", "toi", "lui", "eux",
    "mon", "ton", "son", "ma", "ta", "sa", "mes", "tes", "ses", "notre", "votre", "leur", "leurs",
    "le", "la", "les", "un", "une", "des", "du", "au", "aux", "ce", "cet", "cette", "ces", "ça",
    "cela", "et", "ou", "mais", "donc", "or", "ni", "car", "que", "qui", "quoi", "dont", "où",
    "dans", "sur", "sous", "avec", "sans", "pour", "chez", "vers", "par", "entre", "après",
    "avant", "depuis", "pendant", "est", "sont", "suis", "es", "êtes", "sommes", "était", "sera",
    "être", "avoir", "ai", "as", "avons", "avez", "ont", "veux", "veut", "voudrais", "voulez",
    "peux", "peut", "pouvez", "puis", "montre", "montrer", "montrez", "affiche", "afficher",
    "affichez", "ouvre", "ouvrir", "ouvrez", "lance", "lancer", "lancez", "va", "vais", "aller",
    "allez", "donne", "donner", "donnez", "fais", "fait", "faire", "faites", "mets", "mettre",
    "voir", "vois", "merci", "bonjour", "salut", "plaît", "stp", "svp", "j'ai", "j'aimerais",
    "c'est", "n'est", "d'un", "d'une", "qu'il", "qu'elle", "s'il", "alors", "aussi", "bien",
    "très", "tout", "tous", "toute", "toutes", "comme", "encore", "juste", "quand", "même",
    "plus", "moins",
];

/// Default French stop words as a HashSet.
pub static DEFAULT_FRENCH_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_FRENCH_STOP_WORDS
        .iter()
        .map(|&s| s.to_string())
        .collect()
});

/// A filter that removes stop words from the token stream.
///
/// Stop words are common words ("montre", "moi", "les") that carry no intent
/// on their own and are filtered out before fuzzy matching so that only the
/// meaningful words of an utterance are scored against the catalog.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```
/// use portevoix::analysis::token_filter::Filter;
/// use portevoix::analysis::token_filter::stop::StopFilter;
/// use portevoix::analysis::token::Token;
///
/// let filter = StopFilter::new();
/// let tokens = vec![
///     Token::new("ouvre", 0),
///     Token::new("les", 1),
///     Token::new("mentions", 2)
/// ];
///
/// let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
///     .unwrap()
///     .collect();
///
/// // Only "mentions" remains
/// assert_eq!(result.len(), 1);
/// assert_eq!(result[0].text, "mentions");
/// ```
///
/// ## Custom Stop Words
///
/// ```
/// use portevoix::analysis::token_filter::stop::StopFilter;
///
/// let filter = StopFilter::from_words(vec!["euh", "bah", "hein"]);
/// assert!(filter.is_stop_word("euh"));
/// ```
#[derive(Clone, Debug)]
pub struct StopFilter {
    /// The set of stop words to remove
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default French stop words.
    ///
    /// # Examples
    ///
    /// ```
    /// use portevoix::analysis::token_filter::stop::StopFilter;
    ///
    /// let filter = StopFilter::new();
    /// assert!(filter.is_stop_word("montre"));
    /// assert!(!filter.is_stop_word("profil"));
    /// ```
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_FRENCH_STOP_WORDS_SET.clone())
    }

    /// Create a new stop filter with custom stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a new stop filter from a list of stop words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop_words = words.into_iter().map(|s| s.into()).collect();
        Self::with_stop_words(stop_words)
    }

    /// Check if a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_stop_filter() {
        let filter = StopFilter::new();
        let tokens = vec![
            Token::new("je", 0),
            Token::new("veux", 1),
            Token::new("rédiger", 2),
            Token::new("une", 3),
            Token::new("lettre", 4),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "rédiger");
        assert_eq!(result[1].text, "lettre");
    }

    #[test]
    fn test_request_verbs_are_stopped() {
        let filter = StopFilter::new();
        for word in ["montre", "affiche", "ouvre", "lance", "veux", "donne"] {
            assert!(filter.is_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_elided_forms_are_stopped() {
        let filter = StopFilter::new();
        for word in ["j'ai", "c'est", "s'il", "d'une"] {
            assert!(filter.is_stop_word(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_content_words_survive() {
        let filter = StopFilter::new();
        for word in ["profil", "payé", "boulangerie", "mentions", "légales"] {
            assert!(!filter.is_stop_word(word), "{word} should not be stopped");
        }
    }

    #[test]
    fn test_custom_words() {
        let filter = StopFilter::from_words(vec!["euh", "bah"]);
        assert_eq!(filter.len(), 2);
        assert!(!filter.is_empty());

        let tokens = vec![Token::new("euh", 0), Token::new("profil", 1)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "profil");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(StopFilter::new().name(), "stop");
    }
}
