//! Transcript analyzer for French voice commands.
//!
//! This analyzer implements the canonical normalization pipeline applied to
//! every transcript before fuzzy matching: whitespace tokenization, Unicode
//! lowercasing, a minimum-length check, and French stop word removal.
//!
//! # Pipeline
//!
//! 1. WhitespaceTokenizer
//! 2. LowercaseFilter
//! 3. LengthFilter (drops tokens shorter than 3 characters)
//! 4. StopFilter (default French stop words)
//!
//! # Examples
//!
//! ```
//! use portevoix::analysis::analyzer::{Analyzer, TranscriptAnalyzer};
//!
//! let analyzer = TranscriptAnalyzer::new();
//! let tokens: Vec<_> = analyzer
//!     .analyze("je veux rédiger une lettre pour la caf")
//!     .unwrap()
//!     .collect();
//!
//! // Pronouns, determiners, and request verbs are filtered out
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].text, "rédiger");
//! assert_eq!(tokens[1].text, "lettre");
//! assert_eq!(tokens[2].text, "caf");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::length::LengthFilter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::stop::StopFilter;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// Minimum token length in characters; shorter tokens are dropped.
pub const MIN_TOKEN_CHARS: usize = 3;

/// The canonical analyzer for French voice-command transcripts.
///
/// Produces the ordered token sequence the best-match selector queries with.
/// An empty output is valid and triggers the selector's full-phrase fallback.
pub struct TranscriptAnalyzer {
    inner: PipelineAnalyzer,
}

impl TranscriptAnalyzer {
    /// Create a new transcript analyzer with default settings.
    pub fn new() -> Self {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(LengthFilter::new(MIN_TOKEN_CHARS)))
            .add_filter(Arc::new(StopFilter::new()));

        TranscriptAnalyzer { inner: analyzer }
    }

    /// Create a transcript analyzer with a custom stop word list.
    pub fn with_stop_filter(stop_filter: StopFilter) -> Self {
        let tokenizer = Arc::new(WhitespaceTokenizer::new());
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(LengthFilter::new(MIN_TOKEN_CHARS)))
            .add_filter(Arc::new(stop_filter));

        TranscriptAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for TranscriptAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for TranscriptAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "transcript"
    }
}

impl std::fmt::Debug for TranscriptAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TranscriptAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_transcript_analyzer() {
        let analyzer = TranscriptAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("montre moi mon profil").unwrap().collect();

        // "montre", "moi", and "mon" are filtered out
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "profil");
    }

    #[test]
    fn test_short_and_numeric_tokens_dropped() {
        let analyzer = TranscriptAnalyzer::new();

        let tokens: Vec<Token> = analyzer
            .analyze("j'ai payé 50 euros pour la boulangerie")
            .unwrap()
            .collect();

        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["payé", "euros", "boulangerie"]);
    }

    #[test]
    fn test_noise_tokens_survive() {
        let analyzer = TranscriptAnalyzer::new();

        let tokens: Vec<Token> = analyzer
            .analyze("bla bla xyz incompréhensible")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 4);
    }

    #[test]
    fn test_stop_word_only_transcript_yields_empty() {
        let analyzer = TranscriptAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("montre moi tout").unwrap().collect();
        assert!(tokens.is_empty());

        let tokens: Vec<Token> = analyzer.analyze("").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let analyzer = TranscriptAnalyzer::new();

        let tokens: Vec<Token> = analyzer.analyze("OUVRE les Mentions").unwrap().collect();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "mentions");
    }

    #[test]
    fn test_custom_stop_filter() {
        let analyzer =
            TranscriptAnalyzer::with_stop_filter(StopFilter::from_words(vec!["mentions"]));

        let tokens: Vec<Token> = analyzer.analyze("ouvre les mentions").unwrap().collect();
        // "ouvre" survives here since the custom list replaces the default one
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].text, "ouvre");
    }

    #[test]
    fn test_analyzer_name() {
        assert_eq!(TranscriptAnalyzer::new().name(), "transcript");
    }
}
