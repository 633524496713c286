//! The interpreter: one transcript in, one interpretation out.
//!
//! Wires the analysis pipeline, the best-match selector, entity extraction
//! and dispatch together. Interpretation never fails: an utterance that
//! matches nothing still produces a rejection feedback, so callers have
//! exactly one message to surface per utterance.
//!
//! # Examples
//!
//! ```
//! use portevoix::interpreter::Interpreter;
//!
//! let interpreter = Interpreter::new();
//! let interpretation = interpreter.interpret("montre moi mon profil");
//!
//! assert!(interpretation.is_accepted());
//! assert_eq!(interpretation.command().unwrap().path, "/profile");
//! assert_eq!(interpretation.feedback.message, "Ouverture du profil");
//! ```

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::{Analyzer, Token, TranscriptAnalyzer};
use crate::catalog::IntentCatalog;
use crate::dispatch::{Feedback, NavigationCommand, dispatch, rejection};
use crate::matching::BestMatchSelector;

/// What happened to an utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// A command was accepted; the router should follow it.
    Navigate(NavigationCommand),
    /// Nothing matched well enough.
    Rejected,
}

/// The retained match, kept for diagnostics even on rejection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Id of the best-scoring intent.
    pub intent_id: String,

    /// Its dissimilarity score.
    pub score: f64,

    /// The query string that produced the score: a token, or the full
    /// phrase when the fallback fired.
    pub query: String,
}

/// Everything the interpreter has to say about one utterance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interpretation {
    /// The utterance, exactly as received.
    pub transcript: String,

    /// Navigation command or rejection.
    pub outcome: Outcome,

    /// The sentence to surface to the user.
    pub feedback: Feedback,

    /// Best candidate seen, if any token or the full phrase retained one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_outcome: Option<MatchOutcome>,
}

impl Interpretation {
    fn rejected(transcript: &str, match_outcome: Option<MatchOutcome>) -> Self {
        Interpretation {
            transcript: transcript.to_string(),
            outcome: Outcome::Rejected,
            feedback: rejection(transcript),
            match_outcome,
        }
    }

    /// Whether the utterance produced a navigation command.
    pub fn is_accepted(&self) -> bool {
        matches!(self.outcome, Outcome::Navigate(_))
    }

    /// The navigation command, when accepted.
    pub fn command(&self) -> Option<&NavigationCommand> {
        match &self.outcome {
            Outcome::Navigate(command) => Some(command),
            Outcome::Rejected => None,
        }
    }
}

/// Maps transcripts onto catalog intents.
///
/// Stateless across calls and `Send + Sync`: one instance can serve
/// concurrent callers without locking.
pub struct Interpreter {
    catalog: IntentCatalog,
    analyzer: Arc<dyn Analyzer>,
    selector: BestMatchSelector,
}

impl Interpreter {
    /// Interpreter over the built-in catalog with the canonical French
    /// analysis pipeline.
    pub fn new() -> Self {
        Interpreter::with_catalog(IntentCatalog::builtin())
    }

    /// Interpreter over a custom catalog.
    pub fn with_catalog(catalog: IntentCatalog) -> Self {
        Interpreter {
            catalog,
            analyzer: Arc::new(TranscriptAnalyzer::new()),
            selector: BestMatchSelector::new(),
        }
    }

    /// The active catalog.
    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    /// Interpret one transcript.
    ///
    /// Never fails: a transcript that matches nothing, or that analysis
    /// reduces to nothing, comes back as a rejection with its feedback
    /// message already composed.
    pub fn interpret(&self, transcript: &str) -> Interpretation {
        let tokens: Vec<Token> = self
            .analyzer
            .analyze(transcript)
            .map(|stream| stream.collect())
            .unwrap_or_default();

        log::debug!("analyzed {transcript:?} into {} token(s)", tokens.len());

        let Some(selection) = self.selector.select(&self.catalog, &tokens, transcript) else {
            return Interpretation::rejected(transcript, None);
        };

        let match_outcome = MatchOutcome {
            intent_id: selection.intent.id.clone(),
            score: selection.score,
            query: selection.query.clone(),
        };

        if !self.selector.is_accepted(selection.score) {
            log::debug!(
                "best candidate '{}' at {:.3} is over the acceptance threshold",
                match_outcome.intent_id,
                match_outcome.score
            );
            return Interpretation::rejected(transcript, Some(match_outcome));
        }

        let params = selection
            .intent
            .extractor
            .map(|extractor| extractor.run(transcript))
            .unwrap_or_default();

        let command = dispatch(selection.intent, &params);
        let feedback = command.feedback.clone();

        log::debug!(
            "{transcript:?} matched intent '{}' at {:.3} via query {:?}",
            match_outcome.intent_id,
            match_outcome.score,
            match_outcome.query
        );

        Interpretation {
            transcript: transcript.to_string(),
            outcome: Outcome::Navigate(command),
            feedback,
            match_outcome: Some(match_outcome),
        }
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Interpreter::new()
    }
}

impl fmt::Debug for Interpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interpreter")
            .field("catalog_len", &self.catalog.len())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_exact_keyword() {
        let interpreter = Interpreter::new();
        let interpretation = interpreter.interpret("montre moi mon profil");

        assert!(interpretation.is_accepted());

        let command = interpretation.command().unwrap();
        assert_eq!(command.path, "/profile");
        assert_eq!(command.href(), "/profile");
        assert_eq!(interpretation.feedback.message, "Ouverture du profil");

        let match_outcome = interpretation.match_outcome.unwrap();
        assert_eq!(match_outcome.intent_id, "profile");
        assert_eq!(match_outcome.score, 0.0);
        assert_eq!(match_outcome.query, "profil");
    }

    #[test]
    fn test_interpret_rejects_noise() {
        let interpreter = Interpreter::new();
        let interpretation = interpreter.interpret("bla bla xyz incompréhensible");

        assert!(!interpretation.is_accepted());
        assert_eq!(interpretation.outcome, Outcome::Rejected);
        assert_eq!(
            interpretation.feedback.message,
            "Je n'ai pas compris : \"bla bla xyz incompréhensible\""
        );

        // A best candidate existed, it just did not clear the threshold.
        let match_outcome = interpretation.match_outcome.unwrap();
        assert!(match_outcome.score >= 0.5);
    }

    #[test]
    fn test_interpret_without_any_candidate() {
        let interpreter = Interpreter::new();
        let interpretation = interpreter.interpret("www");

        assert!(!interpretation.is_accepted());
        assert!(interpretation.match_outcome.is_none());
    }

    #[test]
    fn test_interpret_is_deterministic() {
        let interpreter = Interpreter::new();
        let first = interpreter.interpret("j'ai payé 50 euros pour la boulangerie");
        let second = interpreter.interpret("j'ai payé 50 euros pour la boulangerie");

        assert_eq!(first, second);
    }

    #[test]
    fn test_interpreter_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Interpreter>();
    }

    #[test]
    fn test_rejection_serializes_as_plain_tag() {
        let interpreter = Interpreter::new();
        let interpretation = interpreter.interpret("www");
        let json = serde_json::to_string(&interpretation).unwrap();

        assert!(json.contains("\"outcome\":\"rejected\""));
        assert!(!json.contains("match_outcome"));
    }

    #[test]
    fn test_navigation_serializes_with_command() {
        let interpreter = Interpreter::new();
        let interpretation = interpreter.interpret("ouvre les mentions légales");
        let json = serde_json::to_string(&interpretation).unwrap();

        assert!(json.contains("\"navigate\""));
        assert!(json.contains("/legal/mentions"));
    }
}
