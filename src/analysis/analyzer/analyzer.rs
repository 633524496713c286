//! Core analyzer trait definition.
//!
//! This module defines the [`Analyzer`] trait, which is the main interface for
//! transcript analysis in Portevoix. Analyzers combine tokenizers and filters
//! to transform a raw transcript into match queries.
//!
//! # Role in Analysis Pipeline
//!
//! Analyzers serve as the complete text processing pipeline:
//!
//! ```text
//! Raw Transcript → Analyzer → Token Stream → Fuzzy Matcher
//!                     ↓
//!                 Tokenizer
//!                     ↓
//!                 Filter 1
//!                     ↓
//!                 Filter N
//! ```
//!
//! # Available Implementations
//!
//! - [`TranscriptAnalyzer`](super::transcript::TranscriptAnalyzer) - The
//!   canonical French pipeline used by the interpreter
//! - [`PipelineAnalyzer`](super::pipeline::PipelineAnalyzer) - Custom
//!   tokenizer + filter chains
//!
//! # Examples
//!
//! Using the built-in analyzer:
//!
//! ```
//! use portevoix::analysis::analyzer::{Analyzer, TranscriptAnalyzer};
//!
//! let analyzer = TranscriptAnalyzer::new();
//! let tokens: Vec<_> = analyzer.analyze("montre moi mon profil").unwrap().collect();
//!
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].text, "profil");
//! ```
//!
//! Implementing a custom analyzer:
//!
//! ```
//! use portevoix::analysis::analyzer::Analyzer;
//! use portevoix::analysis::token::TokenStream;
//! use portevoix::error::Result;
//!
//! struct MyAnalyzer;
//!
//! impl Analyzer for MyAnalyzer {
//!     fn analyze(&self, text: &str) -> Result<TokenStream> {
//!         // Custom analysis logic here
//!         Ok(Box::new(std::iter::empty()))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analyzer"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// This is the core trait that all analyzers must implement. Analyzers are
/// responsible for the complete text processing pipeline, from raw transcript
/// to match queries.
///
/// # Thread Safety
///
/// The trait requires `Send + Sync` so that a single analyzer instance can be
/// shared across threads by concurrent interpreter calls.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    ///
    /// This is the main method that performs the complete analysis pipeline,
    /// including tokenization and all configured filters.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}
