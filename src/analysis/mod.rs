//! Transcript analysis module for Portevoix.
//!
//! This module provides the text analysis functionality applied to raw
//! transcripts before intent matching: tokenization, filtering, and
//! analysis pipelines.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

// Re-export commonly used types
pub use analyzer::*;
pub use token::*;
pub use token_filter::*;
pub use tokenizer::*;
