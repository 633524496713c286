//! Token types and utilities for transcript analysis.
//!
//! This module defines the core data structures for representing transcript
//! tokens, which are the fundamental units that flow through the analysis
//! pipeline.
//!
//! # Core Types
//!
//! - [`Token`] - A single analyzed token with text, position, and offsets
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! Creating a simple token:
//!
//! ```
//! use portevoix::analysis::token::Token;
//!
//! let token = Token::new("profil", 0);
//! assert_eq!(token.text, "profil");
//! assert_eq!(token.position, 0);
//! ```
//!
//! Creating a token with offsets:
//!
//! ```
//! use portevoix::analysis::token::Token;
//!
//! let token = Token::with_offsets("profil", 1, 15, 21);
//! assert_eq!(token.text, "profil");
//! assert_eq!(token.start_offset, 15);
//! assert_eq!(token.end_offset, 21);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
///
/// This is the fundamental unit that flows through the analysis pipeline.
/// It carries the text content and the location of that text in the original
/// transcript.
///
/// # Fields
///
/// - `text` - The token's text content
/// - `position` - Position in the token stream (0-based)
/// - `start_offset` / `end_offset` - Byte offsets in the original transcript
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the original token stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
        }
    }

    /// Get the length of the token text in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Clone this token with updated text.
    pub fn with_text<S: Into<String>>(&self, text: S) -> Self {
        let mut token = self.clone();
        token.text = text.into();
        token
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter())
    }
}
