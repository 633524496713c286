//! Lowercase filter implementation.
//!
//! This module provides a filter that converts all token text to lowercase,
//! which is essential for case-insensitive matching against catalog keywords.
//!
//! # Examples
//!
//! ```
//! use portevoix::analysis::token_filter::Filter;
//! use portevoix::analysis::token_filter::lowercase::LowercaseFilter;
//! use portevoix::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Montre", 0), Token::new("PROFIL", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "montre");
//! assert_eq!(filtered[1].text, "profil");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// Uses Unicode-aware lowercasing, so accented characters such as "É" map to
/// "é". Token positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let filtered_tokens = tokens
            .map(|token| {
                let lowered = token.text.to_lowercase();
                token.with_text(lowered)
            })
            .collect::<Vec<_>>();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}
