//! Length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that removes tokens shorter than a minimum number of characters.
///
/// Lengths are counted in `char`s, not bytes, so "été" counts as three.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_chars: usize,
}

impl LengthFilter {
    /// Create a new length filter that keeps tokens of at least `min_chars`
    /// characters.
    pub fn new(min_chars: usize) -> Self {
        LengthFilter { min_chars }
    }

    /// Get the minimum length.
    pub fn min_chars(&self) -> usize {
        self.min_chars
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let min_chars = self.min_chars;
        let filtered_tokens: Vec<Token> = tokens
            .filter(|token| token.text.chars().count() >= min_chars)
            .collect();

        Ok(Box::new(filtered_tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new(3);
        let tokens = vec![
            Token::new("va", 0),
            Token::new("au", 1),
            Token::new("dashboard", 2),
            Token::new("50", 3),
        ];
        let token_stream = Box::new(tokens.into_iter());

        let result: Vec<Token> = filter.filter(token_stream).unwrap().collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "dashboard");
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // "été" is 3 characters but 5 bytes
        let filter = LengthFilter::new(3);
        let tokens = vec![Token::new("été", 0)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "été");
    }

    #[test]
    fn test_exact_boundary_kept() {
        let filter = LengthFilter::new(3);
        let tokens = vec![Token::new("caf", 0), Token::new("tv", 1)];
        let result: Vec<Token> = filter
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .collect();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "caf");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LengthFilter::new(3).name(), "length");
    }
}
