//! Whitespace tokenizer implementation.

use super::Tokenizer;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A tokenizer that splits text on whitespace runs.
///
/// Byte offsets recorded on each token point into the original text, so
/// repeated words keep their own locations.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut position = 0;
        let mut start: Option<usize> = None;

        for (idx, ch) in text.char_indices() {
            if ch.is_whitespace() {
                if let Some(word_start) = start.take() {
                    tokens.push(Token::with_offsets(
                        &text[word_start..idx],
                        position,
                        word_start,
                        idx,
                    ));
                    position += 1;
                }
            } else if start.is_none() {
                start = Some(idx);
            }
        }

        if let Some(word_start) = start {
            tokens.push(Token::with_offsets(
                &text[word_start..],
                position,
                word_start,
                text.len(),
            ));
        }

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenizer() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer
            .tokenize("montre  moi\tmon profil")
            .unwrap()
            .collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "montre");
        assert_eq!(tokens[1].text, "moi");
        assert_eq!(tokens[2].text, "mon");
        assert_eq!(tokens[3].text, "profil");
    }

    #[test]
    fn test_offsets_for_repeated_words() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("bla bla xyz").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].start_offset, 0);
        assert_eq!(tokens[0].end_offset, 3);
        assert_eq!(tokens[1].start_offset, 4);
        assert_eq!(tokens[1].end_offset, 7);
        assert_eq!(tokens[2].start_offset, 8);
        assert_eq!(tokens[2].end_offset, 11);
    }

    #[test]
    fn test_non_ascii_offsets() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<Token> = tokenizer.tokenize("payé 50 euros").unwrap().collect();

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].text, "payé");
        // "payé" is 5 bytes
        assert_eq!(tokens[0].end_offset, 5);
        assert_eq!(tokens[1].text, "50");
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_empty_and_whitespace_only() {
        let tokenizer = WhitespaceTokenizer::new();
        assert_eq!(tokenizer.tokenize("").unwrap().count(), 0);
        assert_eq!(tokenizer.tokenize("   \t\n").unwrap().count(), 0);
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
