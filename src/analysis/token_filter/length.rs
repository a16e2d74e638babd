//! Minimum length filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that drops tokens shorter than a minimum character count.
#[derive(Clone, Debug)]
pub struct LengthFilter {
    min_len: usize,
}

impl LengthFilter {
    /// Create a new length filter keeping tokens of at least `min_len` characters.
    pub fn new(min_len: usize) -> Self {
        LengthFilter { min_len }
    }

    /// Get the minimum length.
    pub fn min_len(&self) -> usize {
        self.min_len
    }
}

impl Filter for LengthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| token.char_len() >= self.min_len)
            .collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "length"
    }
}
