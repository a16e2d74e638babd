//! Keyword budget filter.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Keeps the first `limit` tokens of the stream.
#[derive(Clone, Debug)]
pub struct LimitFilter {
    limit: usize,
}

impl LimitFilter {
    /// Create a filter that keeps at most `limit` tokens.
    pub fn new(limit: usize) -> Self {
        LimitFilter { limit }
    }
}

impl Filter for LimitFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens.take(self.limit).collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "limit"
    }
}
