//! Duplicate removal filter implementation.

use ahash::AHashSet;

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that keeps only the first occurrence of each token text.
#[derive(Clone, Debug, Default)]
pub struct DedupFilter;

impl DedupFilter {
    /// Create a new dedup filter.
    pub fn new() -> Self {
        DedupFilter
    }
}

impl Filter for DedupFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let mut seen = AHashSet::new();
        let kept: Vec<Token> = tokens
            .filter(|token| seen.insert(token.text.clone()))
            .collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "dedup"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let filter = DedupFilter::new();
        let tokens = vec![
            Token::new("python"),
            Token::new("pandas"),
            Token::new("python"),
            Token::new("numpy"),
            Token::new("pandas"),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 3);
        assert_eq!(result[0].text, "python");
        assert_eq!(result[1].text, "pandas");
        assert_eq!(result[2].text, "numpy");
    }
}
