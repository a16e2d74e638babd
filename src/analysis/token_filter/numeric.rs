//! Numeric token filter implementation.

use super::Filter;

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// A filter that drops tokens made up only of digits ("2024", "101").
///
/// Mixed tokens such as "3d" or "web3" are kept.
#[derive(Clone, Debug, Default)]
pub struct NumericFilter;

impl NumericFilter {
    /// Create a new numeric filter.
    pub fn new() -> Self {
        NumericFilter
    }

    /// Whether `text` consists only of numeric characters.
    pub fn is_numeric(text: &str) -> bool {
        !text.is_empty() && text.chars().all(char::is_numeric)
    }
}

impl Filter for NumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| !Self::is_numeric(&token.text))
            .collect();
        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "numeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_filter() {
        let filter = NumericFilter::new();
        let tokens = vec![
            Token::new("2024"),
            Token::new("web3"),
            Token::new("101"),
            Token::new("3d"),
        ];

        let result: Vec<Token> = filter.filter(Box::new(tokens.into_iter())).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].text, "web3");
        assert_eq!(result[1].text, "3d");
    }

    #[test]
    fn test_is_numeric() {
        assert!(NumericFilter::is_numeric("42"));
        assert!(!NumericFilter::is_numeric("4-2"));
        assert!(!NumericFilter::is_numeric(""));
    }
}
