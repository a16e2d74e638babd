//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::{CourseFinderError, Result};

/// Runs of letters, digits, and the joiners that keep terms like `c++`,
/// `c#`, `ci/cd` and `instructor-led` in one piece.
pub const KEYWORD_PATTERN: &str = r"[\p{L}\p{N}\-+/#]+";

/// A regex-based tokenizer that extracts every match of its pattern.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the keyword pattern.
    pub fn new() -> Result<Self> {
        Self::with_pattern(KEYWORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| CourseFinderError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
        })
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = self
            .pattern
            .find_iter(text)
            .map(|mat| Token::new(mat.as_str()))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(tokenizer: &RegexTokenizer, input: &str) -> Vec<String> {
        tokenizer
            .tokenize(input)
            .unwrap()
            .map(|token| token.text)
            .collect()
    }

    #[test]
    fn test_splits_on_whitespace() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "hello  world\n"), vec!["hello", "world"]);
    }

    #[test]
    fn test_keeps_joiner_characters() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(
            texts(&tokenizer, "C++, C# and CI/CD, instructor-led!"),
            vec!["C++", "C#", "and", "CI/CD", "instructor-led"]
        );
    }

    #[test]
    fn test_splits_on_dots_and_punctuation() {
        let tokenizer = RegexTokenizer::new().unwrap();
        assert_eq!(texts(&tokenizer, "node.js (react)"), vec!["node", "js", "react"]);
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(RegexTokenizer::with_pattern("[unclosed").is_err());
    }

    #[test]
    fn test_tokenizer_name() {
        assert_eq!(RegexTokenizer::new().unwrap().name(), "regex");
    }
}
