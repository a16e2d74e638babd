//! Case folding for keywords.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Folds token text to lowercase so "Python" and "PYTHON" dedup together.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    pub fn new() -> Self {
        LowercaseFilter
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            let folded = token.text.to_lowercase();
            token.with_text(folded)
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn fold(words: &[&str]) -> Vec<String> {
        let tokens: Vec<Token> = words.iter().map(|w| Token::new(*w)).collect();
        LowercaseFilter::new()
            .filter(Box::new(tokens.into_iter()))
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_folds_course_terms() {
        assert_eq!(
            fold(&["DevOps", "C++", "Économie", "sql"]),
            vec!["devops", "c++", "économie", "sql"]
        );
    }

    #[test]
    fn test_folds_titlecase_letters() {
        // U+01C5 is titlecase, not uppercase, but still folds to U+01C6.
        assert_eq!(fold(&["ǅungla", "ǆungla"]), vec!["ǆungla", "ǆungla"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
