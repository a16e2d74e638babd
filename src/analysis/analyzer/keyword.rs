//! Keyword analyzer for course requests.
//!
//! # Pipeline
//!
//! 1. WhitespaceCollapseCharFilter
//! 2. RegexTokenizer (letters, digits, `-`, `+`, `/`, `#`)
//! 3. LowercaseFilter
//! 4. StopFilter (course-request stop words)
//! 5. NumericFilter
//! 6. LengthFilter (at least 3 characters)
//! 7. DedupFilter
//! 8. LimitFilter (`top_k`)
//!
//! # Examples
//!
//! ```
//! use coursefinder::analysis::analyzer::Analyzer;
//! use coursefinder::analysis::analyzer::keyword::KeywordAnalyzer;
//!
//! let analyzer = KeywordAnalyzer::new(8).unwrap();
//! let tokens: Vec<_> = analyzer
//!     .analyze("Kubernetes for DevOps, kubernetes in 2024")
//!     .unwrap()
//!     .map(|t| t.text)
//!     .collect();
//!
//! assert_eq!(tokens, vec!["kubernetes", "devops"]);
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::char_filter::WhitespaceCollapseCharFilter;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{
    DedupFilter, LengthFilter, LimitFilter, LowercaseFilter, NumericFilter, StopFilter,
};
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// Tokens of this many characters or fewer are noise.
pub const MAX_NOISE_LEN: usize = 2;

/// The keyword extraction pipeline, bounded to `top_k` unique tokens.
#[derive(Debug, Clone)]
pub struct KeywordAnalyzer {
    inner: PipelineAnalyzer,
}

impl KeywordAnalyzer {
    /// Create a keyword analyzer that keeps at most `top_k` tokens.
    pub fn new(top_k: usize) -> Result<Self> {
        Ok(Self::with_tokenizer(RegexTokenizer::new()?, top_k))
    }

    /// Create a keyword analyzer around an already compiled tokenizer.
    pub fn with_tokenizer(tokenizer: RegexTokenizer, top_k: usize) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(tokenizer))
            .add_char_filter(Arc::new(WhitespaceCollapseCharFilter::new()))
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
            .add_filter(Arc::new(NumericFilter::new()))
            .add_filter(Arc::new(LengthFilter::new(MAX_NOISE_LEN + 1)))
            .add_filter(Arc::new(DedupFilter::new()))
            .add_filter(Arc::new(LimitFilter::new(top_k)))
            .with_name("keyword");

        KeywordAnalyzer { inner: analyzer }
    }
}

impl Analyzer for KeywordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(top_k: usize, text: &str) -> Vec<String> {
        KeywordAnalyzer::new(top_k)
            .unwrap()
            .analyze(text)
            .unwrap()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn test_filters_noise() {
        assert_eq!(
            analyze(8, "An intro to AI and ML with C++ in 2025"),
            vec!["intro", "c++"]
        );
    }

    #[test]
    fn test_respects_top_k() {
        let tokens = analyze(3, "rust tokio axum serde clap rayon");
        assert_eq!(tokens, vec!["rust", "tokio", "axum"]);
    }

    #[test]
    fn test_limit_applies_after_dedup() {
        let tokens = analyze(2, "Rust rust RUST tokio");
        assert_eq!(tokens, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_name() {
        assert_eq!(KeywordAnalyzer::new(5).unwrap().name(), "keyword");
    }
}
