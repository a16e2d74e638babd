//! Analyzers combine a tokenizer and a chain of filters.
//!
//! ```text
//! Raw Text → Char Filters → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! - [`PipelineAnalyzer`] - Custom tokenizer + filter chains
//! - [`KeywordAnalyzer`] - The course-request keyword pipeline

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

pub mod keyword;
pub mod pipeline;

pub use keyword::KeywordAnalyzer;
pub use pipeline::PipelineAnalyzer;
