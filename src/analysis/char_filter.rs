//! Char filter implementations for text normalization.
//!
//! Char filters pre-process the raw text before it reaches the tokenizer.

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text, returning the transformed text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod whitespace;

pub use whitespace::{WhitespaceCollapseCharFilter, normalize_whitespace};
