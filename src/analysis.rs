//! Text analysis for course requests.
//!
//! Tokenization, filtering and the analysis pipeline that turns free text
//! into the keyword list the intent parser works from.

pub mod analyzer;
pub mod char_filter;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use char_filter::normalize_whitespace;
