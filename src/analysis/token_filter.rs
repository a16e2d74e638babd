//! Token filter implementations for token transformation.
//!
//! Filters receive a stream of tokens and produce a new stream. The keyword
//! pipeline chains them in this order:
//!
//! ```text
//! Tokenizer → Lowercase → Stop Words → Numeric → Length → Dedup → Limit
//! ```
//!
//! # Examples
//!
//! ```
//! use coursefinder::analysis::token_filter::Filter;
//! use coursefinder::analysis::token_filter::lowercase::LowercaseFilter;
//! use coursefinder::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello"), Token::new("WORLD")];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod dedup;
pub mod length;
pub mod limit;
pub mod lowercase;
pub mod numeric;
pub mod stop;

pub use dedup::DedupFilter;
pub use length::LengthFilter;
pub use limit::LimitFilter;
pub use lowercase::LowercaseFilter;
pub use numeric::NumericFilter;
pub use stop::StopFilter;
