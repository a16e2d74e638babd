//! Token types for text analysis.
//!
//! A [`Token`] is the unit that flows through the keyword pipeline: the
//! tokenizer emits them in text order and each filter transforms or drops
//! them in turn.
//!
//! # Examples
//!
//! ```
//! use coursefinder::analysis::token::Token;
//!
//! let token = Token::new("Rust").with_text("rust");
//! assert_eq!(token.text, "rust");
//! assert_eq!(token.char_len(), 4);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token represents a single unit of text after tokenization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,
}

impl Token {
    /// Create a new token.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Token { text: text.into() }
    }

    /// Replace the text of this token.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }

    /// Length of the token text in characters.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A stream of tokens flowing between tokenizer and filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
