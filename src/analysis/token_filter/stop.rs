//! Stop filter implementation.
//!
//! Removes function words and the filler phrases people type around the
//! actual subject of a course request ("looking for a hands-on weekend
//! course...").
//!
//! # Examples
//!
//! ```
//! use coursefinder::analysis::token_filter::Filter;
//! use coursefinder::analysis::token_filter::stop::StopFilter;
//! use coursefinder::analysis::token::Token;
//!
//! let filter = StopFilter::new();
//! let tokens = vec![
//!     Token::new("the"),
//!     Token::new("kubernetes"),
//!     Token::new("course")
//! ];
//!
//! let result: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 1);
//! assert_eq!(result[0].text, "kubernetes");
//! ```

use std::collections::HashSet;
use std::sync::{Arc, LazyLock};

use crate::analysis::token::{Token, TokenStream};
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Stop words for course requests.
///
/// English function words followed by request filler. Matching is exact
/// against already-lowercased tokens.
const DEFAULT_STOP_WORDS: &[&str] = &[
    // function words
    "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
    "are", "around", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each",
    "either", "else", "etc", "even", "ever", "every", "few", "for", "from", "further", "get",
    "gets", "getting", "give", "got", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "itself", "just", "let", "like", "may", "me", "might", "mine", "more", "most", "much", "must",
    "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "one", "only", "or",
    "other", "our", "ours", "ourselves", "out", "over", "own", "per", "please", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "within", "without",
    "would", "yet", "you", "your", "yours", "yourself", "yourselves",
    // request filler
    "want", "wants", "wanted", "need", "needs", "looking", "look", "find", "search", "searching",
    "help", "someone", "something", "anything", "really", "good", "best", "great", "nice",
    "course", "courses", "class", "classes", "training", "trainings", "program", "programs",
    "programme", "crash", "weekend", "weekends", "hands-on", "handson", "practical", "learn",
    "learning-focused", "study", "teach", "teaches", "taught", "using", "use", "based", "related",
    "including", "include", "includes", "focus", "focused", "kind", "type", "sort", "short",
    "quick", "free", "cheap", "online", "offline",
];

/// Default stop words as a HashSet.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_STOP_WORDS.iter().map(|&s| s.to_string()).collect()
});

/// A filter that removes stop words from the token stream.
#[derive(Clone, Debug)]
pub struct StopFilter {
    stop_words: Arc<HashSet<String>>,
}

impl StopFilter {
    /// Create a new stop filter with the default course-request stop words.
    pub fn new() -> Self {
        Self::with_stop_words(DEFAULT_STOP_WORDS_SET.clone())
    }

    /// Create a stop filter with a custom set of stop words.
    pub fn with_stop_words(stop_words: HashSet<String>) -> Self {
        StopFilter {
            stop_words: Arc::new(stop_words),
        }
    }

    /// Create a stop filter from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_stop_words(words.into_iter().map(Into::into).collect())
    }

    /// Check whether a word is a stop word.
    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }
}

impl Default for StopFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let kept: Vec<Token> = tokens
            .filter(|token| !self.is_stop_word(&token.text))
            .collect();

        Ok(Box::new(kept.into_iter()))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}
