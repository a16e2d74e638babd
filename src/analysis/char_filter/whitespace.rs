//! Whitespace normalization.
//!
//! # Examples
//!
//! ```
//! use coursefinder::analysis::char_filter::normalize_whitespace;
//!
//! assert_eq!(normalize_whitespace("  rust\t\n for   beginners "), "rust for beginners");
//! assert_eq!(normalize_whitespace(" \n\t "), "");
//! ```

use super::CharFilter;

/// Collapse every run of whitespace (spaces, tabs, newlines) into a single
/// space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Char filter wrapper around [`normalize_whitespace`].
#[derive(Clone, Debug, Default)]
pub struct WhitespaceCollapseCharFilter;

impl WhitespaceCollapseCharFilter {
    /// Create a new whitespace collapsing char filter.
    pub fn new() -> Self {
        WhitespaceCollapseCharFilter
    }
}

impl CharFilter for WhitespaceCollapseCharFilter {
    fn filter(&self, input: &str) -> String {
        normalize_whitespace(input)
    }

    fn name(&self) -> &'static str {
        "whitespace_collapse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(
            normalize_whitespace("Data\tscience\n\nwith   python"),
            "Data science with python"
        );
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize_whitespace("   sql  "), "sql");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace("\r\n \t"), "");
    }

    #[test]
    fn test_char_filter_impl() {
        let filter = WhitespaceCollapseCharFilter::new();
        assert_eq!(filter.filter(" a  b "), "a b");
        assert_eq!(filter.name(), "whitespace_collapse");
    }
}
