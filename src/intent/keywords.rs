//! Keyword extraction.

use std::sync::LazyLock;

use log::warn;

use crate::analysis::analyzer::{Analyzer, KeywordAnalyzer};
use crate::analysis::tokenizer::RegexTokenizer;

/// Default number of keywords kept by [`extract_keywords`].
pub const DEFAULT_TOP_K: usize = 8;

/// Returned when nothing survives filtering, so every later stage has
/// something to build a query from.
pub const FALLBACK_KEYWORDS: [&str; 4] = ["online", "course", "training", "learning"];

static KEYWORD_TOKENIZER: LazyLock<RegexTokenizer> = LazyLock::new(RegexTokenizer::default);

/// Extract up to `top_k` unique lowercase keywords in first-occurrence order.
///
/// Stop words, purely numeric tokens and tokens of two characters or fewer
/// are dropped. If nothing is left, [`FALLBACK_KEYWORDS`] is returned
/// (truncated when `top_k` is below its length). A `top_k` of zero is
/// treated as one.
///
/// ```
/// use coursefinder::intent::{extract_keywords, FALLBACK_KEYWORDS};
///
/// assert_eq!(
///     extract_keywords("Docker and Kubernetes for DevOps engineers", 8),
///     vec!["docker", "kubernetes", "devops", "engineers"]
/// );
/// assert_eq!(extract_keywords("for the and", 8), FALLBACK_KEYWORDS.to_vec());
/// ```
pub fn extract_keywords(text: &str, top_k: usize) -> Vec<String> {
    let top_k = top_k.max(1);
    let analyzer = KeywordAnalyzer::with_tokenizer(KEYWORD_TOKENIZER.clone(), top_k);

    let keywords: Vec<String> = match analyzer.analyze(text) {
        Ok(tokens) => tokens.map(|token| token.text).collect(),
        Err(e) => {
            warn!("keyword analysis failed, using fallback vocabulary: {e}");
            Vec::new()
        }
    };

    if keywords.is_empty() {
        return FALLBACK_KEYWORDS
            .iter()
            .take(top_k)
            .map(|s| s.to_string())
            .collect();
    }

    keywords
}
