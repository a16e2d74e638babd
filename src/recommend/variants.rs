//! Query variant generation.
//!
//! A single phrasing can under- or over-constrain a provider's search
//! engine, so each request is searched with up to four phrasings.

use ahash::AHashSet;

use crate::intent::ParsedIntent;

/// Maximum number of query variants.
pub const MAX_VARIANTS: usize = 4;

/// Build up to [`MAX_VARIANTS`] distinct phrasings of the same request.
///
/// Candidates, in order:
/// 1. topic followed by skills (skipped when the topic is empty)
/// 2. all keywords
/// 3. all keywords followed by the level (skipped without a level)
/// 4. the trimmed raw text
///
/// Candidates equal after trimming and case-folding to an earlier one are
/// dropped, as are blank ones.
///
/// ```
/// use coursefinder::intent::parse_intent;
/// use coursefinder::recommend::make_variants;
///
/// let text = "Advanced Rust async programming";
/// let variants = make_variants(&parse_intent(text), text);
///
/// assert_eq!(variants, vec![
///     "Advanced Rust async programming",
///     "advanced rust async programming advanced",
/// ]);
/// ```
pub fn make_variants(intent: &ParsedIntent, raw_text: &str) -> Vec<String> {
    make_variants_with_limit(intent, raw_text, MAX_VARIANTS)
}

/// [`make_variants`] with a lower cap; `limit` is clamped to `1..=4`.
pub fn make_variants_with_limit(intent: &ParsedIntent, raw_text: &str, limit: usize) -> Vec<String> {
    let limit = limit.clamp(1, MAX_VARIANTS);
    let mut candidates = Vec::with_capacity(MAX_VARIANTS);

    if !intent.topic.is_empty() {
        let mut parts = vec![intent.topic.as_str()];
        parts.extend(intent.skills.iter().map(String::as_str));
        candidates.push(parts.join(" "));
    }

    let keywords = intent.keywords.join(" ");
    if let Some(level) = intent.level {
        candidates.push(keywords.clone());
        candidates.push(format!("{keywords} {}", level.as_str()));
    } else {
        candidates.push(keywords);
    }

    candidates.push(raw_text.trim().to_string());

    let mut seen = AHashSet::new();
    candidates
        .into_iter()
        .filter(|candidate| {
            let key = candidate.trim().to_lowercase();
            !key.is_empty() && seen.insert(key)
        })
        .take(limit)
        .collect()
}
