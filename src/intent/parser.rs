//! Intent assembly.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::normalize_whitespace;
use crate::intent::classifier::{extract_level, extract_modality};
use crate::intent::extras::detect_extras;
use crate::intent::keywords::extract_keywords;
use crate::intent::types::ParsedIntent;

/// Default keyword cap used when assembling an intent.
pub const DEFAULT_MAX_KEYWORDS: usize = 10;

const TOPIC_WORDS: usize = 2;
const SKILLS_END: usize = 6;

/// Assembles a [`ParsedIntent`] from raw text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntentParser {
    /// Maximum number of keywords kept per request.
    pub max_keywords: usize,
}

impl Default for IntentParser {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }
}

impl IntentParser {
    /// Create a parser keeping at most `max_keywords` keywords.
    pub fn new(max_keywords: usize) -> Self {
        Self { max_keywords }
    }

    /// Parse free text into an intent.
    ///
    /// Never fails: blank text yields an intent built from the fallback
    /// vocabulary with no level, modality or extras.
    pub fn parse(&self, text: &str) -> ParsedIntent {
        let normalized = normalize_whitespace(text);
        let keywords = extract_keywords(&normalized, self.max_keywords);

        let topic = keywords
            .iter()
            .take(TOPIC_WORDS)
            .map(String::as_str)
            .map(title_case)
            .collect::<Vec<_>>()
            .join(" ");
        let skills = keywords
            .iter()
            .skip(TOPIC_WORDS)
            .take(SKILLS_END - TOPIC_WORDS)
            .cloned()
            .collect();

        let intent = ParsedIntent {
            topic,
            subtopics: Vec::new(),
            skills,
            level: extract_level(&normalized),
            modality: extract_modality(&normalized),
            extras: detect_extras(&normalized),
            keywords,
        };
        debug!("parsed intent: {intent:?}");
        intent
    }
}

/// Parse free text with the default parser settings.
pub fn parse_intent(text: &str) -> ParsedIntent {
    IntentParser::default().parse(text)
}

/// Uppercase every letter that follows a non-letter, lowercase the rest.
///
/// ```
/// use coursefinder::intent::title_case;
///
/// assert_eq!(title_case("instructor-led"), "Instructor-Led");
/// assert_eq!(title_case("c++"), "C++");
/// ```
pub fn title_case(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut previous_is_letter = false;
    for c in word.chars() {
        if c.is_alphabetic() {
            if previous_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(c);
            previous_is_letter = false;
        }
    }
    result
}
