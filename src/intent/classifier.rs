//! Level and modality classification by marker phrases.
//!
//! Each dictionary is an ordered list of `(category, markers)` pairs. The
//! lowercased text is scanned category by category and the first category
//! with any marker occurring as a substring wins. Matching ignores word
//! boundaries, so "mid" also fires inside "middleware"; that looseness is
//! kept as is.

use log::debug;

use crate::intent::types::{Level, Modality};

/// Level markers, in precedence order.
pub const LEVEL_MARKERS: &[(Level, &[&str])] = &[
    (
        Level::Beginner,
        &[
            "beginner",
            "intro",
            "basic",
            "fundamental",
            "foundation",
            "getting started",
            "novice",
            "newbie",
            "from scratch",
            "zero to",
            "entry level",
            "entry-level",
        ],
    ),
    (
        Level::Intermediate,
        &[
            "intermediate",
            "mid",
            "practitioner",
            "some experience",
            "next level",
            "level up",
        ],
    ),
    (
        Level::Advanced,
        &[
            "advanced",
            "expert",
            "deep dive",
            "deep-dive",
            "in-depth",
            "mastery",
            "master",
            "senior",
        ],
    ),
];

/// Modality markers, in precedence order.
pub const MODALITY_MARKERS: &[(Modality, &[&str])] = &[
    (
        Modality::OnlineCourse,
        &[
            "self-paced",
            "self paced",
            "on-demand",
            "on demand",
            "recorded",
            "mooc",
            "video course",
            "online course",
        ],
    ),
    (
        Modality::OnlineTraining,
        &[
            "live",
            "instructor-led",
            "instructor led",
            "cohort",
            "bootcamp",
            "boot camp",
            "virtual classroom",
            "webinar",
            "workshop",
            "online training",
        ],
    ),
    (
        Modality::OnsiteTraining,
        &[
            "onsite",
            "on-site",
            "on site",
            "in-person",
            "in person",
            "classroom",
            "face-to-face",
            "face to face",
        ],
    ),
];

/// Return the first category whose markers occur in `text`.
fn first_match<T: Copy>(text: &str, dictionary: &[(T, &[&str])]) -> Option<T> {
    let lowered = text.to_lowercase();
    dictionary
        .iter()
        .find(|(_, markers)| markers.iter().any(|marker| lowered.contains(marker)))
        .map(|(category, _)| *category)
}

/// Infer the proficiency level of a request.
///
/// ```
/// use coursefinder::intent::{extract_level, Level};
///
/// assert_eq!(extract_level("Intro to machine learning for beginners"), Some(Level::Beginner));
/// assert_eq!(extract_level("kubernetes networking"), None);
/// ```
pub fn extract_level(text: &str) -> Option<Level> {
    let level = first_match(text, LEVEL_MARKERS);
    debug!("level for {text:?}: {level:?}");
    level
}

/// Infer the delivery modality of a request.
///
/// ```
/// use coursefinder::intent::{extract_modality, Modality};
///
/// assert_eq!(
///     extract_modality("live instructor-led cohort bootcamp"),
///     Some(Modality::OnlineTraining)
/// );
/// ```
pub fn extract_modality(text: &str) -> Option<Modality> {
    let modality = first_match(text, MODALITY_MARKERS);
    debug!("modality for {text:?}: {modality:?}");
    modality
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_examples() {
        assert_eq!(
            extract_level("Intro to machine learning for beginners"),
            Some(Level::Beginner)
        );
        assert_eq!(
            extract_level("INTERMEDIATE SQL window functions"),
            Some(Level::Intermediate)
        );
        assert_eq!(
            extract_level("deep dive into rust async"),
            Some(Level::Advanced)
        );
        assert_eq!(extract_level("rust async"), None);
        assert_eq!(extract_level(""), None);
    }

    #[test]
    fn test_first_category_wins() {
        // beginner is declared before advanced
        assert_eq!(
            extract_level("advanced topics for beginners"),
            Some(Level::Beginner)
        );
        // online_course is declared before online_training
        assert_eq!(
            extract_modality("self-paced or live, either works"),
            Some(Modality::OnlineCourse)
        );
    }

    #[test]
    fn test_substring_matching_has_no_word_boundaries() {
        assert_eq!(
            extract_level("middleware design in go"),
            Some(Level::Intermediate)
        );
        assert_eq!(
            extract_modality("how to deliver presentations"),
            Some(Modality::OnlineTraining)
        );
    }

    #[test]
    fn test_modality_examples() {
        assert_eq!(
            extract_modality("live instructor-led cohort bootcamp"),
            Some(Modality::OnlineTraining)
        );
        assert_eq!(
            extract_modality("In-Person workshop"),
            Some(Modality::OnlineTraining)
        );
        assert_eq!(
            extract_modality("onsite team training in Berlin"),
            Some(Modality::OnsiteTraining)
        );
        assert_eq!(
            extract_modality("recorded lectures on statistics"),
            Some(Modality::OnlineCourse)
        );
        assert_eq!(extract_modality("statistics"), None);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "Advanced live kubernetes cohort";
        let first = (extract_level(text), extract_modality(text));
        for _ in 0..10 {
            assert_eq!((extract_level(text), extract_modality(text)), first);
        }
    }
}
