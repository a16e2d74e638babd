//! Course-catalog platforms and their search deep links.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{CourseFinderError, Result};

/// Link returned for a platform identifier that is not recognized.
pub const PLACEHOLDER_URL: &str = "#";

/// A supported course-catalog provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(alias = "coursera")]
    Coursera,
    #[serde(alias = "udemy")]
    Udemy,
    #[serde(alias = "simpliv")]
    Simpliv,
    #[serde(alias = "educative")]
    Educative,
}

impl Platform {
    /// All platforms in display order.
    pub const ALL: [Platform; 4] = [
        Platform::Coursera,
        Platform::Udemy,
        Platform::Simpliv,
        Platform::Educative,
    ];

    /// Display name, also the identifier accepted by [`search_url`].
    pub fn name(&self) -> &'static str {
        match self {
            Platform::Coursera => "Coursera",
            Platform::Udemy => "Udemy",
            Platform::Simpliv => "Simpliv",
            Platform::Educative => "Educative",
        }
    }

    /// Search endpoint; the encoded query is appended directly.
    pub fn search_base(&self) -> &'static str {
        match self {
            Platform::Coursera => "https://www.coursera.org/search?query=",
            Platform::Udemy => "https://www.udemy.com/courses/search/?q=",
            Platform::Simpliv => "https://www.simplivlearning.com/search?q=",
            Platform::Educative => "https://www.educative.io/search?q=",
        }
    }

    /// Whether this provider lists live, instructor-led trainings.
    pub fn offers_live_training(&self) -> bool {
        matches!(self, Platform::Simpliv)
    }

    /// Deep link into this platform's search page for `query`.
    pub fn search_url(&self, query: &str) -> String {
        format!("{}{}", self.search_base(), encode_query(query))
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Platform {
    type Err = CourseFinderError;

    fn from_str(s: &str) -> Result<Self> {
        Platform::ALL
            .into_iter()
            .find(|platform| platform.name() == s)
            .ok_or_else(|| CourseFinderError::invalid_argument(format!("unknown platform: {s}")))
    }
}

/// Encode text as a query-string value (`application/x-www-form-urlencoded`).
///
/// Spaces become `+`; reserved characters are percent-escaped.
pub fn encode_query(query: &str) -> String {
    form_urlencoded::byte_serialize(query.as_bytes()).collect()
}

/// Deep link for a platform identifier, or [`PLACEHOLDER_URL`] if the
/// identifier is not exactly one of the supported platform names.
///
/// ```
/// use coursefinder::recommend::search_url;
///
/// assert_eq!(
///     search_url("Udemy", "python for finance"),
///     "https://www.udemy.com/courses/search/?q=python+for+finance"
/// );
/// assert_eq!(search_url("Skillshare", "python"), "#");
/// ```
pub fn search_url(platform: &str, query: &str) -> String {
    match platform.parse::<Platform>() {
        Ok(platform) => platform.search_url(query),
        Err(_) => PLACEHOLDER_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_value(url: &str) -> &str {
        url.split_once('=').map(|(_, value)| value).unwrap_or("")
    }

    #[test]
    fn test_known_platform_templates() {
        assert_eq!(
            search_url("Coursera", "data science"),
            "https://www.coursera.org/search?query=data+science"
        );
        assert!(search_url("Udemy", "python for finance")
            .starts_with("https://www.udemy.com/courses/search/?q="));
        assert_eq!(
            search_url("Simpliv", "sql"),
            "https://www.simplivlearning.com/search?q=sql"
        );
        assert_eq!(
            search_url("Educative", "system design"),
            "https://www.educative.io/search?q=system+design"
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        for platform in Platform::ALL {
            let url = platform.search_url("R&D for c++ / c#? 100%");
            let value = query_value(&url);
            assert!(!value.contains(' '), "{url}");
            assert!(!value.contains('&'), "{url}");
            assert!(!value.contains('#'), "{url}");
            assert!(!value.contains('?'), "{url}");
            assert_eq!(value, "R%26D+for+c%2B%2B+%2F+c%23%3F+100%25");
        }
    }

    #[test]
    fn test_unicode_is_percent_encoded() {
        assert_eq!(encode_query("café"), "caf%C3%A9");
    }

    #[test]
    fn test_unknown_platform_placeholder() {
        assert_eq!(search_url("LinkedIn Learning", "excel"), PLACEHOLDER_URL);
        assert_eq!(search_url("", "excel"), PLACEHOLDER_URL);
    }

    #[test]
    fn test_platform_ids_match_exactly() {
        assert_eq!("Udemy".parse::<Platform>().unwrap(), Platform::Udemy);
        assert!("udemy".parse::<Platform>().is_err());
        assert!(" Educative ".parse::<Platform>().is_err());
        assert!("udacity".parse::<Platform>().is_err());

        assert_eq!(search_url("udemy", "python"), PLACEHOLDER_URL);
        assert_eq!(search_url("COURSERA", "python"), PLACEHOLDER_URL);
        assert_ne!(search_url("Coursera", "python"), PLACEHOLDER_URL);
    }

    #[test]
    fn test_only_simpliv_offers_live_training() {
        let live: Vec<Platform> = Platform::ALL
            .into_iter()
            .filter(Platform::offers_live_training)
            .collect();
        assert_eq!(live, vec![Platform::Simpliv]);
    }
}
