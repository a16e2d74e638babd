//! Configuration for the recommendation pipeline.
//!
//! Settings are read from a JSON file; every field is optional and falls
//! back to its default.
//!
//! ```json
//! {
//!   "max_keywords": 8,
//!   "max_variants": 3,
//!   "default_platforms": ["Coursera", "Udemy"]
//! }
//! ```

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{CourseFinderError, Result};
use crate::intent::DEFAULT_MAX_KEYWORDS;
use crate::recommend::{MAX_VARIANTS, Platform};

/// Configuration for [`crate::recommend::Recommender`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Maximum number of keywords kept per request.
    pub max_keywords: usize,
    /// Maximum number of query variants, clamped to `1..=4`.
    pub max_variants: usize,
    /// Platforms used when the user selects none.
    pub default_platforms: Vec<Platform>,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            max_keywords: DEFAULT_MAX_KEYWORDS,
            max_variants: MAX_VARIANTS,
            default_platforms: Platform::ALL.to_vec(),
        }
    }
}

impl FinderConfig {
    /// Parse and validate a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: FinderConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Check that the configuration can drive the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.max_keywords == 0 {
            return Err(CourseFinderError::config("max_keywords must be at least 1"));
        }
        if self.max_variants == 0 {
            return Err(CourseFinderError::config("max_variants must be at least 1"));
        }
        if self.default_platforms.is_empty() {
            return Err(CourseFinderError::config(
                "default_platforms must name at least one platform",
            ));
        }
        Ok(())
    }

    /// `max_variants` clamped to the supported range.
    pub fn variant_limit(&self) -> usize {
        self.max_variants.clamp(1, MAX_VARIANTS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::default();
        assert_eq!(config.max_keywords, 10);
        assert_eq!(config.variant_limit(), 4);
        assert_eq!(config.default_platforms.len(), 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = FinderConfig::from_json(r#"{"max_keywords": 6}"#).unwrap();
        assert_eq!(config.max_keywords, 6);
        assert_eq!(config.max_variants, 4);
        assert_eq!(config.default_platforms, Platform::ALL.to_vec());
    }

    #[test]
    fn test_variant_limit_is_clamped() {
        let config = FinderConfig::from_json(r#"{"max_variants": 12}"#).unwrap();
        assert_eq!(config.variant_limit(), 4);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(FinderConfig::from_json(r#"{"max_keywords": 0}"#).is_err());
        assert!(FinderConfig::from_json(r#"{"max_variants": 0}"#).is_err());
        assert!(FinderConfig::from_json(r#"{"default_platforms": []}"#).is_err());
        assert!(FinderConfig::from_json(r#"{"default_platforms": ["Skillshare"]}"#).is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"max_variants": 2, "default_platforms": ["udemy", "Educative"]}}"#
        )
        .unwrap();

        let config = FinderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.max_variants, 2);
        assert_eq!(
            config.default_platforms,
            vec![Platform::Udemy, Platform::Educative]
        );
    }

    #[test]
    fn test_missing_file() {
        let result = FinderConfig::from_file("/nonexistent/coursefinder.json");
        assert!(matches!(result, Err(CourseFinderError::Io(_))));
    }
}
