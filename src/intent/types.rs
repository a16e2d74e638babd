//! Common types for intent parsing.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CourseFinderError, Result};

/// Auxiliary preferences keyed by preference name ("certificate", "duration", ...).
pub type Extras = BTreeMap<String, String>;

/// Proficiency level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

impl Level {
    /// All levels in declaration order.
    pub const ALL: [Level; 3] = [Level::Beginner, Level::Intermediate, Level::Advanced];

    /// Machine name, as used in query variants and extras.
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Beginner => "beginner",
            Level::Intermediate => "intermediate",
            Level::Advanced => "advanced",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Level::Beginner => "Beginner",
            Level::Intermediate => "Intermediate",
            Level::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = CourseFinderError;

    fn from_str(s: &str) -> Result<Self> {
        Level::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CourseFinderError::invalid_argument(format!("unknown level: {s}")))
    }
}

/// Delivery mode of a course or training.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Self-paced online course.
    OnlineCourse,
    /// Live, instructor-led online training.
    OnlineTraining,
    /// In-person training.
    OnsiteTraining,
}

impl Modality {
    /// Machine name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::OnlineCourse => "online_course",
            Modality::OnlineTraining => "online_training",
            Modality::OnsiteTraining => "onsite_training",
        }
    }

    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Modality::OnlineCourse => "Online course",
            Modality::OnlineTraining => "Online training",
            Modality::OnsiteTraining => "Onsite training",
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured interpretation of a free-text course request.
///
/// Built fresh for every request. Overrides never mutate an existing intent;
/// they derive a new one (see [`crate::recommend::apply_overrides`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntent {
    /// Title-cased phrase made of the first one or two keywords.
    pub topic: String,
    /// Reserved for finer topic breakdown; always empty.
    pub subtopics: Vec<String>,
    /// Keywords at positions 2 through 5.
    pub skills: Vec<String>,
    /// Detected or overridden proficiency level.
    pub level: Option<Level>,
    /// Detected or mode-derived modality; `None` means any.
    pub modality: Option<Modality>,
    /// Auxiliary preferences.
    pub extras: Extras,
    /// Unique lowercase keywords in first-occurrence order.
    pub keywords: Vec<String>,
}

impl ParsedIntent {
    /// Derive a copy of this intent with a different keyword list.
    ///
    /// Topic and skills are left as they are.
    pub fn with_keywords(&self, keywords: Vec<String>) -> Self {
        ParsedIntent {
            keywords,
            ..self.clone()
        }
    }

    /// Whether an extras preference is present.
    pub fn has_extra(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }
}
