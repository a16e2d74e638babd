//! User-selected overrides coming from the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::intent::{Level, Modality};
use crate::recommend::platform::Platform;

/// Search mode picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Detect modality from the text.
    #[default]
    Auto,
    /// Self-paced online courses.
    OnlineCourses,
    /// Live online trainings.
    OnlineTrainings,
    /// Onsite trainings.
    OnsiteTrainings,
}

impl Mode {
    /// Display label.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Auto => "Auto-detect",
            Mode::OnlineCourses => "Online courses",
            Mode::OnlineTrainings => "Online trainings",
            Mode::OnsiteTrainings => "Onsite trainings",
        }
    }

    /// Modality implied by this mode, if any.
    pub fn modality(&self) -> Option<Modality> {
        match self {
            Mode::Auto => None,
            Mode::OnlineCourses => Some(Modality::OnlineCourse),
            Mode::OnlineTrainings => Some(Modality::OnlineTraining),
            Mode::OnsiteTrainings => Some(Modality::OnsiteTraining),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Everything the user picked next to the free-text query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selection {
    /// Search mode.
    pub mode: Mode,
    /// Platforms to search; empty means the configured defaults.
    pub platforms: Vec<Platform>,
    /// Explicit level; `None` means "Any".
    pub level: Option<Level>,
    /// Require a certificate.
    pub certificate: bool,
    /// Prefer short formats.
    pub short_format: bool,
    /// Prefer free offerings.
    pub free_only: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            platforms: Platform::ALL.to_vec(),
            level: None,
            certificate: false,
            short_format: false,
            free_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_modality_mapping() {
        assert_eq!(Mode::Auto.modality(), None);
        assert_eq!(Mode::OnlineCourses.modality(), Some(Modality::OnlineCourse));
        assert_eq!(
            Mode::OnlineTrainings.modality(),
            Some(Modality::OnlineTraining)
        );
        assert_eq!(
            Mode::OnsiteTrainings.modality(),
            Some(Modality::OnsiteTraining)
        );
    }

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.mode, Mode::Auto);
        assert_eq!(selection.platforms, Platform::ALL.to_vec());
        assert!(!selection.certificate && !selection.short_format && !selection.free_only);
    }

    #[test]
    fn test_selection_from_partial_json() {
        let selection: Selection =
            serde_json::from_str(r#"{"mode": "online_trainings", "free_only": true}"#).unwrap();
        assert_eq!(selection.mode, Mode::OnlineTrainings);
        assert!(selection.free_only);
        assert_eq!(selection.platforms.len(), 4);
    }
}
