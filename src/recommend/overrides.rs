//! Merging user overrides into an auto-detected intent.

use crate::intent::{
    CERTIFICATE, DURATION, LEVEL, Modality, PRICE, ParsedIntent, VALUE_FREE_PREFERRED,
    VALUE_REQUIRED, VALUE_SHORT,
};
use crate::recommend::platform::Platform;
use crate::recommend::selection::{Mode, Selection};

/// Caveat shown when onsite trainings are requested.
pub const ONSITE_NOTICE: &str =
    "No onsite training directory is available; showing online platforms instead.";

/// Notice shown when the search is narrowed to live-training providers.
pub const LIVE_TRAINING_NOTICE: &str =
    "Live online trainings are only listed on Simpliv; other platforms were skipped.";

/// Derive the effective intent: `intent` with the user's overrides applied.
///
/// Set overrides always win over auto-detection. The mode's modality is
/// used only when nothing was detected. `intent` itself is left untouched.
pub fn apply_overrides(intent: &ParsedIntent, selection: &Selection) -> ParsedIntent {
    let mut extras = intent.extras.clone();
    let mut level = intent.level;

    if let Some(explicit) = selection.level {
        level = Some(explicit);
        extras.insert(LEVEL.to_string(), explicit.as_str().to_string());
    }
    if selection.certificate {
        extras.insert(CERTIFICATE.to_string(), VALUE_REQUIRED.to_string());
    }
    if selection.short_format {
        extras.insert(DURATION.to_string(), VALUE_SHORT.to_string());
    }
    if selection.free_only {
        extras.insert(PRICE.to_string(), VALUE_FREE_PREFERRED.to_string());
    }

    ParsedIntent {
        topic: intent.topic.clone(),
        subtopics: intent.subtopics.clone(),
        skills: intent.skills.clone(),
        level,
        modality: intent.modality.or_else(|| selection.mode.modality()),
        extras,
        keywords: intent.keywords.clone(),
    }
}

/// Search terms associated with a modality.
pub fn nudge_terms(modality: Modality) -> &'static [&'static str] {
    match modality {
        Modality::OnlineCourse => &["self-paced", "online"],
        Modality::OnlineTraining => &["live", "instructor-led", "workshop"],
        Modality::OnsiteTraining => &["onsite", "classroom", "in-person"],
    }
}

/// Append the modality's search terms to `keywords`, skipping ones already present.
pub fn nudge_keywords(keywords: &[String], modality: Option<Modality>) -> Vec<String> {
    let mut nudged = keywords.to_vec();
    if let Some(modality) = modality {
        for term in nudge_terms(modality) {
            if !nudged.iter().any(|keyword| keyword == term) {
                nudged.push(term.to_string());
            }
        }
    }
    nudged
}

/// Platforms to link to for this selection, plus any notice to show.
///
/// `fallback` is used when the user selected no platform.
pub fn effective_platforms(
    selection: &Selection,
    fallback: &[Platform],
) -> (Vec<Platform>, Option<&'static str>) {
    match selection.mode {
        Mode::OnlineTrainings => (
            Platform::ALL
                .into_iter()
                .filter(Platform::offers_live_training)
                .collect(),
            Some(LIVE_TRAINING_NOTICE),
        ),
        Mode::OnsiteTrainings => (Platform::ALL.to_vec(), Some(ONSITE_NOTICE)),
        Mode::Auto | Mode::OnlineCourses => {
            let source: &[Platform] = if selection.platforms.is_empty() {
                fallback
            } else {
                &selection.platforms
            };
            let mut platforms = Vec::with_capacity(source.len());
            for platform in source {
                if !platforms.contains(platform) {
                    platforms.push(*platform);
                }
            }
            (platforms, None)
        }
    }
}
