//! Recommendation assembly: overrides, variants and the link matrix.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::config::FinderConfig;
use crate::error::{CourseFinderError, Result};
use crate::intent::{IntentParser, LEVEL, ParsedIntent, title_case};
use crate::recommend::overrides::{apply_overrides, effective_platforms, nudge_keywords};
use crate::recommend::platform::Platform;
use crate::recommend::selection::Selection;
use crate::recommend::variants::make_variants_with_limit;

/// A label/value pair summarizing one aspect of the intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chip {
    pub label: String,
    pub value: String,
}

impl Chip {
    fn new<L: Into<String>, V: Into<String>>(label: L, value: V) -> Self {
        Chip {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// One platform's deep link for a query variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformLink {
    pub platform: Platform,
    pub url: String,
}

/// A query variant with a link for every effective platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantLinks {
    pub variant: String,
    pub links: Vec<PlatformLink>,
}

/// Everything the presentation layer needs to render one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// The normalized query text.
    pub query: String,
    /// Intent as detected from the text alone.
    pub detected: ParsedIntent,
    /// Intent after the user's overrides.
    pub effective: ParsedIntent,
    /// Summary of the effective intent.
    pub chips: Vec<Chip>,
    /// Caveats about the platform set.
    pub notices: Vec<String>,
    /// Platforms the links point to, in order.
    pub platforms: Vec<Platform>,
    /// Variant → platform → URL matrix.
    pub groups: Vec<VariantLinks>,
}

/// Drives the full pipeline for one request at a time.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    config: FinderConfig,
    parser: IntentParser,
}

impl Recommender {
    /// Create a recommender from a configuration.
    pub fn new(config: FinderConfig) -> Self {
        let parser = IntentParser::new(config.max_keywords);
        Self { config, parser }
    }

    /// Parse a request without applying any overrides.
    ///
    /// Blank text is rejected with [`CourseFinderError::EmptyQuery`].
    pub fn parse(&self, text: &str) -> Result<ParsedIntent> {
        let query = require_query(text)?;
        Ok(self.parser.parse(&query))
    }

    /// Run the full pipeline for `text` under `selection`.
    ///
    /// Returns [`CourseFinderError::EmptyQuery`] for blank text instead of
    /// producing fallback-only results.
    pub fn recommend(&self, text: &str, selection: &Selection) -> Result<Recommendation> {
        let query = require_query(text)?;

        let detected = self.parser.parse(&query);
        let effective = apply_overrides(&detected, selection);

        let search_intent =
            effective.with_keywords(nudge_keywords(&effective.keywords, effective.modality));
        let variants =
            make_variants_with_limit(&search_intent, text.trim(), self.config.variant_limit());

        let (platforms, notice) = effective_platforms(selection, &self.config.default_platforms);
        debug!("{} mode: variants {variants:?} across {platforms:?}", selection.mode);

        let groups: Vec<VariantLinks> = variants
            .into_iter()
            .map(|variant| {
                let links = platforms
                    .iter()
                    .map(|platform| PlatformLink {
                        platform: *platform,
                        url: platform.search_url(&variant),
                    })
                    .collect();
                VariantLinks { variant, links }
            })
            .collect();

        info!(
            "built {} variant(s) x {} platform(s) for {:?}",
            groups.len(),
            platforms.len(),
            query
        );

        Ok(Recommendation {
            chips: intent_chips(&effective),
            notices: notice.map(str::to_string).into_iter().collect(),
            query,
            detected,
            effective,
            platforms,
            groups,
        })
    }
}

/// Whitespace-normalized `text`, or `EmptyQuery` when nothing is left.
fn require_query(text: &str) -> Result<String> {
    let query = crate::analysis::normalize_whitespace(text);
    if query.is_empty() {
        warn!("empty query submitted, nothing to search for");
        return Err(CourseFinderError::EmptyQuery);
    }
    Ok(query)
}

/// Run the full pipeline with the default configuration.
pub fn recommend(text: &str, selection: &Selection) -> Result<Recommendation> {
    Recommender::default().recommend(text, selection)
}

/// Summary chips for an intent: topic, skills, level, modality, then extras.
pub fn intent_chips(intent: &ParsedIntent) -> Vec<Chip> {
    let mut chips = Vec::new();
    if !intent.topic.is_empty() {
        chips.push(Chip::new("Topic", intent.topic.clone()));
    }
    if !intent.skills.is_empty() {
        chips.push(Chip::new("Skills", intent.skills.join(", ")));
    }
    chips.push(Chip::new(
        "Level",
        intent.level.map_or("Any", |level| level.label()),
    ));
    chips.push(Chip::new(
        "Modality",
        intent.modality.map_or("Any", |modality| modality.label()),
    ));
    for (key, value) in &intent.extras {
        if key == LEVEL {
            continue;
        }
        chips.push(Chip::new(title_case(key), humanize(value)));
    }
    chips
}

/// "free_preferred" → "Free preferred"
fn humanize(value: &str) -> String {
    let spaced = value.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
