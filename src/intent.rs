//! Rule-based intent parsing for course requests.
//!
//! Turns free text such as "live instructor-led kubernetes bootcamp with a
//! certificate" into a [`ParsedIntent`] without any learned model:
//!
//! ```text
//! raw text → normalize → keywords ─┐
//!                      → level     ├→ ParsedIntent
//!                      → modality  │
//!                      → extras   ─┘
//! ```
//!
//! # Example
//!
//! ```
//! use coursefinder::intent::{parse_intent, Level, Modality};
//!
//! let intent = parse_intent("Intro to Rust for beginners, live cohort with certificate");
//!
//! assert_eq!(intent.level, Some(Level::Beginner));
//! assert_eq!(intent.modality, Some(Modality::OnlineTraining));
//! assert_eq!(intent.extras.get("certificate").map(String::as_str), Some("required"));
//! assert_eq!(intent.keywords[0], "intro");
//! ```

mod classifier;
mod extras;
mod keywords;
mod parser;
mod types;

pub use classifier::{LEVEL_MARKERS, MODALITY_MARKERS, extract_level, extract_modality};
pub use extras::{
    CERTIFICATE, DURATION, LEVEL, PRICE, VALUE_FREE_PREFERRED, VALUE_REQUIRED, VALUE_SHORT,
    detect_extras,
};
pub use keywords::{DEFAULT_TOP_K, FALLBACK_KEYWORDS, extract_keywords};
pub use parser::{DEFAULT_MAX_KEYWORDS, IntentParser, parse_intent, title_case};
pub use types::{Extras, Level, Modality, ParsedIntent};
