//! # coursefinder
//!
//! Rule-based intent parsing for course and training requests, plus deep
//! links into course-catalog search pages.
//!
//! ## Features
//!
//! - Keyword extraction through a small analysis pipeline
//! - Level and modality classification from ordered marker dictionaries
//! - Certificate, duration and price preference detection
//! - Up to four deduplicated query variants per request
//! - Search links for Coursera, Udemy, Simpliv and Educative

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod intent;
pub mod recommend;

pub mod prelude {
    pub use crate::config::FinderConfig;
    pub use crate::error::{CourseFinderError, Result};
    pub use crate::intent::{Level, Modality, ParsedIntent, parse_intent};
    pub use crate::recommend::{Mode, Platform, Recommendation, Recommender, Selection};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
