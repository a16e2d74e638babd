//! Query variants, platform deep links and the recommendation assembler.
//!
//! ```text
//! ParsedIntent ─ overrides ─→ effective intent ─ nudging ─→ variants ─→ links
//! ```
//!
//! # Example
//!
//! ```
//! use coursefinder::recommend::{recommend, Mode, Platform, Selection};
//!
//! let selection = Selection {
//!     mode: Mode::OnlineTrainings,
//!     ..Selection::default()
//! };
//! let recommendation = recommend("Kubernetes for platform engineers", &selection).unwrap();
//!
//! // Live trainings are only listed on one provider.
//! assert!(recommendation
//!     .groups
//!     .iter()
//!     .all(|group| group.links.len() == 1 && group.links[0].platform == Platform::Simpliv));
//! ```

mod assembler;
mod overrides;
mod platform;
mod selection;
mod variants;

pub use assembler::{
    Chip, PlatformLink, Recommendation, Recommender, VariantLinks, intent_chips, recommend,
};
pub use overrides::{apply_overrides, effective_platforms, nudge_keywords, nudge_terms};
pub use platform::{PLACEHOLDER_URL, Platform, encode_query, search_url};
pub use selection::{Mode, Selection};
pub use variants::{MAX_VARIANTS, make_variants, make_variants_with_limit};
