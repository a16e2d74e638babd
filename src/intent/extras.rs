//! Auxiliary preference detection (certificate, duration, price).

use crate::intent::types::Extras;

/// Extras key for certificate requirements.
pub const CERTIFICATE: &str = "certificate";
/// Extras key for duration preference.
pub const DURATION: &str = "duration";
/// Extras key for price preference.
pub const PRICE: &str = "price";
/// Extras key written only by an explicit level override.
pub const LEVEL: &str = "level";

/// Value of [`CERTIFICATE`] when a certificate is wanted.
pub const VALUE_REQUIRED: &str = "required";
/// Value of [`DURATION`] when a short format is wanted.
pub const VALUE_SHORT: &str = "short";
/// Value of [`PRICE`] when free offerings are preferred.
pub const VALUE_FREE_PREFERRED: &str = "free_preferred";

const CERTIFICATE_CUES: &[&str] = &["certificate"];
const SHORT_CUES: &[&str] = &["short", "crash", "weekend"];
const FREE_CUES: &[&str] = &["free", "no cost", "open"];

/// Detect auxiliary preferences from literal, case-insensitive cues.
///
/// Each cue is independent; a preference that is not mentioned is simply
/// absent from the map.
///
/// ```
/// use coursefinder::intent::detect_extras;
///
/// let extras = detect_extras("Free weekend crash course");
/// assert_eq!(extras.get("duration").map(String::as_str), Some("short"));
/// assert_eq!(extras.get("price").map(String::as_str), Some("free_preferred"));
/// assert!(!extras.contains_key("certificate"));
/// ```
pub fn detect_extras(text: &str) -> Extras {
    let lowered = text.to_lowercase();
    let mentions = |cues: &[&str]| cues.iter().any(|cue| lowered.contains(cue));

    let mut extras = Extras::new();
    if mentions(CERTIFICATE_CUES) {
        extras.insert(CERTIFICATE.to_string(), VALUE_REQUIRED.to_string());
    }
    if mentions(SHORT_CUES) {
        extras.insert(DURATION.to_string(), VALUE_SHORT.to_string());
    }
    if mentions(FREE_CUES) {
        extras.insert(PRICE.to_string(), VALUE_FREE_PREFERRED.to_string());
    }
    extras
}
