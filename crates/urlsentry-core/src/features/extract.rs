//! Feature extraction over a normalized URL.

use once_cell::sync::Lazy;
use regex::Regex;

use super::schema::{SPECIAL_CHARS, SUSPICIOUS_WORDS};
use super::vector::FeatureVector;
use crate::url_model::{normalize_url, NormalizedUrl};

// Dotted quad anywhere in the authority.
static IPV4_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,3}(?:\.\d{1,3}){3}\b").unwrap());

// Trailing label of the authority; a port suffix defeats the match.
static TLD_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.([a-zA-Z0-9-]+)$").unwrap());

/// Normalize `raw` and extract its features.
///
/// This is the single extraction entry point for both the prediction
/// service and training-matrix exports.
pub fn extract_features(raw: &str) -> FeatureVector {
    extract_normalized(&normalize_url(raw))
}

/// Extract features from an already normalized URL.
pub fn extract_normalized(url: &NormalizedUrl) -> FeatureVector {
    let full = url.as_str();
    let lower = full.to_lowercase();
    let domain = url.netloc();

    let features = FeatureVector {
        url_length: count(full.chars().count()),
        num_dots: count(full.matches('.').count()),
        num_hyphens: count(full.matches('-').count()),
        num_digits: count(full.chars().filter(|c| c.is_ascii_digit()).count()),
        num_special_chars: count(full.chars().filter(|c| SPECIAL_CHARS.contains(c)).count()),
        has_https: flag(lower.starts_with("https")),
        num_subdirs: count(url.path().matches('/').count().saturating_sub(1)),
        num_params: count(url.query().matches('=').count()),
        has_ip_address: flag(IPV4_PATTERN.is_match(domain)),
        tld_length: tld_length(domain),
        contains_suspicious_words: flag(SUSPICIOUS_WORDS.iter().any(|w| lower.contains(w))),
    };

    tracing::debug!(url = full, ?features, "extracted url features");
    features
}

fn tld_length(domain: &str) -> u32 {
    TLD_PATTERN
        .captures(domain)
        .and_then(|c| c.get(1))
        .map_or(0, |m| count(m.as_str().len()))
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn flag(b: bool) -> u32 {
    u32::from(b)
}
