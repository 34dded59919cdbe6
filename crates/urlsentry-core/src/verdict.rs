//! Verdict derivation: raw classifier output to a user-facing decision.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label the classifier uses for benign URLs. Every other label is malicious.
pub const SAFE_LABEL: i64 = 1;

/// Confidence reported when class probabilities are unavailable.
pub const FALLBACK_CONFIDENCE: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Safe,
    Malicious,
}

impl Verdict {
    pub fn from_label(label: i64) -> Self {
        if label == SAFE_LABEL {
            Verdict::Safe
        } else {
            Verdict::Malicious
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Safe => "safe",
            Verdict::Malicious => "malicious",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Safe => "Safe URL",
            Verdict::Malicious => "Malicious URL",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Verdict with its confidence percentage (0-100) and display message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerdictResult {
    pub verdict: Verdict,
    pub confidence: f64,
    pub message: String,
}

/// Derive the verdict for `label`.
///
/// `probabilities` is the per-class distribution when the classifier could
/// produce one; `None` (or an empty slice) yields the 50% fallback.
pub fn derive_verdict(label: i64, probabilities: Option<&[f64]>) -> VerdictResult {
    let verdict = Verdict::from_label(label);
    let confidence = probabilities
        .and_then(|p| p.iter().copied().filter(|x| !x.is_nan()).reduce(f64::max))
        .map(|max| round2((max * 100.0).clamp(0.0, 100.0)))
        .unwrap_or(FALLBACK_CONFIDENCE);

    VerdictResult {
        verdict,
        confidence,
        message: verdict.message().to_string(),
    }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
