//! Prediction service: raw URL in, structured verdict out.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::classifier::Classifier;
use crate::error::{Error, Result};
use crate::features::{extract_features, FeatureRow};
use crate::verdict::{derive_verdict, Verdict};

/// Response for one classified URL.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// The submitted URL, trimmed.
    pub url: String,
    /// Raw class label from the classifier.
    pub prediction: i64,
    pub verdict: Verdict,
    pub confidence: f64,
    pub message: String,
}

/// Liveness/readiness summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub message: String,
    pub model_loaded: bool,
}

/// Holds the classifier loaded at startup (if any) and runs the full
/// normalize → extract → classify → verdict chain per request.
///
/// Cheap to clone; clones share the same read-only classifier.
#[derive(Clone, Default)]
pub struct Predictor {
    classifier: Option<Arc<dyn Classifier>>,
}

impl Predictor {
    pub fn new(classifier: Option<Arc<dyn Classifier>>) -> Self {
        Self { classifier }
    }

    pub fn with_classifier(classifier: Arc<dyn Classifier>) -> Self {
        Self::new(Some(classifier))
    }

    pub fn is_ready(&self) -> bool {
        self.classifier.is_some()
    }

    pub fn status(&self) -> ServiceStatus {
        ServiceStatus {
            message: "API is running".to_string(),
            model_loaded: self.is_ready(),
        }
    }

    /// Classify one raw URL.
    ///
    /// Fails with [`Error::ModelUnavailable`] before any extraction when no
    /// classifier is loaded, and with [`Error::EmptyInput`] for blank input.
    /// A classifier that cannot report probabilities still yields a verdict
    /// at 50% confidence.
    pub fn predict(&self, raw: &str) -> Result<Prediction> {
        let classifier = self.classifier.as_ref().ok_or(Error::ModelUnavailable)?;

        let url = raw.trim();
        if url.is_empty() {
            return Err(Error::EmptyInput);
        }

        let features = extract_features(url);
        let row = FeatureRow::from_pairs(features.iter());

        let label = classifier.predict(&row)?;
        let probabilities = match classifier.predict_proba(&row) {
            Ok(p) => Some(p),
            Err(e) => {
                tracing::warn!(model = classifier.name(), "probabilities unavailable: {}", e);
                None
            }
        };
        let result = derive_verdict(label, probabilities.as_deref());
        tracing::debug!(url, label, verdict = %result.verdict, confidence = result.confidence, "classified url");

        Ok(Prediction {
            url: url.to_string(),
            prediction: label,
            verdict: result.verdict,
            confidence: result.confidence,
            message: result.message,
        })
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("model", &self.classifier.as_ref().map(|c| c.name()))
            .finish()
    }
}
