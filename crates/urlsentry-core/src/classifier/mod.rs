//! Classifier capability and artifact loading.
//!
//! The prediction service only depends on the [`Classifier`] trait; any model
//! family can sit behind it. [`ForestModel`] is the bundled implementation.

mod forest;

pub use forest::{DecisionTree, ForestModel, TreeNode};

use std::path::Path;
use std::sync::Arc;

use crate::checksum;
use crate::error::{Error, Result};
use crate::features::FeatureRow;

/// A trained binary URL classifier.
///
/// Implementations are read-only after loading and are shared across
/// concurrent requests.
pub trait Classifier: Send + Sync {
    /// Short model family name (for logs and status output).
    fn name(&self) -> &'static str;

    /// Predicted class label (`1` = safe by convention).
    fn predict(&self, row: &FeatureRow) -> Result<i64>;

    /// Per-class probabilities. Classifiers without calibrated outputs keep
    /// the default, and callers fall back to a neutral confidence.
    fn predict_proba(&self, _row: &FeatureRow) -> Result<Vec<f64>> {
        Err(Error::ProbabilityUnsupported)
    }
}

/// Load a model artifact, verifying its SHA-256 first when a pin is given.
pub fn load_classifier(path: &Path, expected_sha256: Option<&str>) -> Result<Arc<dyn Classifier>> {
    if let Some(expected) = expected_sha256 {
        checksum::verify_sha256(path, expected)?;
    }
    let model = ForestModel::from_path(path)?;
    tracing::info!(
        path = %path.display(),
        trees = model.trees.len(),
        classes = ?model.classes,
        "model loaded"
    );
    Ok(Arc::new(model))
}

/// Like [`load_classifier`], but a missing or broken artifact leaves the
/// service in its "model not loaded" state instead of aborting startup.
pub fn load_optional(path: &Path, expected_sha256: Option<&str>) -> Option<Arc<dyn Classifier>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "model not found");
        return None;
    }
    match load_classifier(path, expected_sha256) {
        Ok(model) => Some(model),
        Err(e) => {
            tracing::warn!(path = %path.display(), "error loading model: {}", e);
            None
        }
    }
}
