//! Error type shared by the prediction pipeline.

use thiserror::Error;

/// Errors surfaced by the core. Normalization and feature extraction never
/// produce one of these; they only come from the classifier boundary, the
/// input edges (empty URL, QR payload, upload type) and artifact/dataset I/O.
#[derive(Debug, Error)]
pub enum Error {
    /// No classifier was loaded at startup; the service is not ready.
    #[error("model not loaded")]
    ModelUnavailable,

    /// The raw URL was empty after trimming.
    #[error("URL cannot be empty")]
    EmptyInput,

    /// The decoder found no QR payload in the image bytes.
    #[error("QR code not detected")]
    QrNotDetected,

    /// Upload was not declared as an image.
    #[error("file must be an image (got content type {0:?})")]
    NotAnImage(String),

    /// The classifier cannot produce class probabilities.
    #[error("classifier does not expose class probabilities")]
    ProbabilityUnsupported,

    /// Model artifact is structurally invalid.
    #[error("invalid model: {0}")]
    InvalidModel(String),

    /// Model artifact does not match the pinned SHA-256.
    #[error("model checksum mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: String, actual: String },

    /// Labeled dataset is missing required columns or has bad rows.
    #[error("dataset: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
