//! URL phishing triage: normalization, lexical feature extraction and
//! classification of raw URLs.
//!
//! The same [`features::extract_features`] feeds both the training export in
//! [`dataset`] and serving-time prediction in [`predict`].

pub mod config;
pub mod logging;

pub mod checksum;
pub mod classifier;
pub mod dataset;
pub mod error;
pub mod features;
pub mod predict;
pub mod qr;
pub mod url_model;
pub mod verdict;

pub use error::{Error, Result};
