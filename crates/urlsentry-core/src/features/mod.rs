//! Handcrafted URL features.
//!
//! Cheap substring/regex counts over a [`NormalizedUrl`](crate::url_model::NormalizedUrl).
//! Training exports and live predictions both call [`extract_features`], so
//! the two can never drift apart.

mod extract;
mod schema;
mod vector;

pub use extract::{extract_features, extract_normalized};
pub use schema::{column_index, FEATURE_COLUMNS, FEATURE_COUNT, SPECIAL_CHARS, SUSPICIOUS_WORDS};
pub use vector::{FeatureRow, FeatureVector};
