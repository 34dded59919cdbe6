//! Feature vector and the classifier-facing row.

use serde::{Deserialize, Serialize};

use super::schema::{column_index, FEATURE_COLUMNS, FEATURE_COUNT};

/// The eleven lexical/structural features of one normalized URL.
///
/// Field declaration order is the canonical column order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub url_length: u32,
    pub num_dots: u32,
    pub num_hyphens: u32,
    pub num_digits: u32,
    pub num_special_chars: u32,
    pub has_https: u32,
    pub num_subdirs: u32,
    pub num_params: u32,
    pub has_ip_address: u32,
    pub tld_length: u32,
    pub contains_suspicious_words: u32,
}

impl FeatureVector {
    /// `(column, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> {
        let values = [
            self.url_length,
            self.num_dots,
            self.num_hyphens,
            self.num_digits,
            self.num_special_chars,
            self.has_https,
            self.num_subdirs,
            self.num_params,
            self.has_ip_address,
            self.tld_length,
            self.contains_suspicious_words,
        ];
        FEATURE_COLUMNS
            .into_iter()
            .zip(values)
            .map(|(name, v)| (name, f64::from(v)))
    }

    /// Reindexed row ready for a classifier.
    pub fn to_row(&self) -> FeatureRow {
        FeatureRow::from_pairs(self.iter())
    }
}

/// Numeric input row in canonical column order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureRow([f64; FEATURE_COUNT]);

impl FeatureRow {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Reindex named values onto the canonical columns.
    ///
    /// Unknown names are dropped and absent columns are zero, so a drifted
    /// extractor still yields a well-formed row instead of an error.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut values = [0.0; FEATURE_COUNT];
        for (name, value) in pairs {
            match column_index(name.as_ref()) {
                Some(i) => values[i] = value,
                None => tracing::trace!(column = name.as_ref(), "dropping unknown feature column"),
            }
        }
        Self(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }
}
