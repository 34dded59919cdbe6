//! Small two-tree forest artifact for end-to-end tests.
//!
//! Classes are `[0, 1]` (malicious, safe). Tree 0 splits on
//! `contains_suspicious_words`, tree 1 on `has_https`.

use std::path::{Path, PathBuf};

pub const MODEL_JSON: &str = r#"{
  "classes": [0, 1],
  "feature_names": [
    "url_length", "num_dots", "num_hyphens", "num_digits", "num_special_chars",
    "has_https", "num_subdirs", "num_params", "has_ip_address", "tld_length",
    "contains_suspicious_words"
  ],
  "trees": [
    { "nodes": [
        { "feature": 10, "threshold": 0.5, "left": 1, "right": 2 },
        { "value": [2.0, 18.0] },
        { "value": [15.0, 5.0] }
    ] },
    { "nodes": [
        { "feature": 5, "threshold": 0.5, "left": 1, "right": 2 },
        { "value": [12.0, 8.0] },
        { "value": [2.0, 18.0] }
    ] }
  ]
}"#;

/// Write the fixture model into `dir` and return its path.
pub fn write_model(dir: &Path) -> PathBuf {
    let path = dir.join("model.json");
    std::fs::write(&path, MODEL_JSON).unwrap();
    path
}
