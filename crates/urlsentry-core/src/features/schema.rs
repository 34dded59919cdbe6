//! Canonical feature schema shared by training exports and serving.

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 11;

/// Column order the classifier was trained on. Never reorder.
pub const FEATURE_COLUMNS: [&str; FEATURE_COUNT] = [
    "url_length",
    "num_dots",
    "num_hyphens",
    "num_digits",
    "num_special_chars",
    "has_https",
    "num_subdirs",
    "num_params",
    "has_ip_address",
    "tld_length",
    "contains_suspicious_words",
];

/// Substrings that flag `contains_suspicious_words` (matched on the lowercased URL).
pub const SUSPICIOUS_WORDS: [&str; 10] = [
    "login", "secure", "verify", "account", "update", "free", "bonus", "bank", "wallet", "gift",
];

/// Characters counted by `num_special_chars`.
pub const SPECIAL_CHARS: [char; 4] = ['?', '=', '&', '%'];

/// Position of `name` in [`FEATURE_COLUMNS`].
pub fn column_index(name: &str) -> Option<usize> {
    FEATURE_COLUMNS.iter().position(|c| *c == name)
}
