//! CLI command handlers. Each command is in its own file.

mod checksum;
mod completions;
mod decode;
mod export_features;
mod features;
mod normalize;
mod predict;
mod status;

pub use checksum::run_checksum;
pub use completions::run_completions;
pub use decode::run_decode;
pub use export_features::run_export_features;
pub use features::run_features;
pub use normalize::run_normalize;
pub use predict::run_predict;
pub use status::run_status;

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use urlsentry_core::classifier;
use urlsentry_core::config::SentryConfig;
use urlsentry_core::predict::Predictor;

/// Build a predictor from `--model` or the configured artifact.
///
/// The configured `model_sha256` pin only applies to the configured path;
/// an explicit `--model` is loaded unpinned.
pub(crate) fn load_predictor(cfg: &SentryConfig, model: Option<&Path>) -> Result<Predictor> {
    let classifier = match model {
        Some(path) => classifier::load_optional(path, None),
        None => {
            let path = cfg.resolved_model_path()?;
            classifier::load_optional(&path, cfg.model_sha256.as_deref())
        }
    };
    Ok(Predictor::new(classifier))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
