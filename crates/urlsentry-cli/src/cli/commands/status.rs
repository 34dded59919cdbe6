//! `urlsentry status` – readiness of the prediction service.

use anyhow::Result;
use std::path::Path;
use urlsentry_core::config::{OutputFormat, SentryConfig};

use super::{load_predictor, print_json};

pub fn run_status(cfg: &SentryConfig, model: Option<&Path>) -> Result<()> {
    let status = load_predictor(cfg, model)?.status();
    match cfg.output {
        OutputFormat::Json => print_json(&status)?,
        OutputFormat::Text => {
            let model = if status.model_loaded {
                "loaded"
            } else {
                "not loaded"
            };
            println!("{} (model {})", status.message, model);
        }
    }
    Ok(())
}
