//! `urlsentry predict <url>` – classify one URL.

use anyhow::Result;
use std::path::Path;
use urlsentry_core::config::{OutputFormat, SentryConfig};

use super::{load_predictor, print_json};

pub fn run_predict(cfg: &SentryConfig, url: &str, model: Option<&Path>) -> Result<()> {
    let predictor = load_predictor(cfg, model)?;
    let prediction = predictor.predict(url)?;
    match cfg.output {
        OutputFormat::Json => print_json(&prediction)?,
        OutputFormat::Text => println!(
            "{:<10} {:>6.2}%  {}",
            prediction.verdict, prediction.confidence, prediction.url
        ),
    }
    Ok(())
}
