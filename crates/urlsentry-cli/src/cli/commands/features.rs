//! `urlsentry features <url>` – show the lexical feature vector.

use anyhow::Result;
use urlsentry_core::config::{OutputFormat, SentryConfig};
use urlsentry_core::features::extract_features;

use super::print_json;

pub fn run_features(cfg: &SentryConfig, url: &str) -> Result<()> {
    let features = extract_features(url);
    match cfg.output {
        OutputFormat::Json => print_json(&features)?,
        OutputFormat::Text => {
            for (name, value) in features.iter() {
                println!("{:<26} {}", name, value);
            }
        }
    }
    Ok(())
}
