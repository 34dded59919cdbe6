//! `urlsentry normalize <raw>` – print the canonical URL string.

use anyhow::Result;
use urlsentry_core::config::{OutputFormat, SentryConfig};
use urlsentry_core::url_model::normalize_url;

use super::print_json;

pub fn run_normalize(cfg: &SentryConfig, raw: &str) -> Result<()> {
    let url = normalize_url(raw);
    match cfg.output {
        OutputFormat::Text => println!("{}", url),
        OutputFormat::Json => print_json(&serde_json::json!({ "url": url.as_str() }))?,
    }
    Ok(())
}
