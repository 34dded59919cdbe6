//! `urlsentry decode <image>` – read the URL out of a QR code image.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use urlsentry_core::config::{OutputFormat, SentryConfig};
use urlsentry_core::qr;

use super::{load_predictor, print_json};

pub fn run_decode(
    cfg: &SentryConfig,
    image: &Path,
    predict: bool,
    model: Option<&Path>,
) -> Result<()> {
    let bytes = fs::read(image).with_context(|| format!("read image: {}", image.display()))?;
    let decoded = qr::decode_image_bytes(&bytes)
        .with_context(|| format!("decode QR: {}", image.display()))?;

    if !predict {
        match cfg.output {
            OutputFormat::Json => print_json(&decoded)?,
            OutputFormat::Text => println!("{}", decoded.url),
        }
        return Ok(());
    }

    let prediction = load_predictor(cfg, model)?.predict(&decoded.url)?;
    match cfg.output {
        OutputFormat::Json => print_json(&serde_json::json!({
            "decoded": decoded,
            "prediction": prediction,
        }))?,
        OutputFormat::Text => println!(
            "{:<10} {:>6.2}%  {}",
            prediction.verdict, prediction.confidence, prediction.url
        ),
    }
    Ok(())
}
