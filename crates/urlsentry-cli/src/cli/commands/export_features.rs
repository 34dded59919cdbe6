//! `urlsentry export-features` – training feature matrix from a labeled CSV.

use anyhow::{Context, Result};
use std::path::Path;
use urlsentry_core::dataset;

pub fn run_export_features(dataset_path: &Path, output: &Path) -> Result<()> {
    let rows = dataset::export_features(dataset_path, output)
        .with_context(|| format!("export features from {}", dataset_path.display()))?;
    println!("Wrote {} rows to {}", rows, output.display());
    Ok(())
}
