//! CLI for the urlsentry URL classifier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::{Path, PathBuf};
use urlsentry_core::config;

use commands::{
    run_checksum, run_completions, run_decode, run_export_features, run_features,
    run_normalize, run_predict, run_status,
};

/// Top-level CLI for the urlsentry URL classifier.
#[derive(Debug, Parser)]
#[command(name = "urlsentry")]
#[command(about = "urlsentry: lexical phishing/malicious URL classifier", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the normalized form of a raw URL string.
    Normalize {
        /// Raw input (may be schemeless or prefixed with an ID column).
        raw: String,
    },

    /// Print the 11 lexical features of a URL in canonical order.
    Features {
        /// Raw URL.
        url: String,
    },

    /// Classify a URL as safe or malicious.
    Predict {
        /// Raw URL.
        url: String,
        /// Model artifact to use instead of the configured one.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Decode the URL in a QR code image, optionally classifying it.
    Decode {
        /// Image file (PNG, JPEG, GIF, BMP or WebP).
        image: PathBuf,
        /// Also classify the decoded URL.
        #[arg(long)]
        predict: bool,
        /// Model artifact to use instead of the configured one (with --predict).
        #[arg(long, value_name = "PATH", requires = "predict")]
        model: Option<PathBuf>,
    },

    /// Report whether a model can be loaded.
    Status {
        /// Model artifact to use instead of the configured one.
        #[arg(long, value_name = "PATH")]
        model: Option<PathBuf>,
    },

    /// Featurize a labeled CSV dataset (columns `url`, `label`) for training.
    ExportFeatures {
        /// Input CSV with `url` and `label` columns.
        #[arg(long, value_name = "CSV")]
        dataset: PathBuf,
        /// Output CSV: feature columns followed by `label`.
        #[arg(long, value_name = "CSV")]
        output: PathBuf,
    },

    /// Compute SHA-256 of a file (e.g. a model artifact, for `model_sha256`).
    Checksum {
        /// Path to the file.
        path: String,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Normalize { raw } => run_normalize(&cfg, &raw)?,
            CliCommand::Features { url } => run_features(&cfg, &url)?,
            CliCommand::Predict { url, model } => run_predict(&cfg, &url, model.as_deref())?,
            CliCommand::Decode {
                image,
                predict,
                model,
            } => run_decode(&cfg, &image, predict, model.as_deref())?,
            CliCommand::Status { model } => run_status(&cfg, model.as_deref())?,
            CliCommand::ExportFeatures { dataset, output } => {
                run_export_features(&dataset, &output)?;
            }
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
            CliCommand::Completions { shell } => run_completions(shell)?,
        }

        Ok(())
    }
}
