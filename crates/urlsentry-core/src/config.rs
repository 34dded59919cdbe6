use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How the CLI renders results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

/// Global configuration loaded from `~/.config/urlsentry/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentryConfig {
    /// Model artifact path. Defaults to `~/.local/share/urlsentry/model.json`.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Optional SHA-256 (hex) the model artifact must match before it is loaded.
    #[serde(default)]
    pub model_sha256: Option<String>,
    /// Output format for CLI results: "json" (default) or "text".
    #[serde(default)]
    pub output: OutputFormat,
}

impl SentryConfig {
    /// Configured model path, or the XDG data default.
    pub fn resolved_model_path(&self) -> Result<PathBuf> {
        match &self.model_path {
            Some(p) => Ok(p.clone()),
            None => default_model_path(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsentry")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

pub fn default_model_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsentry")?;
    Ok(xdg_dirs.get_data_home().join("model.json"))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SentryConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SentryConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from_path(&path)
}

/// Load configuration from an explicit file.
pub fn load_from_path(path: &Path) -> Result<SentryConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: SentryConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = SentryConfig::default();
        assert!(cfg.model_path.is_none());
        assert!(cfg.model_sha256.is_none());
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = SentryConfig {
            model_path: Some(PathBuf::from("/srv/models/forest.json")),
            model_sha256: Some("ab12".to_string()),
            output: OutputFormat::Text,
        };
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: SentryConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_empty_file_uses_defaults() {
        let cfg: SentryConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, SentryConfig::default());
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            model_path = "/opt/urlsentry/model.json"
            output = "text"
        "#;
        let cfg: SentryConfig = toml::from_str(toml).unwrap();
        assert_eq!(
            cfg.resolved_model_path().unwrap(),
            PathBuf::from("/opt/urlsentry/model.json")
        );
        assert_eq!(cfg.output, OutputFormat::Text);
        assert!(cfg.model_sha256.is_none());
    }

    #[test]
    fn load_from_path_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "output = 3").unwrap();
        let err = load_from_path(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("parse config"));
    }
}
