use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// How reports are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/urlguard/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlguardConfig {
    /// Exported model used by `check` when `--model` is not given.
    #[serde(default)]
    pub model_path: Option<PathBuf>,
    /// Phishing probability at or above which a URL is flagged. None = model argmax.
    #[serde(default)]
    pub decision_threshold: Option<f64>,
    /// Default report format: "text" or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

impl UrlguardConfig {
    pub fn validate(&self) -> Result<()> {
        if let Some(t) = self.decision_threshold {
            if !(0.0..=1.0).contains(&t) {
                bail!("decision_threshold must be within [0, 1], got {t}");
            }
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlguard")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlguardConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlguardConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from(&path)
}

/// Load and validate configuration from an explicit path.
pub fn load_from(path: &Path) -> Result<UrlguardConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlguardConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
