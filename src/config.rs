use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::models::{ColorTag, Thresholds};

pub(crate) const CONFIG_ENV: &str = "BUDGETRACK_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) currency_symbol: String,
    /// Start the ledger with the demo categories.
    pub(crate) sample_data: bool,
    pub(crate) default_color: ColorTag,
    pub(crate) warn_percent: u32,
    pub(crate) alert_percent: u32,
}

impl Default for Config {
    fn default() -> Self {
        let thresholds = Thresholds::default();
        Self {
            currency_symbol: "$".to_string(),
            sample_data: true,
            default_color: ColorTag::Slate,
            warn_percent: thresholds.warn_percent,
            alert_percent: thresholds.alert_percent,
        }
    }
}

impl Config {
    /// `$BUDGETRACK_CONFIG`, else `config.toml` in the platform config directory.
    pub(crate) fn load() -> Result<Self> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file means defaults. A malformed one is an error.
    pub(crate) fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::parse(&text)
            .with_context(|| format!("Invalid config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub(crate) fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        if config.warn_percent > config.alert_percent {
            anyhow::bail!(
                "warn_percent ({}) must not exceed alert_percent ({})",
                config.warn_percent,
                config.alert_percent
            );
        }
        Ok(config)
    }

    pub(crate) fn thresholds(&self) -> Thresholds {
        Thresholds {
            warn_percent: self.warn_percent,
            alert_percent: self.alert_percent,
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    directories::ProjectDirs::from("com", "budgetrack", "budgetrack")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
