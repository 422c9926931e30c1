//! # Configuration
//!
//! Optional `config.yaml` controlling where logs go and how the report is titled.
//! Without a file every field falls back to its default.
//! A relative `logs_dir` is taken relative to the directory holding the config file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_DIR_NAME: &str = "weeklog";
pub const CONFIG_FILE_NAME: &str = "config.yaml";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub logs_dir: Option<PathBuf>,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logs_dir: None,
            title: default_title(),
        }
    }
}

fn default_title() -> String {
    "📘 Thesis Weekly Progress Report".to_string()
}

/// `<user config dir>/weeklog/config.yaml`, if the platform has a config dir.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

impl AppConfig {
    /// Loads the configuration.
    ///
    /// An explicit path must exist and parse. Otherwise the user config file is
    /// read when present, and defaults are used when it is not.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match user_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => {
                tracing::debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        if let (Some(dir), Some(base)) = (config.logs_dir.as_mut(), path.parent()) {
            // join() keeps an absolute dir as is
            *dir = base.join(&*dir);
        }
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        // serde_yaml rejects an empty document for a struct.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
