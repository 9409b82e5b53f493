use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::logic::upload::UploadPolicy;
use crate::Theme;

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_icon_mode")]
    pub icon_mode: String,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default)]
    pub upload: UploadConfig,
    #[serde(default = "default_true")]
    pub confetti: bool,
}

/// Client-side upload limits (never enforced anywhere else)
#[derive(Debug, Clone, Deserialize)]
pub struct UploadConfig {
    #[serde(default = "default_max_files")]
    pub max_files: usize,
    #[serde(default = "default_max_size_mb")]
    pub max_size_mb: u64,
    #[serde(default = "default_accepted_types")]
    pub accepted_types: Vec<String>,
    #[serde(default = "default_upload_delay_ms")]
    pub delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Default,
            icon_mode: default_icon_mode(),
            vim_mode: false,
            upload: UploadConfig::default(),
            confetti: true,
        }
    }
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            max_size_mb: default_max_size_mb(),
            accepted_types: default_accepted_types(),
            delay_ms: default_upload_delay_ms(),
        }
    }
}

impl UploadConfig {
    pub fn policy(&self) -> UploadPolicy {
        UploadPolicy {
            max_files: self.max_files,
            max_size_mb: self.max_size_mb,
            accepted_types: self.accepted_types.clone(),
        }
    }
}

impl Config {
    /// Parse a YAML config document
    pub fn from_yaml(source: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        if source.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }

    /// Load config from `path`, or defaults when no file was found
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let source = std::fs::read_to_string(path)?;
                Self::from_yaml(&source)
            }
            None => Ok(Config::default()),
        }
    }
}

/// Determine the config file path with fallback logic
///
/// Order: explicit `--config`, `<config_dir>/lepeva/config.yaml`, `./config.yaml`.
/// An explicit path that does not exist is an error; otherwise a missing file
/// just means defaults.
pub fn find_config_path(cli_path: Option<&str>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("lepeva").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

fn default_icon_mode() -> String {
    "emoji".to_string()
}

fn default_true() -> bool {
    true
}

fn default_max_files() -> usize {
    10
}

fn default_max_size_mb() -> u64 {
    10
}

fn default_upload_delay_ms() -> u64 {
    2000
}

fn default_accepted_types() -> Vec<String> {
    [
        "image/*",
        "application/pdf",
        ".doc",
        ".docx",
        ".ppt",
        ".pptx",
        "audio/*",
        "video/*",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
