//! Persisted application configuration.
//!
//! Settings live in a TOML file under the `.sitereport` directory. The file is
//! loaded once at startup and the resulting [`AppConfig`] is handed to the
//! controller explicitly; nothing reads configuration from ambient globals.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::app_dirs;
use crate::i18n::Language;

/// Default filename used to store the app configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn default_endpoint() -> String {
    "https://reports.sitereport.app/v1/reports".to_string()
}

fn default_challenge_url() -> String {
    "https://reports.sitereport.app/verify".to_string()
}

/// Application configuration loaded from disk.
///
/// Config keys (TOML): `endpoint`, `challenge_site_key`, `challenge_url`,
/// `sites`, `language`, `theme`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Submission endpoint that receives the multipart report.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Site key for the hosted bot challenge. Empty disables verification.
    #[serde(default)]
    pub challenge_site_key: String,
    /// Hosted challenge page that issues verification tokens.
    #[serde(default = "default_challenge_url")]
    pub challenge_url: String,
    /// Domains reports may be filed against.
    #[serde(default)]
    pub sites: Vec<String>,
    /// Optional language override; the environment locale is used otherwise.
    #[serde(default)]
    pub language: Option<Language>,
    /// UI theme preference.
    #[serde(default)]
    pub theme: ThemeChoice,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            challenge_site_key: String::new(),
            challenge_url: default_challenge_url(),
            sites: Vec::new(),
            language: None,
            theme: ThemeChoice::default(),
        }
    }
}

impl AppConfig {
    /// True when no challenge site key is configured and verification runs in
    /// the degraded auto-pass mode.
    pub fn verification_disabled(&self) -> bool {
        self.challenge_site_key.trim().is_empty()
    }
}

/// UI theme preference persisted in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    Light,
    Dark,
    System,
}

impl Default for ThemeChoice {
    fn default() -> Self {
        Self::System
    }
}

/// Errors that may occur while loading or saving app configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
    #[error("No suitable config directory found")]
    NoConfigDir,
}

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    let dir = app_dirs::app_root_dir().map_err(map_app_dir_error)?;
    Ok(dir.join(CONFIG_FILE_NAME))
}

/// Load configuration from disk, returning defaults if the file is missing.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    load_from(&path)
}

/// Load configuration from a specific path, returning defaults if missing.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Persist configuration to disk, overwriting any previous contents.
pub fn save(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_path()?;
    save_to_path(config, &path)
}

/// Write the TOML config atomically to prevent partial writes on crash.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    let tmp = path.with_extension("toml.tmp");
    std::fs::write(&tmp, data.as_bytes()).map_err(|source| ConfigError::Write {
        path: tmp.clone(),
        source,
    })?;
    std::fs::rename(&tmp, path).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn map_app_dir_error(error: app_dirs::AppDirError) -> ConfigError {
    match error {
        app_dirs::AppDirError::NoBaseDir => ConfigError::NoConfigDir,
        app_dirs::AppDirError::CreateDir { path, source } => {
            ConfigError::CreateDir { path, source }
        }
    }
}
