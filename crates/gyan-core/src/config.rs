//! Configuration for the content front-end.
//!
//! Configuration is stored in TOML format in the platform config directory and
//! every field has a built-in default, so a missing file is not an error while
//! a malformed one is.
//!
//! ## File Location
//!
//! - Linux: `~/.config/gyan/config.toml`
//! - macOS: `~/Library/Application Support/com.gyanladoo.gyan/config.toml`
//! - Windows: `%APPDATA%\gyanladoo\gyan\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! [api]
//! endpoint = "https://gyanladoo.com/graphql"
//! timeout_secs = 30
//!
//! [content]
//! site_url = "https://gyanladoo.com"
//! post_count = 3
//! category_count = 4
//! # fallback_path = "/etc/gyan/fallback.toml"
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default content API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://gyanladoo.com/graphql";
/// Default base URL used to build outbound links.
pub const DEFAULT_SITE_URL: &str = "https://gyanladoo.com";
/// Default number of posts requested per load.
pub const DEFAULT_POST_COUNT: u32 = 3;
/// Default number of categories requested per load.
pub const DEFAULT_CATEGORY_COUNT: u32 = 4;
/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Content API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Content selection and link-building settings.
    #[serde(default)]
    pub content: ContentConfig,
}

/// Settings for reaching the content API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL of the GraphQL content endpoint.
    pub endpoint: String,
    /// Request timeout in seconds; the transport enforces no other deadline.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Settings controlling what is requested and how links are built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Base URL of the publishing site, joined with entity slugs for links.
    pub site_url: String,
    /// Number of posts requested per load.
    pub post_count: u32,
    /// Number of categories requested per load.
    pub category_count: u32,
    /// Optional path to a TOML file replacing the built-in fallback dataset.
    pub fallback_path: Option<PathBuf>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            post_count: DEFAULT_POST_COUNT,
            category_count: DEFAULT_CATEGORY_COUNT,
            fallback_path: None,
        }
    }
}

impl Config {
    /// Load configuration from the default location or create with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, or if a
    /// config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load configuration from an explicit file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("invalid config at {}: {e}", path.display())))
    }

    /// Save configuration to an explicit file path, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        fs::write(path, raw)?;
        Ok(())
    }

    /// Path of the config file in the platform config directory.
    pub fn config_path() -> Result<PathBuf> {
        directories::ProjectDirs::from("com", "gyanladoo", "gyan")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))
    }
}
