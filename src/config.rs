//! Configuration module for bookverse
//!
//! Settings are layered: built-in defaults, then an optional TOML file in the
//! user's config directory (`~/.config/bookverse/config.toml` on Linux), then
//! `BOOKVERSE_*` environment variables. Nothing is ever written back.

use crate::catalog::{CoverUrls, SearchField};
use crate::search::Layout;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Open Library search endpoint
pub const DEFAULT_SEARCH_URL: &str = "https://openlibrary.org/search.json";

/// Open Library cover endpoint, keyed by cover id
pub const DEFAULT_COVERS_URL: &str = "https://covers.openlibrary.org/b/id";

const DEFAULT_TIMEOUT_SECS: u64 = 15;

fn default_search_url() -> String {
    DEFAULT_SEARCH_URL.to_string()
}

fn default_covers_url() -> String {
    DEFAULT_COVERS_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

const fn default_true() -> bool {
    true
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BookverseConfig {
    /// Search endpoint URL
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Base URL for cover images
    #[serde(default = "default_covers_url")]
    pub covers_url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Field selected at startup
    #[serde(default)]
    pub default_field: SearchField,

    /// Result layout at startup
    #[serde(default)]
    pub default_layout: Layout,

    /// Show the filter panel at startup
    #[serde(default)]
    pub show_filters: bool,

    /// Check cover images when the detail view opens
    #[serde(default = "default_true")]
    pub probe_covers: bool,

    /// Log file for the interactive UI
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for BookverseConfig {
    fn default() -> Self {
        Self {
            search_url: default_search_url(),
            covers_url: default_covers_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            default_field: SearchField::default(),
            default_layout: Layout::default(),
            show_filters: false,
            probe_covers: true,
            log_file: None,
        }
    }
}

impl BookverseConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("bookverse").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file or environment holds invalid values.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path()?;
        Self::build(&path, false)
    }

    /// Load configuration from an explicit file, which must exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, cannot be parsed, or
    /// holds invalid values.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::build(path, true)
    }

    fn build(path: &Path, required: bool) -> Result<Self, ConfigError> {
        log::debug!("Loading configuration from {}", path.display());

        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(Environment::with_prefix("BOOKVERSE").try_parsing(true))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.search_url.trim().is_empty() {
            return Err(ConfigError::Message("search_url must not be empty".to_string()));
        }
        if self.covers_url.trim().is_empty() {
            return Err(ConfigError::Message("covers_url must not be empty".to_string()));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::Message("timeout_secs must be at least 1".to_string()));
        }
        Ok(())
    }

    /// HTTP timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Cover URL templates for the configured base
    #[must_use]
    pub fn cover_urls(&self) -> CoverUrls {
        CoverUrls::new(self.covers_url.as_str())
    }

    /// Where the interactive UI writes its log
    ///
    /// Falls back to `<cache dir>/bookverse/bookverse.log`.
    #[must_use]
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("bookverse").join("bookverse.log"))
        })
    }

    /// Render the effective configuration as TOML
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if serialization fails.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))
    }
}
