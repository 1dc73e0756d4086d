//! # Configuration Module
//!
//! Runtime settings and data directory management for Emotune.
//!
//! ## Data Storage
//!
//! The tagged song dataset is looked up in the platform-standard data
//! directory unless configured otherwise:
//! - Linux: `~/.local/share/emotune/`
//! - macOS: `~/Library/Application Support/emotune/`
//! - Windows: `%APPDATA%\emotune\`
//!
//! ## Sources
//!
//! Settings start from [`RuntimeConfig::default`], may be replaced by a JSON
//! file ([`RuntimeConfig::load`]) and are finally overridden by environment
//! variables ([`RuntimeConfig::apply_env`]).

use anyhow::{Context, Result};
use log::debug;
use path_absolutize::Absolutize;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`RuntimeConfig::songs_dir`].
pub const ENV_SONGS_DIR: &str = "EMOTUNE_SONGS_DIR";
/// Environment variable overriding [`RuntimeConfig::base_url`].
pub const ENV_BASE_URL: &str = "EMOTUNE_BASE_URL";
/// Environment variable overriding [`RuntimeConfig::dataset_path`].
pub const ENV_DATASET: &str = "EMOTUNE_DATASET";

/// Name of the tagged song dataset file.
pub const DATASET_FILE_NAME: &str = "muse_v3.csv";

/// Returns the platform-appropriate data directory for Emotune.
///
/// The `emotune` subdirectory is created if it doesn't exist.
///
/// # Errors
///
/// This function will return an error if:
/// - The system data directory cannot be determined
/// - The emotune subdirectory cannot be created due to permissions
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;

    let emotune_dir = data_dir.join("emotune");
    fs::create_dir_all(&emotune_dir).with_context(|| {
        format!(
            "Failed to create Emotune data directory at {}. Please check file permissions.",
            emotune_dir.display()
        )
    })?;

    Ok(emotune_dir)
}

/// Default location of the song dataset inside the data directory.
pub fn get_dataset_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(DATASET_FILE_NAME))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Root of the per-emotion local song directories
    pub songs_dir: PathBuf,
    /// Base URL that local song links are built on
    pub base_url: String,
    /// Tagged song dataset for weighted playlists
    pub dataset_path: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            songs_dir: PathBuf::from("static/songs"),
            base_url: "http://localhost:5000/".to_string(),
            dataset_path: get_dataset_path().unwrap_or_else(|_| PathBuf::from(DATASET_FILE_NAME)),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a JSON file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;
        debug!("Loaded configuration from {}: {config:?}", path.display());
        Ok(config)
    }

    /// Defaults overridden by the `EMOTUNE_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env(|key| std::env::var(key).ok());
        config
    }

    /// Overrides settings from `lookup`, which maps variable names to values.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(ENV_SONGS_DIR) {
            self.songs_dir = PathBuf::from(dir);
        }
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.base_url = url;
        }
        if let Some(path) = lookup(ENV_DATASET) {
            self.dataset_path = PathBuf::from(path);
        }
    }

    /// Songs directory as an absolute path, resolved against the working
    /// directory.
    pub fn resolved_songs_dir(&self) -> Result<PathBuf> {
        let resolved = self.songs_dir.absolutize().with_context(|| {
            format!("Failed to resolve songs directory {}", self.songs_dir.display())
        })?;
        Ok(resolved.into_owned())
    }
}
