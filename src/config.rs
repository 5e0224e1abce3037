//! # Configuration Module
//!
//! Runtime configuration and the data directory.
//!
//! Segue keeps its files in the platform data directory:
//! - Linux: `~/.local/share/segue/`
//! - macOS: `~/Library/Application Support/segue/`
//! - Windows: `%APPDATA%\segue\`
//!
//! `config.json` in that directory overrides the defaults below; command-line
//! options override both.

use crate::generator::GeneratorConfig;
use crate::similarity::DEFAULT_ATTEMPTS;
use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const FEEDS_FILE: &str = "feeds.json";

/// Returns the Segue data directory. Nothing is created on disk.
///
/// # Errors
///
/// Returns an error if the system data directory cannot be determined.
///
/// # Examples
///
/// ```no_run
/// use segue::config::get_data_dir;
///
/// let data_dir = get_data_dir()?;
/// println!("Data directory: {}", data_dir.display());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn get_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!(
            "Could not determine system data directory. Please ensure your platform supports standard data directories."
        )
    })?;
    Ok(data_dir.join("segue"))
}

/// Default location of the feed snapshot.
///
/// # Errors
///
/// Same as [`get_data_dir`].
pub fn get_feeds_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(FEEDS_FILE))
}

/// Configuration for runtime behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Feed snapshot with similar artists and the user's preferences.
    pub feeds_path: PathBuf,
    /// Scrobbler user whose loved and banned tracks apply.
    pub user: Option<String>,
    /// Similarity lookups per request before giving up.
    pub similarity_attempts: u32,
    pub loved_multiplier: f64,
    pub loved_artist_multiplier: f64,
    pub recency_factor: f64,
    pub genre_threshold: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        let generator = GeneratorConfig::default();
        Self {
            feeds_path: get_feeds_path().unwrap_or_else(|_| PathBuf::from(FEEDS_FILE)),
            user: None,
            similarity_attempts: DEFAULT_ATTEMPTS,
            loved_multiplier: generator.loved_multiplier,
            loved_artist_multiplier: generator.loved_artist_multiplier,
            recency_factor: generator.recency_factor,
            genre_threshold: generator.genre_threshold,
        }
    }
}

impl RuntimeConfig {
    /// Loads `config.json` from the data directory, or the defaults if there
    /// is none.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn new() -> Result<Self> {
        Self::load(&get_data_dir()?.join(CONFIG_FILE))
    }

    /// Loads the configuration at `path`. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("No configuration at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration at {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Invalid configuration at {}", path.display()))
    }

    /// Create configuration with explicit feed snapshot path
    pub fn with_feeds_path(mut self, feeds_path: PathBuf) -> Self {
        self.feeds_path = feeds_path;
        self
    }

    pub fn with_user(mut self, user: String) -> Self {
        self.user = Some(user);
        self
    }

    /// The generator's share of the configuration.
    pub fn generator(&self) -> GeneratorConfig {
        GeneratorConfig {
            loved_multiplier: self.loved_multiplier,
            loved_artist_multiplier: self.loved_artist_multiplier,
            recency_factor: self.recency_factor,
            genre_threshold: self.genre_threshold,
        }
    }
}
