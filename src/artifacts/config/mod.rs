//! Prefix configuration
//!
//! The set of commit prefixes that count as "conventional" is read from a JSON
//! file named `taglog.json`. Two shapes are accepted:
//!
//! ```json
//! ["feat", "fix", "perf"]
//! ```
//!
//! ```json
//! { "prefixes": ["feat", "fix", "perf"] }
//! ```
//!
//! # Locations
//!
//! 1. The path given with `--config`, which must exist
//! 2. `taglog.json` in each search directory, in order (current directory,
//!    then repository root)
//! 3. The built-in defaults
//!
//! A file with an empty list also falls back to the defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name looked up in the search directories
pub const CONFIG_FILE_NAME: &str = "taglog.json";

/// Prefixes used when no configuration provides any
pub const DEFAULT_PREFIXES: [&str; 5] = ["feat", "fix", "perf", "doc", "ref"];

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file '{path}' does not exist")]
    NotFound { path: PathBuf },

    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigFile {
    List(Vec<String>),
    Object { prefixes: Vec<String> },
}

impl ConfigFile {
    fn into_prefixes(self) -> Vec<String> {
        match self {
            ConfigFile::List(prefixes) | ConfigFile::Object { prefixes } => prefixes,
        }
    }
}

/// Loaded configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    prefixes: Vec<String>,
    /// File the prefixes came from, `None` for the built-in defaults
    source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prefixes: DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect(),
            source: None,
        }
    }
}

impl Config {
    /// Load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist, or if a config file
    /// exists but cannot be read or parsed. Missing files in the search
    /// directories are not an error.
    pub fn load(explicit: Option<&Path>, search_dirs: &[&Path]) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound {
                    path: path.to_path_buf(),
                });
            }
            return Self::read(path);
        }

        for dir in search_dirs {
            let path = dir.join(CONFIG_FILE_NAME);
            if path.is_file() {
                return Self::read(&path);
            }
        }

        tracing::debug!("no {CONFIG_FILE_NAME} found, using default prefixes");
        Ok(Config::default())
    }

    fn read(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfigFile =
            serde_json::from_str(&content).map_err(|source| ConfigError::ParseError {
                path: path.to_path_buf(),
                source,
            })?;

        let prefixes = file
            .into_prefixes()
            .into_iter()
            .map(|prefix| prefix.trim().to_string())
            .filter(|prefix| !prefix.is_empty())
            .collect::<Vec<_>>();

        if prefixes.is_empty() {
            tracing::warn!(path = %path.display(), "config lists no prefixes, using defaults");
            return Ok(Config::default());
        }

        tracing::debug!(path = %path.display(), count = prefixes.len(), "loaded prefixes");
        Ok(Config {
            prefixes,
            source: Some(path.to_path_buf()),
        })
    }

    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
