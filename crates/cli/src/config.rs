//! Settings for the `reel-reviews` binary.
//!
//! Settings come from three places, later ones winning:
//! 1. Built-in defaults
//! 2. A TOML file (`--config PATH`, or `reel-reviews.toml` if present)
//! 3. Command-line flags

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "reel-reviews.toml";

/// Where the catalog lives unless told otherwise
pub const DEFAULT_STORE_PATH: &str = "data/movies.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding movies and reviews
    pub store_path: PathBuf,
    /// Size of the "top rated" section
    pub top_limit: usize,
    /// tracing filter directive, e.g. "info,store=debug"; RUST_LOG still wins
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: PathBuf::from(DEFAULT_STORE_PATH),
            top_limit: aggregator::DEFAULT_TOP_LIMIT,
            log_filter: None,
        }
    }
}

impl Config {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, `reel-reviews.toml` in the
    /// current directory is used if it exists, otherwise the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))
            }
            None => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}
