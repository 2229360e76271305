//! Configuration file support.
//!
//! An optional YAML file tailors a run: which features to hide from the
//! visible catalog, and where to look for logs and extensions when the
//! defaults are wrong (remote editors, portable installs).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Default config file names to search for in the workspace root.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["adoptcheck.yaml", ".adoptcheck.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Feature IDs to exclude from the visible catalog.
    #[serde(default)]
    pub hidden_features: Vec<String>,
    /// Override for the editor log directory.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
    /// Override for the installed-extensions directory.
    #[serde(default)]
    pub extensions_dir: Option<PathBuf>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// The hidden feature IDs as a set. Duplicates in the file collapse.
    pub fn hidden_ids(&self) -> HashSet<String> {
        self.hidden_features.iter().cloned().collect()
    }
}

/// Discover a config file in the workspace root, if one exists.
pub fn discover(root: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| root.join(name))
        .find(|p| p.is_file())
}
