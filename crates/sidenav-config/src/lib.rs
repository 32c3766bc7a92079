//! Theme configuration for sidenav.
//!
//! Parses `sidenav.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories. Every section is
//! optional; a missing file yields the defaults.
//!
//! ```toml
//! [menu]
//! default_collapsed = false
//!
//! [toc]
//! float = true
//!
//! [search]
//! enabled = true
//! provider = "stork"   # passed through to the search collaborator
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidenav.toml";

/// Theme configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Menu behavior.
    pub menu: MenuConfig,
    /// Table-of-contents placement.
    pub toc: TocConfig,
    /// Search slot configuration.
    pub search: SearchConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Menu behavior configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Start folders collapsed instead of expanded.
    pub default_collapsed: bool,
}

/// Table-of-contents placement configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Float the table of contents next to the content instead of
    /// inlining anchors in the sidebar. Mobile menus ignore this.
    pub float: bool,
}

/// Search slot configuration.
///
/// Only `enabled` is interpreted here. Remaining keys in the section are
/// preserved untouched for the host's search collaborator.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Show the search slot in the mobile menu.
    pub enabled: bool,
    /// Implementation-specific flags, passed through as-is.
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            extra: HashMap::new(),
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ThemeConfig {
    /// Load configuration.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `sidenav.toml` in the current directory and
    /// parents, falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist or if
    /// parsing fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_from_file(path);
        }

        match Self::discover_config() {
            Some(discovered) => Self::load_from_file(&discovered),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }
}
