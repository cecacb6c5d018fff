//! Configuration file support for spmkit.
//!
//! Two locations are read:
//! - Global: `~/.spmkit/config.toml` - User-wide defaults
//! - Project: `.spmkit/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// spmkit configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Swift toolchain settings
    pub swift: SwiftConfig,

    /// Build settings
    pub build: BuildConfig,
}

/// Which `swift` to run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SwiftConfig {
    /// Path to the swift executable (e.g., /usr/share/swift/usr/bin/swift)
    pub path: Option<PathBuf>,

    /// Assume this version instead of asking `swift --version`
    pub version: Option<String>,
}

/// Build-related configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Extra arguments passed to every `swift build`
    pub args: Vec<String>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.swift.path.is_some() {
            self.swift.path = other.swift.path;
        }
        if other.swift.version.is_some() {
            self.swift.version = other.swift.version;
        }
        if !other.build.args.is_empty() {
            self.build.args = other.build.args;
        }
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.spmkit/config.toml)
/// 2. Global config (~/.spmkit/config.toml)
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global_path) = global_path {
        config.merge(Config::load_or_default(global_path));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global spmkit config directory (~/.spmkit).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".spmkit"))
}

/// Get the global config path (~/.spmkit/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.spmkit/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".spmkit").join("config.toml")
}
