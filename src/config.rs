//! Runtime settings with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/retree/config.toml`
//! 3. Environment variables: `RETREE_*` prefix

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::builder::DEFAULT_MAX_DEPTH;

/// Rendering styles selectable for `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Indent-based, right subtree above left
    Vertical,
    /// Underscore box form, one row per level
    Horizontal,
    /// Centered titles with slash scaffolding
    Symmetric,
}

/// Unified configuration for retree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Layout used by `render` when no `--layout` flag is given
    pub layout: LayoutKind,
    /// Recursion bound for tree construction
    pub max_depth: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Vertical,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// XDG config directory for retree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "retree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path of the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

impl Settings {
    /// Load settings with layered precedence: compiled defaults, then the
    /// global config file (if present), then `RETREE_*` environment
    /// variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Same as [`Self::load`], reading an explicit config file instead of
    /// the global one. A missing file is not an error; the layers above
    /// and below it still apply.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("layout", "vertical")?
            .set_default("max_depth", defaults.max_depth as u64)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(false));
        }
        builder = builder.add_source(Environment::with_prefix("RETREE").try_parsing(true));

        builder.build()?.try_deserialize()
    }

    /// Effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
