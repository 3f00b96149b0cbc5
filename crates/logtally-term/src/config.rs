//! Display configuration for logtally.
//!
//! [`Config::load`] reads `config.toml` from `--config`, or from
//! `$XDG_CONFIG_HOME/logtally/` (falling back to `~/.config/logtally/`).
//! A missing default file means built-in defaults; the file is never created.

use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown color {value:?} for level {level}")]
    Color { level: String, value: String },
}

/// Top-level configuration, mirrors `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub display: DisplayConfig,
    pub colors: ColorConfig,
}

/// `[display]` section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// ANSI styling for level names
    pub color: bool,
    /// Print the "Analyzing ..." line before the table
    pub progress: bool,
    pub level_header: String,
    pub count_header: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            progress: true,
            level_header: "Log level".to_string(),
            count_header: "Count".to_string(),
        }
    }
}

/// `[colors]` section, one color name per level
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub info: String,
    pub debug: String,
    pub error: String,
    pub warning: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            info: "green".to_string(),
            debug: "blue".to_string(),
            error: "red".to_string(),
            warning: "yellow".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// tried and silently skipped when absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_config_path(
                std::env::var_os("XDG_CONFIG_HOME"),
                std::env::var_os("HOME"),
            ) {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let src = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded config");

        Self::from_toml(&src).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn from_toml(src: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(src)
    }
}

/// `$XDG_CONFIG_HOME/logtally/config.toml`, else `$HOME/.config/logtally/config.toml`
pub fn default_config_path(xdg_config_home: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    let base = match xdg_config_home.filter(|v| !v.is_empty()) {
        Some(xdg) => PathBuf::from(xdg),
        None => PathBuf::from(home?).join(".config"),
    };
    Some(base.join("logtally").join("config.toml"))
}
