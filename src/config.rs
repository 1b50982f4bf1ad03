//! Configuration loading.
//!
//! Settings come from an optional TOML file. Without an explicit path the file is looked up
//! at `<config dir>/glossbot/config.toml`; when that does not exist the defaults apply.
//! Command-line flags override file values in `main.rs`.
//!
//! ```toml
//! glossary = "glossary.toml"
//! greeting = "Привет!"
//! log_level = "info"
//! ```

use crate::app::DEFAULT_GREETING;
use crate::error::{GlossbotError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Glossary file; relative paths are resolved against the config file's directory
    pub glossary: PathBuf,
    pub greeting: String,
    /// Default `env_logger` filter, used when `RUST_LOG` is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            glossary: PathBuf::from("glossary.toml"),
            greeting: DEFAULT_GREETING.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has a config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("glossbot").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist; the default path is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(default) if default.is_file() => Self::from_file(&default),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Parse the config file at `path`.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            GlossbotError::config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let mut config = Self::parse(&text)?;

        if config.glossary.is_relative() {
            if let Some(base) = path.parent() {
                config.glossary = base.join(&config.glossary);
            }
        }
        Ok(config)
    }

    /// Parse config TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| GlossbotError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.greeting.trim().is_empty() {
            return Err(GlossbotError::config("greeting must not be empty"));
        }
        if self.log_level.trim().is_empty() {
            return Err(GlossbotError::config("log_level must not be empty"));
        }
        Ok(())
    }
}
