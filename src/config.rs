//! Configuration management for Chainguard

use crate::error::ChainError;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::Level;

pub const DEFAULT_CONFIG_PATH: &str = "chainguard.toml";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> Result<Level, ChainError> {
        self.level
            .parse::<Level>()
            .map_err(|_| ChainError::ConfigError(format!("Unknown logging.level '{}'", self.level)))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_color")]
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

fn default_color() -> bool {
    true
}

/// Loads `path`, falling back to defaults when the file is absent or empty.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ChainError> {
    let config_str = match fs::read_to_string(path.as_ref()) {
        Ok(s) => s,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
        Err(e) => return Err(e.into()),
    };
    let config: Config = if config_str.trim().is_empty() {
        Config::default()
    } else {
        toml::from_str(&config_str)?
    };

    // Validate critical values
    config.logging.level()?;

    Ok(config)
}
