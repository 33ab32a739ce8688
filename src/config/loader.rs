//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::config::schema::AppConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Env var naming an optional TOML config file.
pub const CONFIG_PATH_ENV: &str = "MOVIES_CONFIG";

/// Env var overriding `listener.port`.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),

    #[error("Invalid PORT value: {0:?}")]
    InvalidPort(String),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

impl AppConfig {
    /// Build configuration from the process environment.
    ///
    /// Reads the file named by `MOVIES_CONFIG` when set, otherwise starts from
    /// defaults; `PORT` then overrides the listener port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => load_config(Path::new(&path))?,
            None => AppConfig::default(),
        };

        config.with_port_override(std::env::var(PORT_ENV).ok().as_deref())
    }

    /// Apply a raw `PORT` value, if any.
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self, ConfigError> {
        // An empty PORT counts as unset.
        if let Some(raw) = port.filter(|p| !p.trim().is_empty()) {
            let parsed: u16 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.to_string()))?;
            self.listener.port = parsed;
        }

        validate_config(&self).map_err(ConfigError::Validation)?;
        Ok(self)
    }
}
