//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or saving a bay configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the configuration file failed
    #[error("Config file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid TOML for this schema
    #[error("Config parse failed: {0}")]
    Parse(#[from] toml::de::Error),

    /// The configuration could not be rendered as TOML
    #[error("Config serialization failed: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration parsed but breaks a rule
    #[error("Invalid config: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
