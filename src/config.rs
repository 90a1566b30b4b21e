//! Runtime configuration for the scoreboard binary
//!
//! Values come from the process environment, optionally seeded from a
//! `.env` file by the caller before [`AppConfig::from_env`] runs.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable selecting the summary output format
pub const OUTPUT_ENV: &str = "SCOREBOARD_OUTPUT";

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unsupported output format: {0} (expected text or json)")]
    UnsupportedOutput(String),
}

/// How summaries are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One ranked line per match
    #[default]
    Text,
    /// A JSON array of match entries
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::UnsupportedOutput(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Settings for one run of the binary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub output: OutputFormat,
}

impl AppConfig {
    /// Reads configuration from the environment
    ///
    /// Unset variables fall back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let output = match lookup(OUTPUT_ENV) {
            Some(raw) => raw.parse::<OutputFormat>()?,
            None => {
                tracing::debug!("{} not set, using default output", OUTPUT_ENV);
                OutputFormat::default()
            }
        };

        Ok(Self { output })
    }
}
