//! Configuration management.
//!
//! Configuration can be set via environment variables:
//! - `OPENROUTER_API_KEY` - Required. Your OpenRouter API key.
//! - `DEFAULT_MODEL` - Optional. The model to use. Defaults to `openai/gpt-5-mini`.
//! - `DATA_PATH` - Optional. Location of the CSV snapshot. Defaults to `data/nba_injuries.csv`.
//! - `ESPN_INJURIES_URL` - Optional. The injury table source page.
//! - `MAX_ROUNDS` - Optional. Agent loop round budget. Defaults to `6`.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenRouter API key
    pub api_key: String,

    /// Model identifier (OpenRouter format)
    pub default_model: String,

    /// CSV snapshot location
    pub data_path: PathBuf,

    /// Injury table source page
    pub source_url: String,

    /// Round budget for the agent loop
    pub max_rounds: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `OPENROUTER_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("OPENROUTER_API_KEY".to_string()))?;

        let default_model =
            std::env::var("DEFAULT_MODEL").unwrap_or_else(|_| "openai/gpt-5-mini".to_string());

        let data_path = std::env::var("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/nba_injuries.csv"));

        let source_url = std::env::var("ESPN_INJURIES_URL")
            .unwrap_or_else(|_| crate::scrape::ESPN_INJURIES_URL.to_string());

        let max_rounds = std::env::var("MAX_ROUNDS")
            .unwrap_or_else(|_| "6".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("MAX_ROUNDS".to_string(), format!("{}", e)))?;

        Ok(Self {
            api_key,
            default_model,
            data_path,
            source_url,
            max_rounds,
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(api_key: String, default_model: String, data_path: PathBuf) -> Self {
        Self {
            api_key,
            default_model,
            data_path,
            source_url: crate::scrape::ESPN_INJURIES_URL.to_string(),
            max_rounds: 6,
        }
    }
}
