//! services/portal/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::path::PathBuf;
use tracing::Level;
use url::Url;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the remote user-management API.
    pub api_base_url: Url,
    /// Path of the JSON document holding the persisted session pair.
    pub storage_path: PathBuf,
    pub log_level: Level,
    /// Credentials for a headless login when no session is stored.
    pub login_email: Option<String>,
    pub login_password: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        let api_base_url_str = std::env::var("TASKHIVE_API_URL")
            .map_err(|_| ConfigError::MissingVar("TASKHIVE_API_URL".to_string()))?;
        let api_base_url = Url::parse(&api_base_url_str).map_err(|e| {
            ConfigError::InvalidValue("TASKHIVE_API_URL".to_string(), e.to_string())
        })?;

        let storage_path = std::env::var("TASKHIVE_STORAGE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./taskhive-session.json"));

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        // --- Load Login Credentials (as optional) ---
        let login_email = std::env::var("TASKHIVE_EMAIL").ok();
        let login_password = std::env::var("TASKHIVE_PASSWORD").ok();

        Ok(Self {
            api_base_url,
            storage_path,
            log_level,
            login_email,
            login_password,
        })
    }
}
