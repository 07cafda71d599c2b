//! Configuration management for ToolKeeper server

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Remote record store connection settings
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Base URL of the record store REST API (no trailing slash)
    pub base_url: String,
    pub timeout_seconds: u64,
    /// Optional bearer token forwarded on every store request
    pub api_token: Option<String>,
    pub apps: AppIds,
}

/// Application identifiers of the five record collections in the store
#[derive(Debug, Deserialize, Clone)]
pub struct AppIds {
    pub tools: String,
    pub employees: String,
    pub projects: String,
    pub assignments: String,
    pub maintenance: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let config = Config::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default"))
            // Layer on the environment-specific file
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Add environment variables (with prefix TOOLKEEPER_)
            .add_source(
                Environment::with_prefix("TOOLKEEPER")
                    .separator("__")
                    .try_parsing(true),
            )
            // Override store URL from STORE_BASE_URL env var if present
            .set_override_option("store.base_url", env::var("STORE_BASE_URL").ok())?
            // Override store token from STORE_API_TOKEN env var if present
            .set_override_option("store.api_token", env::var("STORE_API_TOKEN").ok())?
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
