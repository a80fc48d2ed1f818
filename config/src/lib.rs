//! # Configuration Management for QueryWire
//!
//! This crate provides the configuration structures shared by the QueryWire
//! components, most notably the HTTP client settings used by the transport
//! adapter.
//!
//! ## Quick Start
//!
//! ### Programmatic Configuration
//! ```rust
//! use config::ClientConfig;
//!
//! let client_config = ClientConfig::new("https://api.example.com/v1".to_string())
//!     .with_timeout(10)
//!     .with_header("Accept", "application/json");
//! ```
//!
//! ### TOML File Configuration
//! ```toml
//! [client]
//! base_url = "https://api.example.com/v1"
//! timeout_seconds = 30
//! connect_timeout_seconds = 5
//! user_agent = "querywire/0.1"
//!
//! [client.default_headers]
//! Accept = "application/json"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from querywire.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./querywire.toml";
const CONFIG_ENV_VAR: &str = "QUERYWIRE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenv error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub client: ClientConfig,
}

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL every request URI is resolved against
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_connect_timeout_seconds")]
    pub connect_timeout_seconds: u64,
    /// Headers sent with every request unless overridden per call
    #[serde(default)]
    pub default_headers: BTreeMap<String, String>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_connect_timeout_seconds() -> u64 {
    5
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment or the default path
    pub fn load() -> Result<Self, ConfigError> {
        let config = {
            // A missing .env file is fine, the variable may come from the process environment
            match dotenvy::dotenv() {
                Ok(_) => {}
                Err(err) if err.not_found() => {}
                Err(err) => return Err(err.into()),
            }

            if let Ok(config_path) = env::var(CONFIG_ENV_VAR) {
                Self::from_file(&config_path)
            } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
                Self::from_file(DEFAULT_CONFIG_PATH)
            } else {
                Err(ConfigError::Invalid(format!(
                    "Config path must be specified as {} or in {} file",
                    CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH
                )))
            }
        }?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.client.validate()
    }
}

impl ClientConfig {
    /// Create a new client configuration with default timeouts
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            timeout_seconds: default_timeout_seconds(),
            connect_timeout_seconds: default_connect_timeout_seconds(),
            default_headers: BTreeMap::new(),
            user_agent: None,
        }
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_connect_timeout(mut self, connect_timeout_seconds: u64) -> Self {
        self.connect_timeout_seconds = connect_timeout_seconds;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Get connect timeout as Duration
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    /// Validate client settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.is_empty() {
            return Err(ConfigError::Invalid(
                "Client base_url cannot be empty".to_string(),
            ));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "Client base_url must use http or https: {}",
                self.base_url
            )));
        }
        if self.timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Client timeout_seconds must be greater than 0".to_string(),
            ));
        }
        if self.connect_timeout_seconds == 0 {
            return Err(ConfigError::Invalid(
                "Client connect_timeout_seconds must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080".to_string())
    }
}
