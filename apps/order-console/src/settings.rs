//! Console Configuration Settings
//!
//! Loaded from environment variables (a `.env` file is honored by the binary).

use std::time::Duration;

/// Default order API base URL.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Console configuration.
#[derive(Debug, Clone)]
pub struct ConsoleSettings {
    /// Base URL of the order REST API, without trailing slash.
    pub api_base_url: String,
    /// Listen port.
    pub port: u16,
    /// Bind address.
    pub bind_address: String,
    /// Timeout for each upstream request.
    pub request_timeout: Duration,
}

impl Default for ConsoleSettings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            port: 8081,
            bind_address: "0.0.0.0".to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl ConsoleSettings {
    /// Create configuration from environment variables.
    ///
    /// - `ORDERS_API_URL` (default `http://localhost:8080`)
    /// - `CONSOLE_PORT` (default 8081)
    /// - `CONSOLE_BIND_ADDRESS` (default `0.0.0.0`)
    /// - `CONSOLE_API_TIMEOUT_SECS` (default 10)
    ///
    /// # Errors
    ///
    /// Returns an error if `ORDERS_API_URL` is set but empty or not an HTTP URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_base_url = match std::env::var("ORDERS_API_URL") {
            Ok(url) => parse_api_url(&url)?,
            Err(_) => defaults.api_base_url,
        };

        Ok(Self {
            api_base_url,
            port: parse_env_u16("CONSOLE_PORT", defaults.port),
            bind_address: std::env::var("CONSOLE_BIND_ADDRESS")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or(defaults.bind_address),
            request_timeout: parse_env_duration_secs(
                "CONSOLE_API_TIMEOUT_SECS",
                defaults.request_timeout,
            ),
        })
    }

    /// `bind_address:port`.
    #[must_use]
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Environment variable has empty value.
    #[error("environment variable {0} cannot be empty")]
    EmptyValue(String),
    /// URL without an http(s) scheme.
    #[error("{name} must be an http:// or https:// URL, got '{value}'")]
    InvalidUrl {
        /// Variable name.
        name: String,
        /// Rejected value.
        value: String,
    },
}

/// Normalize an API base URL: trimmed, scheme checked, trailing slash removed.
pub fn parse_api_url(raw: &str) -> Result<String, ConfigError> {
    let url = raw.trim();
    if url.is_empty() {
        return Err(ConfigError::EmptyValue("ORDERS_API_URL".to_string()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(ConfigError::InvalidUrl {
            name: "ORDERS_API_URL".to_string(),
            value: url.to_string(),
        });
    }
    Ok(url.trim_end_matches('/').to_string())
}

fn parse_env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_duration_secs(key: &str, default: Duration) -> Duration {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map_or(default, Duration::from_secs)
}
