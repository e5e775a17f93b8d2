use std::net::SocketAddr;

use thiserror::Error;

pub const HTTP_ADDR_VAR: &str = "ORDER_HTTP_ADDR";
pub const STORE_BUFFER_VAR: &str = "ORDER_STORE_BUFFER";
pub const LOG_LEVEL_VAR: &str = "ORDER_LOG_LEVEL";

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Runtime settings for the order system and its HTTP front.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemConfig {
    pub http_addr: SocketAddr,
    /// Capacity of the store actor's request channel.
    pub store_buffer_size: usize,
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            http_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            store_buffer_size: 100,
            log_level: "info".to_string(),
        }
    }
}

impl SystemConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Unset keys keep their defaults; set but unparseable keys are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(HTTP_ADDR_VAR) {
            config.http_addr = value
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: HTTP_ADDR_VAR, value })?;
        }
        if let Some(value) = lookup(STORE_BUFFER_VAR) {
            config.store_buffer_size = match value.parse() {
                Ok(size) if size > 0 => size,
                _ => return Err(ConfigError::InvalidValue { key: STORE_BUFFER_VAR, value }),
            };
        }
        if let Some(value) = lookup(LOG_LEVEL_VAR) {
            config.log_level = value;
        }

        Ok(config)
    }
}
