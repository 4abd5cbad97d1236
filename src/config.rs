//! Service configuration.
//!
//! Values come from the environment, falling back to defaults.

use ethers::types::Address;
use serde::{Deserialize, Serialize};
use std::{env, net::SocketAddr, str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
    #[error("request timeout cannot be 0")]
    ZeroTimeout,
    #[error("ethereum rpc and escrow address must be configured together")]
    PartialLedger,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub listen_addr: SocketAddr,
    pub request_timeout_ms: u64,
    pub log_level: String,
    pub ethereum_rpc: Option<String>,
    pub escrow_address: Option<Address>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([127, 0, 0, 1], 7000)),
            request_timeout_ms: 5_000,
            log_level: "info".to_string(),
            ethereum_rpc: None,
            escrow_address: None,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { name, value }),
        Err(_) => Ok(None),
    }
}

impl ServiceConfig {
    /// Loads configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `CHANNEL_STATE_LISTEN_ADDR`: bind address (default: 127.0.0.1:7000)
    /// - `CHANNEL_STATE_REQUEST_TIMEOUT_MS`: per-request timeout (default: 5000)
    /// - `CHANNEL_STATE_LOG_LEVEL` or `RUST_LOG`: log filter (default: info)
    /// - `CHANNEL_STATE_ETHEREUM_RPC`: ethereum json-rpc endpoint
    /// - `CHANNEL_STATE_ESCROW_ADDRESS`: MultiPartyEscrow contract address
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let config = Self {
            listen_addr: parse_var("CHANNEL_STATE_LISTEN_ADDR")?.unwrap_or(defaults.listen_addr),
            request_timeout_ms: parse_var("CHANNEL_STATE_REQUEST_TIMEOUT_MS")?
                .unwrap_or(defaults.request_timeout_ms),
            log_level: env::var("CHANNEL_STATE_LOG_LEVEL")
                .or_else(|_| env::var("RUST_LOG"))
                .unwrap_or(defaults.log_level),
            ethereum_rpc: env::var("CHANNEL_STATE_ETHEREUM_RPC").ok(),
            escrow_address: parse_var("CHANNEL_STATE_ESCROW_ADDRESS")?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        if self.ethereum_rpc.is_some() != self.escrow_address.is_some() {
            return Err(ConfigError::PartialLedger);
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
