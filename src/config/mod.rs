//! Configuration management module.
//!
//! Handles loading configuration from environment variables, with
//! demo-calibrated defaults for a local dev node.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::ethereum::constants::{
    DEFAULT_CONFIRMATION_ATTEMPTS, DEFAULT_GAS_LIMIT_CONTRACT, DEFAULT_GAS_LIMIT_TRANSFER,
    DEFAULT_GAS_PRICE, DEFAULT_NODE_HOST, DEFAULT_NODE_PORT, DEFAULT_POLL_INTERVAL_MS,
};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// JSON-RPC node host.
    pub node_host: String,
    /// JSON-RPC node port.
    pub node_port: u16,
    /// Gas price in wei for every submission.
    pub gas_price: u128,
    /// Gas limit for plain ether transfers.
    pub gas_limit_transfer: u64,
    /// Gas limit for contract deployment and calls.
    pub gas_limit_contract: u64,
    /// Receipt queries issued before a submission times out.
    pub confirmation_attempts: u32,
    /// Pause between receipt queries.
    pub poll_interval: Duration,
    /// Private key for the locally-signed submission path (hex, 0x optional).
    pub private_key: Option<String>,
    /// Logging level (default: info).
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_host: DEFAULT_NODE_HOST.to_string(),
            node_port: DEFAULT_NODE_PORT,
            gas_price: DEFAULT_GAS_PRICE,
            gas_limit_transfer: DEFAULT_GAS_LIMIT_TRANSFER,
            gas_limit_contract: DEFAULT_GAS_LIMIT_CONTRACT,
            confirmation_attempts: DEFAULT_CONFIRMATION_ATTEMPTS,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            private_key: None,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (defaults in parentheses):
    /// - `ETH_NODE_HOST`: JSON-RPC host (localhost)
    /// - `ETH_NODE_PORT`: JSON-RPC port (8545)
    /// - `ETH_GAS_PRICE`: gas price in wei (20 gwei)
    /// - `ETH_GAS_LIMIT_TRANSFER`: transfer gas limit (21000)
    /// - `ETH_GAS_LIMIT_CONTRACT`: contract gas limit (500000)
    /// - `ETH_CONFIRMATION_ATTEMPTS`: receipt poll budget (40)
    /// - `ETH_POLL_INTERVAL_MS`: pause between receipt queries (1000)
    /// - `ETH_PRIVATE_KEY`: key for the locally-signed path (unset)
    /// - `LOG_LEVEL`: logging level (info)
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        Ok(Self {
            node_host: env::var("ETH_NODE_HOST").unwrap_or(defaults.node_host),
            node_port: parsed_var("ETH_NODE_PORT")?.unwrap_or(defaults.node_port),
            gas_price: parsed_var("ETH_GAS_PRICE")?.unwrap_or(defaults.gas_price),
            gas_limit_transfer: parsed_var("ETH_GAS_LIMIT_TRANSFER")?
                .unwrap_or(defaults.gas_limit_transfer),
            gas_limit_contract: parsed_var("ETH_GAS_LIMIT_CONTRACT")?
                .unwrap_or(defaults.gas_limit_contract),
            confirmation_attempts: parsed_var("ETH_CONFIRMATION_ATTEMPTS")?
                .unwrap_or(defaults.confirmation_attempts),
            poll_interval: parsed_var("ETH_POLL_INTERVAL_MS")?
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
            private_key: env::var("ETH_PRIVATE_KEY").ok(),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// HTTP endpoint assembled from host and port.
    pub fn rpc_url(&self) -> String {
        format!("http://{}:{}", self.node_host, self.node_port)
    }
}

/// Reads and parses an optional environment variable, reporting the variable
/// name on a malformed value.
fn parsed_var<T: FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| AppError::Config(format!("{name} has an invalid value: {raw}"))),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_dev_chain_calibration() {
        let config = Config::default();
        assert_eq!(config.node_host, "localhost");
        assert_eq!(config.node_port, 8545);
        assert_eq!(config.gas_price, 20_000_000_000);
        assert_eq!(config.gas_limit_transfer, 21_000);
        assert_eq!(config.gas_limit_contract, 500_000);
        assert_eq!(config.confirmation_attempts, 40);
        assert_eq!(config.poll_interval, Duration::from_millis(1_000));
        assert!(config.private_key.is_none());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_rpc_url_assembly() {
        let config =
            Config { node_host: "10.0.0.7".to_string(), node_port: 8646, ..Config::default() };
        assert_eq!(config.rpc_url(), "http://10.0.0.7:8646");
    }

    #[test]
    fn test_parsed_var_absent_is_none() {
        let value: Option<u16> = parsed_var("ETH_TX_TOOLKIT_UNSET_VAR").unwrap();
        assert!(value.is_none());
    }
}
