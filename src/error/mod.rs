//! Error types and handling module.
//!
//! Defines all application-specific error types and conversions.

use alloy::primitives::B256;
use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Ethereum RPC errors.
    #[error("Ethereum RPC error: {0}")]
    Rpc(String),

    /// Transport errors.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Malformed decimal amount.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Transaction fields failed local validation before any network call.
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    /// Wallet-related errors.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The receipt poll budget ran out before the transaction was mined.
    /// Carries the hash so the caller can resume polling out-of-band.
    #[error("No receipt for transaction {tx_hash} within the attempt budget")]
    ConfirmationTimeout { tx_hash: B256 },

    /// The compile response carried an `error` member.
    #[error("Compiler error {code}: {message}")]
    Compile { code: i64, message: String },

    /// Filesystem error while persisting artifacts or reading sources.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<alloy::transports::TransportError> for AppError {
    fn from(err: alloy::transports::TransportError) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<alloy::signers::local::LocalSignerError> for AppError {
    fn from(err: alloy::signers::local::LocalSignerError) -> Self {
        AppError::Wallet(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
