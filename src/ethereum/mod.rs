//! Ethereum interaction module.
//!
//! Contains the RPC client, transaction construction, and wallet management.

pub mod client;
pub mod constants;
pub mod tx;
pub mod wallet;

pub use client::{EthereumClient, HttpProvider};
pub use wallet::WalletManager;
