//! Ethereum Transaction Toolkit Library
//!
//! Client-side orchestration for an Ethereum-compatible JSON-RPC node:
//! nonce-tracked transfers with bounded confirmation polling, value unit
//! conversion, and contract-compilation artifact processing.
//!
//! # Features
//!
//! - **Transfers**: node-managed and locally-signed submission paths, with
//!   per-sender nonce serialization and fee accounting
//! - **Confirmation Polling**: deterministic attempt budget over a fixed
//!   interval, timeout carries the transaction hash
//! - **Compile Processing**: walks an `eth_compileSolidity` response tree,
//!   renders it for inspection, persists bytecode and ABI artifacts
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use ethereum_tx_toolkit::{Config, EthereumClient, TransferService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = Arc::new(EthereumClient::new(&config.rpc_url())?);
//!     let transfers = TransferService::new(client, config);
//!     // transfers.transfer(from, to, amount_wei).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod ethereum;
pub mod services;
pub mod types;

pub use config::Config;
pub use error::{AppError, Result};
pub use ethereum::constants::*;
pub use ethereum::{EthereumClient, WalletManager};
pub use services::{CompileService, ConfirmationPoller, NonceTracker, TransferService};
