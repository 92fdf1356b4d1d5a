//! Business logic services module.

pub mod compile;
pub mod nonce;
pub mod poller;
pub mod transfer;

pub use compile::CompileService;
pub use nonce::{NonceTracker, TransactionCountSource};
pub use poller::{ConfirmationPoller, ReceiptSource};
pub use transfer::TransferService;
