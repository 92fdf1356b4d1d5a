//! Transaction lifecycle types.

use alloy::primitives::{B256, U256};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::units::u256_to_decimal;

/// Node-issued confirmation record for a mined transaction.
///
/// Produced once, asynchronously, by the node; absent until mined. Never
/// cached across orchestration calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receipt {
    /// Hash of the confirmed transaction.
    pub transaction_hash: B256,
    /// Gas consumed in the block up to and including this transaction.
    pub cumulative_gas_used: u64,
    /// Hash of the containing block, if the node reports it.
    pub block_hash: Option<B256>,
    /// Execution status as surfaced by the chain.
    pub status: bool,
}

impl From<alloy::rpc::types::TransactionReceipt> for Receipt {
    fn from(receipt: alloy::rpc::types::TransactionReceipt) -> Self {
        use alloy::consensus::TxReceipt;

        Self {
            transaction_hash: receipt.transaction_hash,
            cumulative_gas_used: receipt.inner.cumulative_gas_used(),
            block_hash: receipt.block_hash,
            status: receipt.status(),
        }
    }
}

/// Outcome of a confirmed transfer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferOutcome {
    /// Hash returned by submission, the key used for confirmation polling.
    pub tx_hash: B256,
    /// Fee paid, in wei.
    pub fee_wei: U256,
    /// The confirming receipt.
    pub receipt: Receipt,
}

impl TransferOutcome {
    /// Fee in ether, for display.
    pub fn fee_ether(&self) -> Decimal {
        u256_to_decimal(self.fee_wei, 18)
    }
}

/// Fee paid for a mined transaction.
///
/// Always derived from the receipt on demand, never stored independently.
pub fn fee_wei(cumulative_gas_used: u64, gas_price: u128) -> U256 {
    U256::from(cumulative_gas_used) * U256::from(gas_price)
}
