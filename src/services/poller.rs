//! Receipt confirmation polling.

use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::B256;
use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::ethereum::EthereumClient;
use crate::types::Receipt;

/// Source of transaction receipts.
#[async_trait]
pub trait ReceiptSource: Send + Sync {
    /// One receipt query. `None` until the transaction is mined.
    async fn transaction_receipt(&self, tx_hash: B256) -> Result<Option<Receipt>>;
}

#[async_trait]
impl ReceiptSource for EthereumClient {
    async fn transaction_receipt(&self, tx_hash: B256) -> Result<Option<Receipt>> {
        EthereumClient::transaction_receipt(self, tx_hash).await
    }
}

/// Polls for a transaction receipt until confirmed or the attempt budget is
/// exhausted.
///
/// A fixed attempt count and a fixed interval give a deterministic worst-case
/// wait. No backoff: block production on the target chain is roughly
/// constant, and a tight fixed poll keeps added latency minimal in the common
/// case of confirmation within a block or two.
pub struct ConfirmationPoller<S> {
    source: Arc<S>,
    attempts: u32,
    interval: Duration,
}

impl<S: ReceiptSource> ConfirmationPoller<S> {
    /// Create a poller with the given attempt budget and inter-query pause.
    pub fn new(source: Arc<S>, attempts: u32, interval: Duration) -> Self {
        Self { source, attempts, interval }
    }

    /// Wait until a receipt is available or the budget runs out.
    ///
    /// Issues exactly `attempts` receipt queries in the worst case and sleeps
    /// only between queries; a receipt on the first query returns without
    /// sleeping at all. A transport failure aborts the wait immediately.
    pub async fn await_confirmation(&self, tx_hash: B256) -> Result<Receipt> {
        for attempt in 1..=self.attempts {
            if let Some(receipt) = self.source.transaction_receipt(tx_hash).await? {
                tracing::info!(tx_hash = %tx_hash, attempt, "transaction confirmed");
                return Ok(receipt);
            }

            tracing::debug!(tx_hash = %tx_hash, attempt, "no receipt yet");

            if attempt < self.attempts {
                tokio::time::sleep(self.interval).await;
            }
        }

        tracing::warn!(
            tx_hash = %tx_hash,
            attempts = self.attempts,
            "receipt still missing, giving up"
        );
        Err(AppError::ConfirmationTimeout { tx_hash })
    }
}
