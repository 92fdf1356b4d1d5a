//! Funded transfer orchestration.

use std::collections::HashMap;
use std::sync::Arc;

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, B256, U256};
use tokio::sync::Mutex;

use crate::config::Config;
use crate::error::Result;
use crate::ethereum::{tx, EthereumClient, WalletManager};
use crate::services::{ConfirmationPoller, NonceTracker};
use crate::types::{fee_wei, TransferOutcome};

/// Executes funded transfers end to end: fresh nonce, validated construction,
/// submission, confirmation, fee accounting.
///
/// Both submission paths are supported: `transfer` for a node that holds the
/// sender's key, `transfer_signed` for locally held keys.
pub struct TransferService {
    client: Arc<EthereumClient>,
    config: Config,
    nonce: NonceTracker<EthereumClient>,
    poller: ConfirmationPoller<EthereumClient>,
    /// One lock per sending account. Nonce acquisition and submission must
    /// not interleave for the same sender, or two racing transfers could
    /// acquire the same nonce.
    submit_locks: Mutex<HashMap<Address, Arc<Mutex<()>>>>,
}

impl TransferService {
    /// Create a transfer service over a shared client.
    pub fn new(client: Arc<EthereumClient>, config: Config) -> Self {
        let nonce = NonceTracker::new(client.clone());
        let poller = ConfirmationPoller::new(
            client.clone(),
            config.confirmation_attempts,
            config.poll_interval,
        );

        Self { client, config, nonce, poller, submit_locks: Mutex::new(HashMap::new()) }
    }

    /// Transfer `amount_wei` from an account whose key the node manages.
    pub async fn transfer(
        &self,
        from: Address,
        to: Address,
        amount_wei: U256,
    ) -> Result<TransferOutcome> {
        self.transfer_with_limit(from, to, amount_wei, self.config.gas_limit_transfer).await
    }

    /// Transfer `amount_wei` with a locally held key, submitted as a signed
    /// raw payload.
    pub async fn transfer_signed(
        &self,
        wallet: &WalletManager,
        to: Address,
        amount_wei: U256,
    ) -> Result<TransferOutcome> {
        let from = wallet.address();
        let chain_id = self.client.chain_id().await?;

        let lock = self.submit_lock(from).await;
        let guard = lock.lock().await;

        let nonce = self.nonce.next_nonce(from).await?;
        let request = tx::build(tx::TxParams {
            from,
            to: Some(to),
            nonce,
            gas_price: self.config.gas_price,
            gas_limit: self.config.gas_limit_transfer,
            value: amount_wei,
            payload: None,
        })?
        .with_chain_id(chain_id);

        let raw = wallet.sign_request(request).await?;
        let tx_hash = self.client.send_raw_transaction(&raw).await?;
        drop(guard);

        tracing::info!(
            from = %from,
            to = %to,
            nonce,
            amount = %amount_wei,
            tx_hash = %tx_hash,
            "signed transaction submitted"
        );

        self.confirm(tx_hash).await
    }

    /// Top up `account` from the coinbase when its balance is below `min_wei`.
    ///
    /// The balance is re-read here, immediately before the comparison; a
    /// cached value could trigger a transfer the account no longer needs.
    /// Returns the funding outcome, or `None` when the account was already
    /// funded.
    pub async fn ensure_funded(
        &self,
        account: Address,
        min_wei: U256,
    ) -> Result<Option<TransferOutcome>> {
        let balance = self.client.get_balance(account).await?;
        if balance >= min_wei {
            tracing::debug!(account = %account, balance = %balance, "already funded");
            return Ok(None);
        }

        let shortfall = min_wei - balance;
        let coinbase = self.client.coinbase().await?;
        tracing::info!(
            account = %account,
            shortfall = %shortfall,
            coinbase = %coinbase,
            "funding account from coinbase"
        );

        // Funding transfers run with a doubled limit: the coinbase on the
        // dev chain may be a contract wallet whose send costs more than a
        // plain value transfer.
        let limit = self.config.gas_limit_transfer * 2;
        let outcome = self.transfer_with_limit(coinbase, account, shortfall, limit).await?;
        Ok(Some(outcome))
    }

    /// Node-managed submission with an explicit gas limit.
    ///
    /// Nonce and submission failures are fatal and surfaced immediately:
    /// resubmitting after an ambiguous failure risks a double spend. A
    /// confirmation timeout is the distinct named condition carrying the
    /// hash, so the caller can resume polling out-of-band.
    async fn transfer_with_limit(
        &self,
        from: Address,
        to: Address,
        amount_wei: U256,
        gas_limit: u64,
    ) -> Result<TransferOutcome> {
        let lock = self.submit_lock(from).await;
        let guard = lock.lock().await;

        let nonce = self.nonce.next_nonce(from).await?;
        let request = tx::build(tx::TxParams {
            from,
            to: Some(to),
            nonce,
            gas_price: self.config.gas_price,
            gas_limit,
            value: amount_wei,
            payload: None,
        })?;

        let tx_hash = self.client.send_transaction(request).await?;
        drop(guard);

        // The hash is the crash-recovery anchor: logged before polling so a
        // caller can re-derive the outcome if the wait is interrupted.
        tracing::info!(
            from = %from,
            to = %to,
            nonce,
            amount = %amount_wei,
            tx_hash = %tx_hash,
            "transaction submitted"
        );

        self.confirm(tx_hash).await
    }

    async fn confirm(&self, tx_hash: B256) -> Result<TransferOutcome> {
        let receipt = self.poller.await_confirmation(tx_hash).await?;
        let fee = fee_wei(receipt.cumulative_gas_used, self.config.gas_price);
        Ok(TransferOutcome { tx_hash, fee_wei: fee, receipt })
    }

    /// The submit lock for `account`, created on first use.
    async fn submit_lock(&self, account: Address) -> Arc<Mutex<()>> {
        let mut locks = self.submit_locks.lock().await;
        locks.entry(account).or_default().clone()
    }
}
