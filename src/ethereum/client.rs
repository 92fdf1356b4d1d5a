//! Ethereum RPC client.

use alloy::{
    network::Ethereum,
    primitives::{Address, B256, U256},
    providers::{Provider, ProviderBuilder, RootProvider},
    rpc::types::TransactionRequest,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::error::{AppError, Result};
use crate::types::Receipt;

/// Type alias for the HTTP provider.
pub type HttpProvider = RootProvider<Ethereum>;

/// Ethereum RPC client wrapper with lazy initialization.
///
/// Owns the only two transports the system uses: the JSON-RPC provider and a
/// plain HTTP client for the compile-request bypass. Safe to share across
/// concurrent callers.
#[derive(Clone)]
pub struct EthereumClient {
    /// The underlying provider.
    provider: Arc<HttpProvider>,
    /// Plain HTTP client for requests posted outside the typed provider.
    http: reqwest::Client,
    /// RPC URL for logging and direct posts.
    rpc_url: String,
    /// Lazily initialized chain ID.
    chain_id: Arc<OnceCell<u64>>,
}

impl EthereumClient {
    /// Create a new Ethereum client.
    ///
    /// Note: This does NOT make any network calls. The connection is
    /// established lazily when the first operation is performed.
    pub fn new(rpc_url: &str) -> Result<Self> {
        let url = rpc_url
            .parse()
            .map_err(|_| AppError::Config(format!("Invalid RPC URL: {}", rpc_url)))?;

        #[allow(deprecated)]
        let provider = ProviderBuilder::new().connect_http(url).root().clone();

        tracing::info!(rpc_url = %rpc_url, "Ethereum client created (lazy initialization)");

        Ok(Self {
            provider: Arc::new(provider),
            http: reqwest::Client::new(),
            rpc_url: rpc_url.to_string(),
            chain_id: Arc::new(OnceCell::new()),
        })
    }

    /// Get the chain ID (fetches from network on first call).
    ///
    /// The chain ID is immutable per node, so caching it is safe. Nonces and
    /// receipts are not, and are always re-queried.
    pub async fn chain_id(&self) -> Result<u64> {
        self.chain_id
            .get_or_try_init(|| async {
                let chain_id = self.provider.get_chain_id().await?;
                tracing::info!(chain_id = chain_id, rpc_url = %self.rpc_url, "Connected to Ethereum node");
                Ok(chain_id)
            })
            .await
            .copied()
    }

    /// `web3_clientVersion` handshake, useful as a connectivity check.
    pub async fn client_version(&self) -> Result<String> {
        Ok(self.provider.get_client_version().await?)
    }

    /// Balance of `address` at the latest confirmed state, in wei.
    pub async fn get_balance(&self, address: Address) -> Result<U256> {
        let balance = self.provider.get_balance(address).await?;
        Ok(balance)
    }

    /// Transaction count of `address` at the latest confirmed state.
    ///
    /// The reported count is the next nonce for the account.
    pub async fn transaction_count(&self, address: Address) -> Result<u64> {
        let count = self.provider.get_transaction_count(address).latest().await?;
        Ok(count)
    }

    /// `eth_coinbase`, the node's primary (funding) account.
    pub async fn coinbase(&self) -> Result<Address> {
        let coinbase = self.provider.raw_request("eth_coinbase".into(), ()).await?;
        Ok(coinbase)
    }

    /// Addresses whose keys the node manages.
    pub async fn accounts(&self) -> Result<Vec<Address>> {
        let accounts = self.provider.get_accounts().await?;
        Ok(accounts)
    }

    /// Submit an unsigned transaction to a node that holds the sender's key.
    pub async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256> {
        let tx_hash = self.provider.raw_request("eth_sendTransaction".into(), (tx,)).await?;
        Ok(tx_hash)
    }

    /// Submit a pre-signed raw transaction payload.
    pub async fn send_raw_transaction(&self, raw: &[u8]) -> Result<B256> {
        let pending = self.provider.send_raw_transaction(raw).await?;
        Ok(*pending.tx_hash())
    }

    /// One receipt query. `None` until the transaction is mined.
    pub async fn transaction_receipt(&self, tx_hash: B256) -> Result<Option<Receipt>> {
        let receipt = self.provider.get_transaction_receipt(tx_hash).await?;
        Ok(receipt.map(Receipt::from))
    }

    /// Compilers installed on the node (`eth_getCompilers`).
    pub async fn compilers(&self) -> Result<Vec<String>> {
        let compilers = self.provider.raw_request("eth_getCompilers".into(), ()).await?;
        Ok(compilers)
    }

    /// Compile Solidity source by posting the JSON-RPC envelope directly as
    /// the HTTP body.
    ///
    /// The dev node in use rejects the typed `eth_compileSolidity` client
    /// call, so the request is assembled and posted by hand; the response is
    /// returned as an untyped tree for downstream processing.
    pub async fn compile_source(&self, source: &str) -> Result<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": "eth_compileSolidity",
            "params": [source],
            "id": 1,
        });

        tracing::debug!(rpc_url = %self.rpc_url, "posting compile request");

        let response = self.http.post(&self.rpc_url).json(&body).send().await?;
        let response = response.error_for_status()?;
        let tree = response.json::<Value>().await?;
        Ok(tree)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_is_lazy() {
        // No node is listening here; construction must still succeed.
        let client = EthereumClient::new("http://localhost:18545");
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_url() {
        let client = EthereumClient::new("not a url");
        assert!(matches!(client, Err(AppError::Config(_))));
    }

    #[test]
    fn test_client_clone_shares_chain_id_cell() {
        let client = EthereumClient::new("http://localhost:18545").unwrap();
        let clone = client.clone();
        assert!(Arc::ptr_eq(&client.chain_id, &clone.chain_id));
    }
}
