//! Wallet management.

use alloy::{
    eips::eip2718::Encodable2718,
    network::{EthereumWallet, TransactionBuilder},
    primitives::Address,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};

use crate::error::{AppError, Result};

/// Locally held credentials for the raw-submission path.
#[derive(Clone)]
pub struct WalletManager {
    /// The local signer.
    signer: PrivateKeySigner,
    /// Wallet address.
    address: Address,
}

impl WalletManager {
    /// Create a wallet manager from a private key string.
    pub fn from_private_key(private_key: &str) -> Result<Self> {
        // Remove 0x prefix if present
        let key = private_key.strip_prefix("0x").unwrap_or(private_key);

        let signer: PrivateKeySigner = key.parse()?;
        let address = signer.address();

        tracing::info!(address = %address, "Wallet initialized");

        Ok(Self { signer, address })
    }

    /// Get the wallet address.
    pub fn address(&self) -> Address {
        self.address
    }

    /// Sign a complete transaction request into a raw payload ready for
    /// `eth_sendRawTransaction`.
    ///
    /// The request must already carry nonce, gas fields, value and chain id;
    /// signing fills nothing in.
    pub async fn sign_request(&self, tx: TransactionRequest) -> Result<Vec<u8>> {
        let wallet = EthereumWallet::from(self.signer.clone());
        let envelope = tx.build(&wallet).await.map_err(|e| AppError::Wallet(e.to_string()))?;
        Ok(envelope.encoded_2718())
    }
}

impl std::fmt::Debug for WalletManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletManager").field("address", &self.address).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{TxKind, U256};

    // A valid test private key (DO NOT use in production!)
    // This is a well-known test key from Hardhat/Foundry
    const TEST_PRIVATE_KEY: &str =
        "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_PRIVATE_KEY_NO_PREFIX: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_wallet_from_private_key_with_prefix() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();
        // The first Hardhat account address (compare case-insensitively)
        let addr_str = format!("{:?}", wallet.address()).to_lowercase();
        assert_eq!(addr_str, "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    }

    #[test]
    fn test_wallet_from_private_key_without_prefix() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY_NO_PREFIX).unwrap();
        let addr_str = format!("{:?}", wallet.address()).to_lowercase();
        assert_eq!(addr_str, "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    }

    #[test]
    fn test_wallet_invalid_private_key() {
        // Too short
        assert!(WalletManager::from_private_key("0x1234").is_err());

        // Invalid hex
        assert!(WalletManager::from_private_key("0xZZZZ").is_err());

        // Empty
        assert!(WalletManager::from_private_key("").is_err());
    }

    #[test]
    fn test_wallet_debug_redacts_key() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let debug_str = format!("{:?}", wallet);

        assert!(debug_str.contains("WalletManager"));
        assert!(debug_str.contains("address"));
        // Should NOT contain the private key
        assert!(
            !debug_str.contains("ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80")
        );
    }

    #[tokio::test]
    async fn test_sign_request_produces_raw_payload() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();

        let tx = TransactionRequest::default()
            .with_from(wallet.address())
            .with_kind(TxKind::Call("0x70997970c51812dc3a010c7d01b50e0d17dc79c8".parse().unwrap()))
            .with_nonce(0)
            .with_gas_price(20_000_000_000)
            .with_gas_limit(21_000)
            .with_value(U256::from(1u64))
            .with_chain_id(1337);

        let raw = wallet.sign_request(tx).await.unwrap();
        assert!(!raw.is_empty());
    }

    #[tokio::test]
    async fn test_sign_request_rejects_incomplete_request() {
        let wallet = WalletManager::from_private_key(TEST_PRIVATE_KEY).unwrap();

        // No gas fields, no nonce: the signer cannot build an envelope.
        let tx = TransactionRequest::default();
        let result = wallet.sign_request(tx).await;
        assert!(matches!(result, Err(AppError::Wallet(_))));
    }
}
