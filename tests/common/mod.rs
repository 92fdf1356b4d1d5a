//! Common utilities for integration tests.

use std::sync::Arc;

use ethereum_tx_toolkit::{Config, EthereumClient, TransferService};

/// Shared handles for tests that talk to a real node.
pub struct TestContext {
    pub client: Arc<EthereumClient>,
    pub transfers: TransferService,
    pub config: Config,
}

/// Helper to create a test context against the node configured via
/// environment variables.
///
/// Network tests are opt-in: `ETH_NODE_HOST` must be set explicitly, since
/// the config would otherwise silently default to localhost.
pub fn create_test_context() -> Option<TestContext> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    std::env::var("ETH_NODE_HOST").ok()?;

    let config = Config::from_env().ok()?;
    let client = Arc::new(EthereumClient::new(&config.rpc_url()).ok()?);
    let transfers = TransferService::new(client.clone(), config.clone());

    Some(TestContext { client, transfers, config })
}

/// Skip test if no node is configured (missing env vars).
#[macro_export]
macro_rules! skip_if_no_node {
    () => {
        match common::create_test_context() {
            Some(ctx) => ctx,
            None => {
                eprintln!("Skipping test: ETH_NODE_HOST not set");
                return;
            }
        }
    };
}
