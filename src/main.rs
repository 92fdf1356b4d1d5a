//! Ethereum Transaction Toolkit Demo
//!
//! Connects to a dev node, reports its state, runs a funded transfer, and
//! optionally compiles a contract when `SOLIDITY_SOURCE` is set.

use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ethereum_tx_toolkit::services::compile::{read_solidity_source, CompileService};
use ethereum_tx_toolkit::types::units::{from_wei, to_wei, Unit};
use ethereum_tx_toolkit::{Config, EthereumClient, TransferService};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let client = Arc::new(EthereumClient::new(&config.rpc_url())?);

    // Handshake before anything else touches the node.
    let version = client.client_version().await?;
    println!("Connected to {version}\n");

    let coinbase = client.coinbase().await?;
    let accounts = client.accounts().await?;
    println!("Coinbase address: {coinbase}");
    println!(
        "Coinbase balance: {}\n",
        from_wei(client.get_balance(coinbase).await?, Unit::Ether)
    );

    let to = accounts.get(1).copied().ok_or("node exposes no second account to transfer to")?;
    let amount = to_wei("0.123", Unit::Ether)?;

    println!("Transfer {} ether to {to}", from_wei(amount, Unit::Ether));
    println!("Balance before tx: {}", from_wei(client.get_balance(to).await?, Unit::Ether));

    let transfers = TransferService::new(client.clone(), config);
    let outcome = transfers.transfer(coinbase, to, amount).await?;

    println!("Tx hash: {}", outcome.tx_hash);
    println!(
        "Tx cost: {} gas ({} ether)",
        outcome.receipt.cumulative_gas_used,
        outcome.fee_ether()
    );
    println!("Balance after tx: {}\n", from_wei(client.get_balance(to).await?, Unit::Ether));

    if let Ok(source_path) = std::env::var("SOLIDITY_SOURCE") {
        run_compile_demo(client, &source_path).await?;
    }

    Ok(())
}

/// Compile the contract at `source_path` and persist its artifacts.
async fn run_compile_demo(
    client: Arc<EthereumClient>,
    source_path: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let source_path = Path::new(source_path);
    let contract = source_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or("SOLIDITY_SOURCE has no file stem")?;
    let output_dir = std::env::var("ARTIFACT_DIR").unwrap_or_else(|_| ".".to_string());

    let compiler = CompileService::new(client);

    println!("Available compilers:");
    for name in compiler.compilers().await? {
        println!("- {name}");
    }
    println!();

    let source = read_solidity_source(source_path)?;
    let response = compiler.compile(&source).await?;
    let processed = compiler.process(&response, contract, Path::new(&output_dir))?;

    println!("JSON-RPC response");
    print!("{}", processed.rendered);

    for path in processed.written {
        println!("Wrote {}", path.display());
    }

    Ok(())
}
