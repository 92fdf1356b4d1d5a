//! Demo-calibrated defaults for the target dev chain.
//!
//! Every value here is a configuration default, not an invariant; `Config`
//! overlays environment overrides on top.

// ============================================================================
// Node endpoint
// ============================================================================

/// Default JSON-RPC host.
pub const DEFAULT_NODE_HOST: &str = "localhost";

/// Default JSON-RPC port.
pub const DEFAULT_NODE_PORT: u16 = 8545;

// ============================================================================
// Gas
// ============================================================================

/// Default gas price in wei (20 gwei).
pub const DEFAULT_GAS_PRICE: u128 = 20_000_000_000;

/// Gas limit for a plain ether transfer.
pub const DEFAULT_GAS_LIMIT_TRANSFER: u64 = 21_000;

/// Gas limit for contract deployment and contract calls.
pub const DEFAULT_GAS_LIMIT_CONTRACT: u64 = 500_000;

// ============================================================================
// Confirmation polling
// ============================================================================

/// Receipt queries issued before a submission is declared timed out.
pub const DEFAULT_CONFIRMATION_ATTEMPTS: u32 = 40;

/// Pause between receipt queries, in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1_000;

// ============================================================================
// Contract file extensions
// ============================================================================

/// Solidity source files.
pub const EXT_SOLIDITY: &str = "sol";

/// Compiled bytecode artifacts.
pub const EXT_BINARY: &str = "bin";

/// ABI definition artifacts.
pub const EXT_ABI: &str = "abi";
