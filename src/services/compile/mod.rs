//! Contract compilation pipeline.
//!
//! Drives `eth_compileSolidity` and processes the untyped response tree: an
//! `error` member short-circuits, a `result` member is rendered for
//! inspection and mined for artifacts (bytecode, ABI) to persist. Rendering
//! and persistence are two independent passes over the same subtree.

pub mod artifacts;
pub mod render;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde_json::Value;

use crate::error::{AppError, Result};
use crate::ethereum::EthereumClient;

pub use artifacts::{extract_artifacts, write_artifacts};
pub use render::render;

/// Result of processing one compile response.
#[derive(Debug, Clone)]
pub struct ProcessedCompile {
    /// Human-readable rendering of the `result` subtree.
    pub rendered: String,
    /// Paths of the artifact files written.
    pub written: Vec<PathBuf>,
}

/// Compilation service over the node's compiler endpoint.
pub struct CompileService {
    client: Arc<EthereumClient>,
}

impl CompileService {
    /// Create a compile service over a shared client.
    pub fn new(client: Arc<EthereumClient>) -> Self {
        Self { client }
    }

    /// Compilers installed on the node.
    pub async fn compilers(&self) -> Result<Vec<String>> {
        self.client.compilers().await
    }

    /// Compile `source` and return the decoded response tree.
    pub async fn compile(&self, source: &str) -> Result<Value> {
        self.client.compile_source(source).await
    }

    /// Process a compile response: fail on an `error` member, otherwise
    /// render the `result` subtree and persist its artifacts under
    /// `output_dir`.
    pub fn process(
        &self,
        response: &Value,
        contract: &str,
        output_dir: &Path,
    ) -> Result<ProcessedCompile> {
        process_response(response, contract, output_dir)
    }
}

/// Standalone form of [`CompileService::process`]; the processing itself
/// needs no transport.
pub fn process_response(
    response: &Value,
    contract: &str,
    output_dir: &Path,
) -> Result<ProcessedCompile> {
    if let Some(error) = response.get("error") {
        let code = error.get("code").and_then(Value::as_i64).unwrap_or_default();
        let message =
            error.get("message").and_then(Value::as_str).unwrap_or_default().to_string();
        tracing::error!(code, message = %message, "compiler reported an error");
        return Err(AppError::Compile { code, message });
    }

    let Some(result) = response.get("result") else {
        tracing::warn!("compile response carries neither result nor error");
        return Ok(ProcessedCompile { rendered: String::new(), written: Vec::new() });
    };

    let rendered = render::render(result);
    let extracted = artifacts::extract_artifacts(result, contract);
    let written = artifacts::write_artifacts(&extracted, output_dir)?;

    Ok(ProcessedCompile { rendered, written })
}

/// Count of characters outside the lowercase hex alphabet in a `0x`-prefixed
/// payload. `None` when the value is not hex-prefixed.
///
/// A nonzero count is a data-quality signal, not a correctness gate; callers
/// report it as a warning and continue.
pub fn malformed_hex_chars(value: &str) -> Option<usize> {
    let payload = value.strip_prefix("0x")?;
    Some(payload.chars().filter(|c| !matches!(c, '0'..='9' | 'a'..='f')).count())
}

/// Read a Solidity source file into a single line, ready to embed in the
/// compile request body: `//` comments dropped, whitespace runs collapsed.
pub fn read_solidity_source(path: &Path) -> Result<String> {
    let raw = std::fs::read_to_string(path)?;

    let mut text = String::new();
    for line in raw.lines() {
        let line = match line.find("//") {
            Some(pos) => &line[..pos],
            None => line,
        };
        if !text.is_empty() {
            text.push(' ');
        }
        text.push_str(line);
    }

    Ok(text.split_whitespace().collect::<Vec<_>>().join(" "))
}
