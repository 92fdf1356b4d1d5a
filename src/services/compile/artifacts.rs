//! Persistence pass over a compile response tree.
//!
//! Walks the `result` subtree, collects bytecode and ABI members as
//! artifacts, and writes them to conventionally named files. Extraction is
//! pure; only the write step touches the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use super::malformed_hex_chars;
use crate::error::Result;
use crate::types::{ArtifactKind, CompileArtifact};

/// Response member holding contract bytecode.
const KEY_BYTECODE: &str = "code";

/// Response member holding the ABI definition.
const KEY_ABI: &str = "abiDefinition";

/// Walk the `result` subtree and collect every artifact-bearing member.
pub fn extract_artifacts(result: &Value, contract: &str) -> Vec<CompileArtifact> {
    let mut artifacts = Vec::new();
    collect(result, contract, &mut artifacts);
    artifacts
}

fn collect(value: &Value, contract: &str, artifacts: &mut Vec<CompileArtifact>) {
    match value {
        Value::Object(members) => {
            for (key, member) in members {
                match key.as_str() {
                    KEY_BYTECODE => artifacts.push(bytecode_artifact(contract, member)),
                    KEY_ABI => artifacts.push(abi_artifact(contract, member)),
                    _ => collect(member, contract, artifacts),
                }
            }
        }
        Value::Array(elements) => {
            for element in elements {
                collect(element, contract, artifacts);
            }
        }
        _ => {}
    }
}

/// String payloads are taken verbatim; anything else is serialized as JSON.
fn raw_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn bytecode_artifact(contract: &str, value: &Value) -> CompileArtifact {
    // Strip one leading and one trailing quote if present. This is the only
    // unescaping performed; the payload is otherwise written untouched.
    let raw = raw_value(value);
    let stripped = strip_outer_quotes(&raw);

    if let Some(count) = malformed_hex_chars(stripped) {
        if count > 0 {
            tracing::warn!(contract, count, "bytecode contains non-hex characters");
        }
    }

    CompileArtifact {
        contract: contract.to_string(),
        kind: ArtifactKind::Bytecode,
        value: stripped.to_string(),
    }
}

fn abi_artifact(contract: &str, value: &Value) -> CompileArtifact {
    CompileArtifact {
        contract: contract.to_string(),
        kind: ArtifactKind::Abi,
        value: raw_value(value),
    }
}

fn strip_outer_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

/// Write each artifact to `{output_dir}/{contract}.{ext}`, overwriting any
/// previous run's file.
pub fn write_artifacts(artifacts: &[CompileArtifact], output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(artifacts.len());

    for artifact in artifacts {
        let path = artifact.path_in(output_dir);
        fs::write(&path, &artifact.value)?;
        tracing::info!(path = %path.display(), kind = ?artifact.kind, "artifact written");
        written.push(path);
    }

    Ok(written)
}
