//! Compile artifact types.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ethereum::constants::{EXT_ABI, EXT_BINARY};

/// Kind of artifact extracted from a compile response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// Compiled contract bytecode.
    Bytecode,
    /// ABI definition of the contract's callable surface.
    Abi,
}

impl ArtifactKind {
    /// Fixed file extension per kind.
    pub fn extension(self) -> &'static str {
        match self {
            ArtifactKind::Bytecode => EXT_BINARY,
            ArtifactKind::Abi => EXT_ABI,
        }
    }
}

/// A single artifact extracted from a compile response, not yet persisted.
///
/// Fully transient: derived from one response, written once, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompileArtifact {
    /// Name of the contract the artifact belongs to.
    pub contract: String,
    /// What the value represents.
    pub kind: ArtifactKind,
    /// Raw payload to persist.
    pub value: String,
}

impl CompileArtifact {
    /// Conventional file name: `{contract}.{bin|abi}`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.contract, self.kind.extension())
    }

    /// Target path under `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_kind_extensions() {
        assert_eq!(ArtifactKind::Bytecode.extension(), "bin");
        assert_eq!(ArtifactKind::Abi.extension(), "abi");
    }

    #[test]
    fn test_artifact_file_naming() {
        let artifact = CompileArtifact {
            contract: "Greeter".to_string(),
            kind: ArtifactKind::Bytecode,
            value: "0x6001".to_string(),
        };
        assert_eq!(artifact.file_name(), "Greeter.bin");
        assert_eq!(artifact.path_in(Path::new("/tmp/out")), Path::new("/tmp/out/Greeter.bin"));
    }

    #[test]
    fn test_artifact_kind_serialization() {
        assert_eq!(serde_json::to_string(&ArtifactKind::Bytecode).unwrap(), "\"bytecode\"");
        assert_eq!(serde_json::to_string(&ArtifactKind::Abi).unwrap(), "\"abi\"");
    }
}
