//! Compiled contract artifacts.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::Artifact;

/// Store of compiled contract artifacts, one `<Name>.json` per contract.
///
/// Contracts are opaque to this tool; the only field read is the creation
/// bytecode the compiler wrote into the artifact file.
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Load an artifact's creation bytecode, as hex without a 0x prefix.
    pub fn bytecode(&self, artifact: Artifact) -> Result<String> {
        let path = self.dir.join(format!("{artifact}.json"));
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read artifact {}", path.display()))?;
        let data: Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse artifact {}", path.display()))?;

        let bytecode = data["bytecode"]
            .as_str()
            .with_context(|| format!("No bytecode field in artifact {}", path.display()))?;

        let bytecode = bytecode.trim_start_matches("0x");
        if bytecode.is_empty() || !bytecode.chars().all(|c| c.is_ascii_hexdigit()) {
            anyhow::bail!("Artifact {} has invalid bytecode hex", path.display());
        }

        Ok(bytecode.to_string())
    }
}
