//! Registry of deployed artifact addresses.

use std::collections::HashMap;

use alloy_core::primitives::Address;
use anyhow::{Context, Result};
use derive_more::Deref;

use crate::Artifact;

/// Mapping from artifact to its deployed on-chain address.
///
/// Populated as deployment steps complete; lives for the duration of one run.
#[derive(Debug, Clone, Default, Deref)]
pub struct ArtifactRegistry(HashMap<Artifact, Address>);

impl ArtifactRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a deployed artifact's address.
    pub fn register(&mut self, artifact: Artifact, address: Address) {
        tracing::debug!(%artifact, %address, "Artifact registered");
        self.0.insert(artifact, address);
    }

    /// Look up an already-deployed artifact's address.
    ///
    /// Fails when the artifact was never deployed in this run, e.g. because
    /// its deployment step was skipped for the target environment.
    pub fn address_of(&self, artifact: Artifact) -> Result<Address> {
        self.0.get(&artifact).copied().with_context(|| {
            format!("No deployed address registered for {artifact}; its deployment step did not run")
        })
    }
}
