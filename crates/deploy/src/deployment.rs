//! Top-level deployment configuration and orchestration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::Environment;
use crate::accounts::OwnerSource;
use crate::artifacts::ArtifactStore;
use crate::backend::{ChainBackend, DEFAULT_GAS_LIMIT, RpcBackend};
use crate::profiles::Profile;
use crate::sequencer::{DeploymentReport, Sequencer};

/// The default name for the deployment configuration file.
pub const WSLPCONF_FILENAME: &str = "Wslp.toml";

fn default_gas_limit() -> u64 {
    DEFAULT_GAS_LIMIT
}

/// One deployment run's configuration.
///
/// This struct contains everything needed to run a deployment against a
/// target environment and can be serialized to/from TOML format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    /// The target environment name.
    pub environment: Environment,
    /// JSON-RPC endpoint of the node executing the run.
    pub rpc_url: Url,
    /// Directory holding the compiled contract artifacts.
    pub artifacts_dir: PathBuf,
    /// The deployment profile to run.
    pub profile: Profile,
    /// Gas limit attached to each transaction.
    #[serde(default = "default_gas_limit")]
    pub gas_limit: u64,
}

impl Deployment {
    /// Save the configuration to a TOML file.
    pub fn save_to_file(&self, path: &PathBuf) -> Result<()> {
        let content =
            toml::to_string_pretty(self).context("Failed to serialize deployment config to TOML")?;
        std::fs::write(path, content)
            .context(format!("Failed to write config to {}", path.display()))?;
        tracing::info!(path = %path.display(), "Configuration saved");
        Ok(())
    }

    /// Load the configuration from a TOML file.
    pub fn load_from_file(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!(
                "Configuration file or directory not found: {}",
                path.display()
            ));
        }

        let config_path = if path.is_dir() {
            path.join(WSLPCONF_FILENAME)
        } else {
            path.to_path_buf()
        };

        let content = std::fs::read_to_string(config_path)
            .context(format!("Failed to read config from {}", path.display()))?;
        let config: Self =
            toml::from_str(&content).context("Failed to parse config file as TOML")?;
        tracing::info!(path = %path.display(), "Configuration loaded");
        Ok(config)
    }

    /// Save the configuration to its default location next to the artifacts.
    pub fn save_config(&self) -> Result<PathBuf> {
        let config_path = self.artifacts_dir.join(WSLPCONF_FILENAME);
        self.save_to_file(&config_path)?;
        Ok(config_path)
    }

    /// Execute the configured deployment run.
    ///
    /// Returns the run's report; setup failures (unreachable node, owner
    /// resolution) surface as errors before any step executes.
    pub async fn deploy(self) -> Result<DeploymentReport> {
        tracing::info!(
            environment = %self.environment,
            profile = %self.profile,
            rpc_url = %self.rpc_url,
            "Starting deployment run..."
        );

        let artifacts = ArtifactStore::new(self.artifacts_dir.clone());
        let backend = RpcBackend::connect(self.rpc_url.clone(), artifacts, self.gas_limit)
            .await
            .context("Failed to connect to the node")?;

        let pool = backend.accounts().await?;
        let owners = OwnerSource::for_environment(&self.environment)
            .resolve(&pool)
            .context("Failed to resolve the wallet owner list")?;
        tracing::debug!(?owners, "Resolved wallet owners");

        let steps = self.profile.steps();
        let report = Sequencer::new(backend, self.environment, owners, steps)
            .run()
            .await;

        if report.failure.is_none() {
            tracing::info!("✓ Deployment complete!");
            for (artifact, address) in report.registry.iter() {
                tracing::info!("{}: {}", artifact, address);
            }
        }

        Ok(report)
    }
}
