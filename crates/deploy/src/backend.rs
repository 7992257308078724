//! Chain backend: the boundary to the node that executes deployments.

use std::future::Future;
use std::str::FromStr;

use alloy_core::primitives::Address;
use anyhow::{Context, Result};
use url::Url;

use crate::Artifact;
use crate::abi::{self, AbiValue};
use crate::artifacts::ArtifactStore;
use crate::rpc::{RpcClient, TxReceipt};

/// Default gas limit attached to deployment and call transactions.
pub const DEFAULT_GAS_LIMIT: u64 = 6_000_000;

/// Boundary to the execution environment that deploys contracts and runs
/// post-deploy calls.
pub trait ChainBackend: Send + Sync {
    /// The node's unlocked account pool, in provisioning order.
    fn accounts(&self) -> impl Future<Output = Result<Vec<Address>>> + Send;

    /// Deploy an artifact with the given constructor arguments, returning
    /// the new contract's address.
    fn deploy(
        &self,
        artifact: Artifact,
        args: &[AbiValue],
    ) -> impl Future<Output = Result<Address>> + Send;

    /// Invoke a method on an already-deployed contract.
    fn call(
        &self,
        target: Address,
        method: &'static str,
        args: &[AbiValue],
    ) -> impl Future<Output = Result<()>> + Send;
}

impl<B: ChainBackend> ChainBackend for &B {
    fn accounts(&self) -> impl Future<Output = Result<Vec<Address>>> + Send {
        (**self).accounts()
    }

    fn deploy(
        &self,
        artifact: Artifact,
        args: &[AbiValue],
    ) -> impl Future<Output = Result<Address>> + Send {
        (**self).deploy(artifact, args)
    }

    fn call(
        &self,
        target: Address,
        method: &'static str,
        args: &[AbiValue],
    ) -> impl Future<Output = Result<()>> + Send {
        (**self).call(target, method, args)
    }
}

/// JSON-RPC backend submitting node-signed transactions.
///
/// Every transaction is sent from the node's first unlocked account and
/// confirmed by polling for its receipt before the next step proceeds.
pub struct RpcBackend {
    rpc: RpcClient,
    artifacts: ArtifactStore,
    gas_limit: u64,
    pool: Vec<Address>,
    sender: Address,
}

impl RpcBackend {
    /// Connect to the node and cache its account pool.
    pub async fn connect(url: Url, artifacts: ArtifactStore, gas_limit: u64) -> Result<Self> {
        let rpc = RpcClient::new(url)?;
        let pool = fetch_accounts(&rpc).await?;
        let sender = *pool.first().context("Node returned an empty account pool")?;
        tracing::debug!(%sender, accounts = pool.len(), "Connected to node");

        Ok(Self {
            rpc,
            artifacts,
            gas_limit,
            pool,
            sender,
        })
    }

    async fn send_and_confirm(&self, tx: serde_json::Value) -> Result<(String, TxReceipt)> {
        let tx_hash = self.rpc.send_transaction(tx).await?;
        let receipt = self.rpc.wait_for_receipt(&tx_hash).await?;
        Ok((tx_hash, receipt))
    }
}

impl ChainBackend for RpcBackend {
    async fn accounts(&self) -> Result<Vec<Address>> {
        Ok(self.pool.clone())
    }

    async fn deploy(&self, artifact: Artifact, args: &[AbiValue]) -> Result<Address> {
        let bytecode = self.artifacts.bytecode(artifact)?;
        let data = abi::encode_deploy(&bytecode, args);
        tracing::debug!(%artifact, args = args.len(), "Submitting deployment transaction");

        let (tx_hash, receipt) = self
            .send_and_confirm(serde_json::json!({
                "from": self.sender.to_string(),
                "data": data,
                "gas": format!("{:#x}", self.gas_limit),
            }))
            .await
            .with_context(|| format!("Failed to deploy {artifact}"))?;

        if !receipt.succeeded() {
            anyhow::bail!("Deployment of {artifact} reverted (tx {tx_hash})");
        }

        let address = receipt.contract_address.with_context(|| {
            format!("Receipt for {artifact} deployment carries no contract address")
        })?;
        Address::from_str(&address)
            .with_context(|| format!("Node returned invalid contract address {address}"))
    }

    async fn call(&self, target: Address, method: &'static str, args: &[AbiValue]) -> Result<()> {
        let data = abi::encode_call(method, args);
        tracing::debug!(%target, method, "Submitting call transaction");

        let (tx_hash, receipt) = self
            .send_and_confirm(serde_json::json!({
                "from": self.sender.to_string(),
                "to": target.to_string(),
                "data": data,
                "gas": format!("{:#x}", self.gas_limit),
            }))
            .await
            .with_context(|| format!("Failed to call {method} on {target}"))?;

        if !receipt.succeeded() {
            anyhow::bail!("Call to {method} on {target} reverted (tx {tx_hash})");
        }

        Ok(())
    }
}

async fn fetch_accounts(rpc: &RpcClient) -> Result<Vec<Address>> {
    let raw = rpc
        .accounts()
        .await
        .context("Failed to query the node account pool")?;

    raw.iter()
        .map(|account| {
            Address::from_str(account)
                .with_context(|| format!("Node returned invalid account address {account}"))
        })
        .collect()
}
