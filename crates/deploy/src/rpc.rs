//! JSON-RPC client for the target chain.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Timeout for individual RPC requests.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval between receipt polling attempts.
const RECEIPT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Maximum time to wait for a transaction to be mined.
const RECEIPT_TIMEOUT: Duration = Duration::from_secs(120);

/// A mined transaction receipt, reduced to the fields the sequencer needs.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxReceipt {
    /// Execution status: `0x1` on success, `0x0` on revert.
    pub status: String,
    /// Address of the created contract, for deployment transactions.
    pub contract_address: Option<String>,
}

impl TxReceipt {
    pub fn succeeded(&self) -> bool {
        self.status == "0x1"
    }
}

/// Thin JSON-RPC client over the node endpoint.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: reqwest::Client,
    url: Url,
}

impl RpcClient {
    pub fn new(url: Url) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client, url })
    }

    /// Make a JSON-RPC call and deserialize the result.
    pub async fn call<T: DeserializeOwned>(&self, method: &str, params: Vec<Value>) -> Result<T> {
        let response = self
            .client
            .post(self.url.clone())
            .json(&serde_json::json!({
                "jsonrpc": "2.0",
                "method": method,
                "params": params,
                "id": 1
            }))
            .send()
            .await
            .with_context(|| format!("Failed to send {} request", method))?;

        let body: Value = response
            .json()
            .await
            .with_context(|| format!("Failed to parse {} response", method))?;

        if let Some(error) = body.get("error") {
            anyhow::bail!(
                "RPC error from {}: {}",
                method,
                error
                    .get("message")
                    .and_then(|m| m.as_str())
                    .unwrap_or("unknown")
            );
        }

        let result = body.get("result").context("No result in response")?.clone();
        serde_json::from_value(result)
            .with_context(|| format!("Failed to deserialize {} result", method))
    }

    /// The node's unlocked account pool, in provisioning order.
    pub async fn accounts(&self) -> Result<Vec<String>> {
        self.call("eth_accounts", vec![]).await
    }

    /// Submit a node-signed transaction, returning its hash.
    pub async fn send_transaction(&self, tx: Value) -> Result<String> {
        self.call("eth_sendTransaction", vec![tx]).await
    }

    /// Poll for a transaction's receipt until it is mined.
    pub async fn wait_for_receipt(&self, tx_hash: &str) -> Result<TxReceipt> {
        let start = std::time::Instant::now();

        loop {
            if start.elapsed() > RECEIPT_TIMEOUT {
                anyhow::bail!("Timeout waiting for transaction {} to be mined", tx_hash);
            }

            let receipt: Option<TxReceipt> = self
                .call("eth_getTransactionReceipt", vec![serde_json::json!(tx_hash)])
                .await?;

            match receipt {
                Some(receipt) => return Ok(receipt),
                None => {
                    tracing::trace!(tx_hash, "Transaction not yet mined, polling...");
                    tokio::time::sleep(RECEIPT_POLL_INTERVAL).await;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_status() {
        let receipt: TxReceipt = serde_json::from_value(serde_json::json!({
            "status": "0x1",
            "contractAddress": "0x70997970c51812dc3a010c7d01b50e0d17dc79c8",
        }))
        .unwrap();
        assert!(receipt.succeeded());
        assert!(receipt.contract_address.is_some());

        let reverted: TxReceipt = serde_json::from_value(serde_json::json!({
            "status": "0x0",
            "contractAddress": null,
        }))
        .unwrap();
        assert!(!reverted.succeeded());
        assert!(reverted.contract_address.is_none());
    }
}
