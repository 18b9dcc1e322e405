//! Success-path tests for the deploy endpoint.
//!
//! The chain submission is stubbed at the `DeploymentBackend` seam; these
//! tests run in their own process so the credential env vars they set
//! cannot race the tests that rely on their absence.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use url::Url;

use alloy::primitives::{address, b256};
use alloy::signers::local::PrivateKeySigner;

use deploy_gateway::config::GatewayConfig;
use deploy_gateway::deploy::{
    DeployError, DeploymentBackend, DeploymentOutcome, ValidatedArtifact,
};

mod common;

// Anvil's first account; only used to satisfy the credential lookup.
const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

/// Backend that records the resolved RPC URL and returns a fixed outcome.
struct StubBackend {
    outcome: DeploymentOutcome,
    seen_url: Mutex<Option<Url>>,
}

impl StubBackend {
    fn new(outcome: DeploymentOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            seen_url: Mutex::new(None),
        })
    }
}

#[async_trait]
impl DeploymentBackend for StubBackend {
    async fn deploy(
        &self,
        rpc_url: Url,
        _signer: PrivateKeySigner,
        _artifact: &ValidatedArtifact,
    ) -> Result<DeploymentOutcome, DeployError> {
        *self.seen_url.lock().unwrap() = Some(rpc_url);
        Ok(self.outcome.clone())
    }
}

fn set_credentials() {
    std::env::set_var("PRIVATE_KEY", TEST_PRIVATE_KEY);
    std::env::set_var("INFURA_PROJECT_ID", "test-project");
}

#[tokio::test]
async fn test_successful_deploy_returns_address_and_hash() {
    set_credentials();

    let backend = StubBackend::new(DeploymentOutcome {
        contract_address: address!("5fbdb2315678afecb367f032d93f642f64180aa3"),
        transaction_hash: Some(b256!(
            "1111111111111111111111111111111111111111111111111111111111111111"
        )),
    });
    let (addr, _shutdown) =
        common::spawn_gateway_with_backend(GatewayConfig::default(), backend.clone()).await;

    let res = common::client()
        .post(format!("http://{}/api/deployContract", addr))
        .json(&json!({ "artifact": { "abi": [], "bytecode": "0x600a" }, "network": "eth_sepolia" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert!(!body["contractAddress"].as_str().unwrap().is_empty());
    assert!(body["transactionHash"].is_string());

    // The handler resolved eth_sepolia with the project id from env before
    // reaching the backend.
    let seen = backend.seen_url.lock().unwrap().clone().unwrap();
    assert_eq!(seen.as_str(), "https://sepolia.infura.io/v3/test-project");
}

#[tokio::test]
async fn test_successful_deploy_allows_null_hash() {
    set_credentials();

    let backend = StubBackend::new(DeploymentOutcome {
        contract_address: address!("5fbdb2315678afecb367f032d93f642f64180aa3"),
        transaction_hash: None,
    });
    let (addr, _shutdown) =
        common::spawn_gateway_with_backend(GatewayConfig::default(), backend).await;

    let res = common::client()
        .post(format!("http://{}/api/deployContract", addr))
        .json(&json!({ "artifact": { "abi": [], "bytecode": "0x600a" }, "network": "eth_sepolia" }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert!(!body["contractAddress"].as_str().unwrap().is_empty());
    assert!(body["transactionHash"].is_null());
}
