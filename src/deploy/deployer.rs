//! Contract deployment submission.
//!
//! # Responsibilities
//! - Build a create transaction from artifact bytecode
//! - Sign with the custodial key and broadcast over JSON-RPC
//! - Await the receipt and extract the contract address
//!
//! # Design Decisions
//! - The submission is a single atomic operation from this layer's point of
//!   view. It mutates chain state and spends gas, so it is never retried
//!   here; a retry must be the caller's explicit decision.
//! - No cancellation: once broadcast, the transaction cannot be aborted
//!   from this layer.

use std::time::Duration;

use alloy::network::{EthereumWallet, TransactionBuilder};
use alloy::primitives::Bytes;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use async_trait::async_trait;
use url::Url;

use crate::deploy::artifact::ValidatedArtifact;
use crate::deploy::types::{DeployError, DeployResult, DeploymentOutcome};

/// Submission seam between the HTTP handler and the chain.
///
/// The gateway only ever performs one chain operation, but putting it
/// behind a trait keeps the handler testable without JSON-RPC traffic.
#[async_trait]
pub trait DeploymentBackend: Send + Sync {
    /// Deploy the artifact's bytecode to the chain behind `rpc_url`.
    async fn deploy(
        &self,
        rpc_url: Url,
        signer: PrivateKeySigner,
        artifact: &ValidatedArtifact,
    ) -> DeployResult<DeploymentOutcome>;
}

/// Submits deployment transactions and waits for their receipts.
#[derive(Debug, Clone)]
pub struct ContractDeployer {
    /// Upper bound on the receipt wait.
    receipt_timeout: Duration,
}

impl ContractDeployer {
    pub fn new(receipt_timeout: Duration) -> Self {
        Self { receipt_timeout }
    }
}

#[async_trait]
impl DeploymentBackend for ContractDeployer {
    /// Gas, fees, and nonce are filled by the provider; constructor
    /// arguments are not supported, so the creation payload is the raw
    /// bytecode.
    async fn deploy(
        &self,
        rpc_url: Url,
        signer: PrivateKeySigner,
        artifact: &ValidatedArtifact,
    ) -> DeployResult<DeploymentOutcome> {
        let bytecode: Bytes = artifact
            .bytecode
            .parse()
            .map_err(|e| DeployError::Submission(format!("Invalid bytecode hex: {}", e)))?;

        let sender = signer.address();
        let wallet = EthereumWallet::from(signer);
        let provider = ProviderBuilder::new().wallet(wallet).connect_http(rpc_url);

        let tx = TransactionRequest::default().with_deploy_code(bytecode);

        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| DeployError::Submission(e.to_string()))?;
        let transaction_hash = *pending.tx_hash();

        tracing::info!(
            tx_hash = %transaction_hash,
            sender = %sender,
            "Deployment transaction broadcast"
        );

        let receipt = pending
            .with_timeout(Some(self.receipt_timeout))
            .get_receipt()
            .await
            .map_err(|e| DeployError::Submission(e.to_string()))?;

        let contract_address = receipt.contract_address.ok_or(DeployError::NotDeployed)?;

        tracing::info!(
            contract_address = %contract_address,
            tx_hash = %transaction_hash,
            "Contract deployed"
        );

        Ok(DeploymentOutcome {
            contract_address,
            transaction_hash: Some(transaction_hash),
        })
    }
}
