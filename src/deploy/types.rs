//! Deployment types and error definitions.

use alloy::primitives::{Address, TxHash};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while handling a deployment request.
///
/// The variants partition the taxonomy the HTTP layer cares about: client
/// input problems (`InvalidArtifact`, `UnsupportedNetwork`) versus operator
/// or chain-side failures (everything else). Unsupported networks are
/// client errors here; the caller chose the identifier.
#[derive(Debug, Error)]
pub enum DeployError {
    /// The artifact was missing, or missing its abi/bytecode fields.
    #[error("Invalid contract artifact")]
    InvalidArtifact,

    /// The network identifier is not in the supported set.
    #[error("Unsupported network: {0}")]
    UnsupportedNetwork(String),

    /// A required credential (signing key, provider project id) is not
    /// present in the process environment. Fatal for the request, not
    /// retryable, and not the caller's fault.
    #[error("Missing credential: {0} is not set")]
    MissingCredential(&'static str),

    /// The signing key was present but could not be parsed.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// The broadcast or receipt wait failed. Transient RPC hiccups and
    /// permanent on-chain failures are deliberately not distinguished.
    #[error("Submission failed: {0}")]
    Submission(String),

    /// The transaction was mined but the receipt carried no contract
    /// address.
    #[error("Contract was not deployed")]
    NotDeployed,
}

/// Result type for deployment operations.
pub type DeployResult<T> = Result<T, DeployError>;

/// Outcome of a successful deployment.
///
/// Produced once per deployment and never persisted; the chain owns the
/// state. `transaction_hash` is optional to match the wire contract, which
/// allows a null hash when the submission path does not expose one.
#[derive(Debug, Clone, Serialize)]
pub struct DeploymentOutcome {
    /// Address the contract was created at.
    #[serde(rename = "contractAddress")]
    pub contract_address: Address,

    /// Hash of the deployment transaction.
    #[serde(rename = "transactionHash")]
    pub transaction_hash: Option<TxHash>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    #[test]
    fn test_error_display() {
        let err = DeployError::UnsupportedNetwork("goerli".to_string());
        assert_eq!(err.to_string(), "Unsupported network: goerli");

        let err = DeployError::MissingCredential("PRIVATE_KEY");
        assert!(err.to_string().contains("PRIVATE_KEY"));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = DeploymentOutcome {
            contract_address: address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266"),
            transaction_hash: None,
        };
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json["contractAddress"].is_string());
        assert!(json["transactionHash"].is_null());
    }
}
