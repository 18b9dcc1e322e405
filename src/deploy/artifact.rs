//! Contract artifact parsing and validation.
//!
//! An artifact is the compiled output of a smart contract: an ABI (the
//! interface description) and the creation bytecode. Both must be present
//! before a deployment is attempted; an empty ABI array is legal (a
//! contract can expose nothing), an empty bytecode string is not.

use serde::Deserialize;

use crate::deploy::types::{DeployError, DeployResult};

/// Wire form of a deployment request. All fields optional so that missing
/// pieces surface as a validation error instead of a deserialization
/// failure.
#[derive(Debug, Clone, Deserialize)]
pub struct DeployRequest {
    pub artifact: Option<ContractArtifact>,
    pub network: Option<String>,
}

/// Wire form of a contract artifact.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractArtifact {
    /// Ordered sequence of function/event descriptors.
    pub abi: Option<Vec<serde_json::Value>>,
    /// Hex-encoded creation bytecode.
    pub bytecode: Option<String>,
}

/// An artifact that passed validation.
#[derive(Debug, Clone)]
pub struct ValidatedArtifact {
    pub abi: Vec<serde_json::Value>,
    pub bytecode: String,
}

impl ContractArtifact {
    /// Validate presence of both fields.
    ///
    /// Validation must pass before any network or credential work happens;
    /// a bad artifact is a client error, not a server fault.
    pub fn validate(self) -> DeployResult<ValidatedArtifact> {
        let abi = self.abi.ok_or(DeployError::InvalidArtifact)?;
        let bytecode = match self.bytecode {
            Some(b) if !b.is_empty() => b,
            _ => return Err(DeployError::InvalidArtifact),
        };
        Ok(ValidatedArtifact { abi, bytecode })
    }
}

impl DeployRequest {
    /// Split the request into a validated artifact and the raw network
    /// identifier. A missing artifact and a missing network are both
    /// reported through the artifact/network error paths respectively.
    pub fn into_parts(self) -> DeployResult<(ValidatedArtifact, String)> {
        let artifact = self.artifact.ok_or(DeployError::InvalidArtifact)?.validate()?;
        let network = self
            .network
            .ok_or_else(|| DeployError::UnsupportedNetwork("<none>".to_string()))?;
        Ok((artifact, network))
    }
}
